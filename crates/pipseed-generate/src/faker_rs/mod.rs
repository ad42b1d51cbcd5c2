mod adapter;
pub mod locales;

pub use adapter::{FakeRsProvider, provider_for};
pub use locales::LocaleKey;
