//! Fake record generation and serialization for pipseed.
//!
//! A [`RecordGenerator`] walks the field table for a [`RecordKind`], asking a
//! locale-bound [`FakeValueProvider`] for every value. The `output` module turns
//! the resulting records into JSON, CSV, or SQL text.
//!
//! [`RecordKind`]: pipseed_core::RecordKind

pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod output;
pub mod provider;
pub mod schema;

pub use engine::{RecordGenerator, generate_records};
pub use errors::GenerationError;
pub use faker_rs::{FakeRsProvider, LocaleKey, provider_for};
pub use output::{FormatOptions, format_records, to_csv, to_json, to_sql};
pub use provider::FakeValueProvider;
pub use schema::{FieldSpec, field_names, fields_for};
