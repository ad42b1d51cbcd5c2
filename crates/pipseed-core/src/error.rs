use thiserror::Error;

/// Core error type shared across pipseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller supplied a value outside the accepted set.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias for results returned by pipseed crates.
pub type Result<T> = std::result::Result<T, Error>;
