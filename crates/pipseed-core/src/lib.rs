//! Core contracts for pipseed.
//!
//! This crate defines the record model, the record kinds and output formats,
//! and the error type shared by the generator and the CLI.

pub mod error;
pub mod record;
pub mod types;

pub use error::{Error, Result};
pub use record::{FieldValue, Record, RecordSet};
pub use types::{OutputFormat, RecordKind};
