pub mod csv;
pub mod json;
pub mod sql;

pub use self::csv::to_csv;
pub use self::json::to_json;
pub use self::sql::to_sql;

use pipseed_core::{OutputFormat, Record};

use crate::errors::GenerationError;

pub const DEFAULT_TABLE_NAME: &str = "data";

/// Formatting knobs taken from the command line.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub format: OutputFormat,
    /// Indented JSON; ignored by the other formats.
    pub pretty: bool,
    /// Target table for SQL inserts; ignored by the other formats.
    pub table: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: false,
            table: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

/// Renders `records` in the format selected by `options`.
pub fn format_records(
    records: &[Record],
    options: &FormatOptions,
) -> Result<String, GenerationError> {
    match options.format {
        OutputFormat::Json => to_json(records, options.pretty),
        OutputFormat::Csv => to_csv(records),
        OutputFormat::Sql => Ok(to_sql(records, &options.table)),
    }
}
