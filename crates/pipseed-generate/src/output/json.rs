use pipseed_core::Record;

use crate::errors::GenerationError;

/// JSON array of objects. Non-ASCII text is written as-is; `pretty` indents
/// with two spaces.
pub fn to_json(records: &[Record], pretty: bool) -> Result<String, GenerationError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(encoded)
}
