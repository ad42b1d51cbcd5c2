use pipseed_core::Record;

use crate::errors::GenerationError;

/// CSV with a header row taken from the first record's field names.
///
/// Values are quoted only when they contain a comma, a quote, or a line break.
/// An empty input yields an empty string with no header.
///
/// Rows end with `\n`, not the RFC 4180 `\r\n`, and booleans render as
/// lowercase `true`/`false`. Both are intentional so the output matches the
/// JSON and SQL renderings and diffs cleanly on Unix.
pub fn to_csv(records: &[Record]) -> Result<String, GenerationError> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let header: Vec<&str> = first.keys().collect();
    writer.write_record(&header)?;

    for record in records {
        let row: Vec<String> = header
            .iter()
            .map(|name| record.get(name).map(ToString::to_string).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    String::from_utf8(bytes).map_err(|err| {
        GenerationError::InvalidArgument(format!("csv output is not valid utf-8: {err}"))
    })
}
