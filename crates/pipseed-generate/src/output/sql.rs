use pipseed_core::{FieldValue, Record};

/// One `INSERT INTO` statement per record, newline separated.
///
/// `table` is written verbatim; callers must pass a safe identifier. Column
/// names come from the first record.
pub fn to_sql(records: &[Record], table: &str) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let fields: Vec<&str> = first.keys().collect();
    let columns = fields.join(", ");

    records
        .iter()
        .map(|record| {
            let values = fields
                .iter()
                .map(|name| record.get(name).map_or_else(|| "NULL".to_string(), sql_literal))
                .collect::<Vec<_>>()
                .join(", ");
            format!("INSERT INTO {table} ({columns}) VALUES ({values});")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// SQL literal for a field value: strings quoted with `'` doubled.
pub fn sql_literal(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "NULL".to_string(),
        FieldValue::Bool(true) => "TRUE".to_string(),
        FieldValue::Bool(false) => "FALSE".to_string(),
        FieldValue::Int(value) => value.to_string(),
        FieldValue::Float(value) => value.to_string(),
        FieldValue::Text(value) => format!("'{}'", value.replace('\'', "''")),
    }
}
