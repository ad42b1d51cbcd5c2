use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Category of record being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Person,
    Address,
    Company,
    Product,
    Transaction,
    User,
}

impl RecordKind {
    /// Every kind, in the order they are documented.
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Person,
        RecordKind::Address,
        RecordKind::Company,
        RecordKind::Product,
        RecordKind::Transaction,
        RecordKind::User,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Person => "person",
            RecordKind::Address => "address",
            RecordKind::Company => "company",
            RecordKind::Product => "product",
            RecordKind::Transaction => "transaction",
            RecordKind::User => "user",
        }
    }

    pub fn names() -> [&'static str; 6] {
        Self::ALL.map(RecordKind::as_str)
    }

    /// One-line summary used in CLI help.
    pub fn description(self) -> &'static str {
        match self {
            RecordKind::Person => "Generate person data (name, email, phone, address)",
            RecordKind::Address => "Generate address data (street, city, country, coordinates)",
            RecordKind::Company => "Generate company data (name, email, website, industry)",
            RecordKind::Product => "Generate product data (name, description, price, SKU)",
            RecordKind::Transaction => "Generate transaction data (amount, currency, date, status)",
            RecordKind::User => "Generate user data (username, email, password hash)",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown data type: {value}. Available types: {}",
                    RecordKind::names().join(", ")
                ))
            })
    }
}

/// Serialization selected for the generated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Sql,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Sql];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Sql => "sql",
        }
    }

    pub fn names() -> [&'static str; 3] {
        Self::ALL.map(OutputFormat::as_str)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == value)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown output format: {value}. Available formats: {}",
                    OutputFormat::names().join(", ")
                ))
            })
    }
}
