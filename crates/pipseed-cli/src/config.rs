use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use pipseed_core::OutputFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
}

/// Contents of a `--config` file.
///
/// ```toml
/// [defaults]
/// count = 25
/// format = "csv"
/// locale = "fr_FR"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Fallback values for options not given on the command line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub count: Option<i64>,
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
    pub table: Option<String>,
    pub locale: Option<String>,
    pub seed: Option<u64>,
}

pub fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<ConfigFile, ConfigError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults_table() {
        let config = parse_config(
            r#"
[defaults]
count = 3
format = "sql"
pretty = true
table = "people"
locale = "pt_BR"
seed = 42
"#,
        )
        .expect("parse config");
        let defaults = config.defaults;
        assert_eq!(defaults.count, Some(3));
        assert_eq!(defaults.format, Some(OutputFormat::Sql));
        assert_eq!(defaults.pretty, Some(true));
        assert_eq!(defaults.table.as_deref(), Some("people"));
        assert_eq!(defaults.locale.as_deref(), Some("pt_BR"));
        assert_eq!(defaults.seed, Some(42));
    }

    #[test]
    fn empty_file_means_no_defaults() {
        let config = parse_config("").expect("parse config");
        assert!(config.defaults.count.is_none());
        assert!(config.defaults.format.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = parse_config("[defaults]\nrows = 5\n");
        assert!(matches!(result, Err(ConfigError::TomlDecode(_))));
    }

    #[test]
    fn rejects_unknown_format() {
        let result = parse_config("[defaults]\nformat = \"xml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_config(Path::new("/nonexistent/pipseed.toml")).expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/pipseed.toml"));
    }
}
