mod config;
mod logging;
mod sink;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Parser};
use pipseed_core::{OutputFormat, RecordKind};
use pipseed_generate::output::DEFAULT_TABLE_NAME;
use pipseed_generate::{FormatOptions, GenerationError, RecordGenerator, format_records};
use thiserror::Error;

use config::{ConfigError, ConfigFile, Defaults, load_config};

const DEFAULT_COUNT: i64 = 10;
const DEFAULT_LOCALE: &str = "en_US";

const EXAMPLES: &str = "\
Examples:
  pipseed person -n 10                     # Generate 10 persons in JSON format
  pipseed person -n 5 -f csv               # Generate 5 persons in CSV format
  pipseed company -n 3 -f sql -t companies # Generate 3 companies as SQL inserts
  pipseed product -n 20 -l fr_FR           # Generate 20 products with French locale
  pipseed user -n 2 --seed 7 -p            # Same two users on every run";

fn after_help() -> String {
    let mut help = format!("{EXAMPLES}\n\nAvailable data types:");
    for kind in RecordKind::ALL {
        let _ = write!(help, "\n  {:<11} - {}", kind.as_str(), kind.description());
    }
    help
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Core(#[from] pipseed_core::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "pipseed",
    version,
    about = "Generate fake data for testing purposes",
    after_help = after_help()
)]
struct Cli {
    /// Type of data to generate.
    #[arg(value_name = "DATA_TYPE", value_parser = PossibleValuesParser::new(RecordKind::names()))]
    data_type: String,
    /// Number of records to generate (default: 10).
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,
    /// Output format (default: json).
    #[arg(short, long, value_parser = PossibleValuesParser::new(OutputFormat::names()))]
    format: Option<String>,
    /// Pretty print JSON output (only for JSON format).
    #[arg(short, long)]
    pretty: bool,
    /// Table name for SQL output (default: data).
    #[arg(short, long)]
    table: Option<String>,
    /// Locale for data generation (default: en_US, e.g. fr_FR, pt_BR).
    #[arg(short, long)]
    locale: Option<String>,
    /// Output file path (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with a [defaults] table.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Emit logs as JSON lines.
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

/// Options after merging flags, config file, and built-in defaults.
#[derive(Debug, Clone, PartialEq)]
struct RunSettings {
    kind: String,
    count: i64,
    format: OutputFormat,
    pretty: bool,
    table: String,
    locale: String,
    seed: Option<u64>,
    output: Option<PathBuf>,
}

impl RunSettings {
    fn resolve(cli: Cli, defaults: Defaults) -> Result<Self, CliError> {
        let format: OutputFormat = match cli.format {
            Some(value) => value.parse()?,
            None => defaults.format.unwrap_or_default(),
        };

        Ok(Self {
            kind: cli.data_type,
            count: cli.count.or(defaults.count).unwrap_or(DEFAULT_COUNT),
            format,
            pretty: cli.pretty || defaults.pretty.unwrap_or(false),
            table: cli
                .table
                .or(defaults.table)
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            locale: cli
                .locale
                .or(defaults.locale)
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            seed: cli.seed.or(defaults.seed),
            output: cli.output,
        })
    }

    fn format_options(&self) -> FormatOptions {
        FormatOptions {
            format: self.format,
            pretty: self.pretty,
            table: self.table.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = logging::init_logging(cli.verbose, cli.log_json)
        .map_err(CliError::Logging)
        .and_then(|()| run(cli));
    if let Err(err) = &result {
        tracing::error!(event = "run_failed", error = %err);
    }
    let (code, message) = exit_report(&result);
    if let Some(message) = message {
        eprintln!("{message}");
    }
    ExitCode::from(code)
}

/// Exit status and stderr line for a finished run.
fn exit_report(result: &Result<(), CliError>) -> (u8, Option<String>) {
    match result {
        Ok(()) => (0, None),
        Err(err) => (1, Some(format!("Error: {err}"))),
    }
}

fn written_message(path: &Path) -> String {
    format!("Data written to {}", path.display())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => {
            let config = load_config(path)?;
            tracing::info!(event = "config_loaded", path = %path.display());
            config
        }
        None => ConfigFile::default(),
    };
    let settings = RunSettings::resolve(cli, config.defaults)?;

    let timer = Instant::now();
    tracing::info!(
        event = "run_started",
        kind = %settings.kind,
        count = settings.count,
        format = %settings.format,
        locale = %settings.locale,
        seeded = settings.seed.is_some()
    );

    let kind: RecordKind = settings.kind.parse()?;
    let mut generator = RecordGenerator::new(&settings.locale)?;
    if let Some(seed) = settings.seed {
        generator = generator.with_seed(seed);
    }
    let records = generator.generate(kind, settings.count)?;
    let output = format_records(&records, &settings.format_options())?;

    match &settings.output {
        Some(path) => {
            sink::write_file_atomic(path, output.as_bytes())?;
            tracing::info!(event = "output_written", path = %path.display(), bytes = output.len());
            eprintln!("{}", written_message(path));
        }
        None => sink::write_stdout(&output)?,
    }

    tracing::info!(
        event = "run_finished",
        status = "success",
        records = records.len(),
        duration_ms = timer.elapsed().as_millis() as u64
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pipseed").chain(args.iter().copied()))
            .expect("parse args")
    }

    #[test]
    fn applies_built_in_defaults() {
        let settings =
            RunSettings::resolve(parse(&["person"]), Defaults::default()).expect("resolve");
        assert_eq!(
            settings,
            RunSettings {
                kind: "person".to_string(),
                count: 10,
                format: OutputFormat::Json,
                pretty: false,
                table: "data".to_string(),
                locale: "en_US".to_string(),
                seed: None,
                output: None,
            }
        );
    }

    #[test]
    fn parses_short_flags() {
        let cli = parse(&[
            "company", "-n", "3", "-f", "sql", "-p", "-t", "companies", "-l", "fr_FR", "-o",
            "out.sql",
        ]);
        let settings = RunSettings::resolve(cli, Defaults::default()).expect("resolve");
        assert_eq!(settings.count, 3);
        assert_eq!(settings.format, OutputFormat::Sql);
        assert!(settings.pretty);
        assert_eq!(settings.table, "companies");
        assert_eq!(settings.locale, "fr_FR");
        assert_eq!(settings.output, Some(PathBuf::from("out.sql")));
    }

    #[test]
    fn flags_override_config_defaults() {
        let defaults = Defaults {
            count: Some(50),
            format: Some(OutputFormat::Csv),
            pretty: Some(true),
            table: Some("people".to_string()),
            locale: Some("pt_BR".to_string()),
            seed: Some(9),
        };
        let settings = RunSettings::resolve(parse(&["person", "-n", "2", "--seed", "1"]), defaults)
            .expect("resolve");
        assert_eq!(settings.count, 2);
        assert_eq!(settings.seed, Some(1));
        assert_eq!(settings.format, OutputFormat::Csv);
        assert!(settings.pretty);
        assert_eq!(settings.table, "people");
        assert_eq!(settings.locale, "pt_BR");
    }

    #[test]
    fn accepts_negative_count_for_the_generator_to_reject() {
        let cli = parse(&["user", "-n", "-4"]);
        assert_eq!(cli.count, Some(-4));
    }

    #[test]
    fn rejects_unknown_data_type_and_format() {
        assert!(Cli::try_parse_from(["pipseed", "invalid_type"]).is_err());
        assert!(Cli::try_parse_from(["pipseed", "person", "-f", "xml"]).is_err());
        assert!(Cli::try_parse_from(["pipseed"]).is_err());
    }

    #[test]
    fn counts_verbosity() {
        let cli = parse(&["person", "-vv", "--log-json"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.log_json);
    }

    #[test]
    fn help_lists_every_data_type() {
        let help = after_help();
        for kind in RecordKind::ALL {
            assert!(help.contains(kind.description()));
        }
    }

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pipseed-cli-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn missing_output_directory_fails_with_error_line() {
        let dir = temp_dir();
        let target = dir.join("missing").join("out.json");
        let target_arg = target.to_string_lossy().into_owned();
        let result = run(parse(&["person", "-n", "2", "-o", &target_arg]));
        assert!(matches!(result, Err(CliError::Io(_))));
        let (code, message) = exit_report(&result);
        assert_eq!(code, 1);
        assert!(message.expect("error line").starts_with("Error: "));
        assert!(!target.exists());
        std::fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn unsupported_locale_is_reported() {
        let result = run(parse(&["person", "-l", "xx_XX"]));
        let (code, message) = exit_report(&result);
        assert_eq!(code, 1);
        let message = message.expect("error line");
        assert!(message.starts_with("Error: "), "{message}");
        assert!(message.contains("unsupported locale"), "{message}");
    }

    #[test]
    fn oversized_count_fails_without_panicking() {
        let count = i64::MAX.to_string();
        let result = run(parse(&["person", "-n", &count]));
        assert!(matches!(result, Err(CliError::Generation(_))));
        assert_eq!(exit_report(&result).0, 1);
    }

    #[test]
    fn writes_file_output_and_reports_path() {
        let dir = temp_dir();
        let target = dir.join("users.csv");
        let target_arg = target.to_string_lossy().into_owned();
        let result = run(parse(&[
            "user", "-n", "3", "-f", "csv", "--seed", "4", "-o", &target_arg,
        ]));
        assert_eq!(exit_report(&result), (0, None));
        let written = std::fs::read_to_string(&target).expect("read output");
        assert_eq!(written.lines().count(), 4);
        assert_eq!(
            written_message(&target),
            format!("Data written to {}", target.display())
        );
        std::fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
