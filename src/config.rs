// ⚙️ Configuration - flags shared by the CLI and the API server
// Every flag can also come from the environment.

use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

/// Command-line / environment options common to both binaries.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// SQLite database file
    #[arg(long, env = "DATABASE_PATH", default_value = "words.db")]
    pub database: PathBuf,

    /// Child's birthdate (YYYY-MM-DD), used for age and milestone display
    #[arg(long, env = "BABY_BIRTHDATE")]
    pub birthdate: Option<String>,

    /// Log filter (e.g. "info", "debug", "word_tracker=trace")
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,

    /// None when not configured or not a valid date
    pub birthdate: Option<NaiveDate>,

    pub log_level: String,
}

impl Config {
    pub fn from_args(args: &ConfigArgs) -> Self {
        Config {
            database_path: args.database.clone(),
            birthdate: parse_birthdate(args.birthdate.as_deref()),
            log_level: args.log_level.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: PathBuf::from("words.db"),
            birthdate: None,
            log_level: "info".to_string(),
        }
    }
}

/// Parse an optional `YYYY-MM-DD` birthdate.
///
/// Missing, blank, or malformed values all mean "age unknown"; a malformed
/// value is logged but never fails startup.
pub fn parse_birthdate(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value.map(str::trim).filter(|s| !s.is_empty())?;

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Ignoring invalid birthdate {:?}: {}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_birthdate_valid() {
        assert_eq!(
            parse_birthdate(Some("2024-01-15")),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_birthdate(Some(" 2023-06-01 ")),
            NaiveDate::from_ymd_opt(2023, 6, 1)
        );
    }

    #[test]
    fn test_parse_birthdate_missing_or_invalid() {
        assert_eq!(parse_birthdate(None), None);
        assert_eq!(parse_birthdate(Some("")), None);
        assert_eq!(parse_birthdate(Some("01/15/2024")), None);
        assert_eq!(parse_birthdate(Some("2024-02-30")), None);
    }

    #[test]
    fn test_from_args() {
        let args = ConfigArgs {
            database: PathBuf::from("/tmp/test.db"),
            birthdate: Some("2024-01-15".to_string()),
            log_level: "debug".to_string(),
        };

        let config = Config::from_args(&args);
        assert_eq!(config.database_path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.birthdate, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.database_path, PathBuf::from("words.db"));
        assert!(config.birthdate.is_none());
    }
}
