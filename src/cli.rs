use crate::logger::LogConfig;
use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;

/// Display live weather for a US ZIP code.
#[derive(Debug, Parser)]
#[command(name = "zipwx", version, about = "Display live weather for a US ZIP code")]
pub struct Cli {
    /// US ZIP code to watch.
    pub zipcode: String,

    /// Show attempted API URLs and logging errors on screen.
    #[arg(short, long)]
    pub debug: bool,

    /// Append readings to FILE every MINUTES minutes.
    #[arg(short, long, num_args = 2, value_names = ["MINUTES", "FILE"])]
    pub log: Option<Vec<String>>,
}

impl Cli {
    /// Logging settings, if `--log` was given. The interval must be a
    /// positive whole number of minutes.
    pub fn log_config(&self) -> Result<Option<LogConfig>> {
        let Some(args) = &self.log else {
            return Ok(None);
        };
        let (minutes_raw, file) = match args.as_slice() {
            [minutes, file] => (minutes, file),
            _ => return Err(anyhow!("Expected --log MINUTES FILE")),
        };
        let minutes: u64 = minutes_raw
            .parse()
            .map_err(|_| anyhow!("Invalid log interval"))?;
        if minutes == 0 {
            return Err(anyhow!("Invalid log interval"));
        }
        Ok(Some(LogConfig::new(minutes, PathBuf::from(file))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_zipcode_only() {
        let cli = Cli::try_parse_from(["zipwx", "02134"]).unwrap();
        assert_eq!(cli.zipcode, "02134");
        assert!(!cli.debug);
        assert!(cli.log_config().unwrap().is_none());
    }

    #[test]
    fn test_missing_zipcode_is_usage_error() {
        assert!(Cli::try_parse_from(["zipwx"]).is_err());
    }

    #[test]
    fn test_debug_flag() {
        let cli = Cli::try_parse_from(["zipwx", "-d", "02134"]).unwrap();
        assert!(cli.debug);
    }

    #[test]
    fn test_log_arguments() {
        let cli = Cli::try_parse_from(["zipwx", "-l", "5", "porch.log", "02134"]).unwrap();
        let config = cli.log_config().unwrap().unwrap();
        assert_eq!(config.interval, Duration::from_secs(300));
        assert_eq!(config.path, PathBuf::from("porch.log"));
        assert_eq!(config.label, "porch");
    }

    #[test]
    fn test_log_requires_two_values() {
        // -l swallows both following values, leaving the positional missing
        assert!(Cli::try_parse_from(["zipwx", "-l", "5", "02134"]).is_err());
        assert!(Cli::try_parse_from(["zipwx", "02134", "-l", "5"]).is_err());
    }

    #[test]
    fn test_non_integer_interval_rejected() {
        let cli = Cli::try_parse_from(["zipwx", "-l", "abc", "porch.log", "02134"]).unwrap();
        let err = cli.log_config().unwrap_err();
        assert_eq!(err.to_string(), "Invalid log interval");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let cli = Cli::try_parse_from(["zipwx", "-l", "0", "porch.log", "02134"]).unwrap();
        assert!(cli.log_config().is_err());
    }
}
