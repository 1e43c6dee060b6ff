//! Interval logging of readings to a plain text file, one line per write.
//! The file is opened and closed on every append so no handle outlives a
//! tick; a failed write is reported upward but never fatal.

use crate::weather::Reading;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

/// Logging settings, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub interval: Duration,
    pub path: PathBuf,
    /// The log file's stem; shown inside the header brackets.
    pub label: String,
}

impl LogConfig {
    pub fn new(interval_minutes: u64, path: PathBuf) -> Self {
        let label = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "live".to_string());
        Self {
            interval: Duration::from_secs(interval_minutes * 60),
            path,
            label,
        }
    }
}

/// Append one reading, creating the file if it does not exist yet.
pub fn append_reading(path: &Path, at: DateTime<Local>, reading: &Reading) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    writeln!(file, "{}", format_line(at, reading))
        .with_context(|| format!("Failed to write log file {}", path.display()))?;
    Ok(())
}

/// Whitespace-separated columns: timestamp, °F, %RH, in/hr, direction,
/// speed mph, gust mph.
fn format_line(at: DateTime<Local>, reading: &Reading) -> String {
    format!(
        "{} {:.1} {} {:.2} {} {:.1} {:.1}",
        at.format("%Y-%m-%dT%H:%M:%S"),
        reading.temperature_f,
        reading.humidity_pct,
        reading.precipitation_in,
        reading.wind_direction,
        reading.wind_speed_mph,
        reading.wind_gust_mph
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::CompassPoint;
    use chrono::TimeZone;
    use std::fs;

    fn make_reading() -> Reading {
        Reading {
            temperature_f: 80.33,
            humidity_pct: 45,
            precipitation_in: 0.0787,
            wind_direction: CompassPoint::E,
            wind_speed_mph: 11.18,
            wind_gust_mph: 11.18,
        }
    }

    fn make_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 20, 6, 30, 5).unwrap()
    }

    #[test]
    fn test_format_line_columns() {
        let line = format_line(make_timestamp(), &make_reading());
        assert_eq!(line, "2026-03-20T06:30:05 80.3 45 0.08 E 11.2 11.2");
    }

    #[test]
    fn test_append_creates_and_extends_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("porch.log");
        let reading = make_reading();

        append_reading(&path, make_timestamp(), &reading).unwrap();
        append_reading(&path, make_timestamp(), &reading).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("80.3 45 0.08 E 11.2 11.2"));
    }

    #[test]
    fn test_append_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("porch.log");

        let err = append_reading(&path, make_timestamp(), &make_reading()).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }

    #[test]
    fn test_label_is_file_stem() {
        let config = LogConfig::new(5, PathBuf::from("/tmp/porch.log"));
        assert_eq!(config.label, "porch");
        assert_eq!(config.interval, Duration::from_secs(300));
    }

    #[test]
    fn test_label_without_extension() {
        let config = LogConfig::new(1, PathBuf::from("readings"));
        assert_eq!(config.label, "readings");
        assert_eq!(config.interval, Duration::from_secs(60));
    }
}
