//! Run configuration

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Address list used when no source is given
pub const DEFAULT_SOURCE_URL: &str = "https://gist.githubusercontent.com/immujahidkhan/6312618368ee7a84685616645548c9d0/raw/30118bb9317d674c33167a32417d79cf10e5264d/email.json";

pub const DEFAULT_OUTPUT_FILE: &str = "emails.xlsx";

pub const DEFAULT_SHEET_NAME: &str = "Email Addresses";

/// Connect and request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the raw address list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Self::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address list location
    pub source: Source,

    /// Workbook path to write
    pub output: PathBuf,

    /// HTTP connect and request timeout
    pub timeout: Duration,

    /// Worksheet name
    pub sheet_name: String,

    /// Append a `_YYYYMMDD_HHMMSS` suffix to the output file name
    pub timestamped: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            timestamped: false,
        }
    }
}

impl Config {
    /// Final output path, with the timestamp suffix applied if enabled
    #[must_use]
    pub fn output_path(&self, now: NaiveDateTime) -> PathBuf {
        if self.timestamped {
            timestamped_path(&self.output, now)
        } else {
            self.output.clone()
        }
    }
}

/// Insert `_YYYYMMDD_HHMMSS` between file stem and extension.
///
/// `emails.xlsx` at 2025-01-01 12:00:00 becomes `emails_20250101_120000.xlsx`.
#[must_use]
pub fn timestamped_path(path: &Path, now: NaiveDateTime) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stamp = now.format("%Y%m%d_%H%M%S");

    let file_name = match path.extension() {
        Some(ext) => format!("{stem}_{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{stamp}"),
    };

    path.with_file_name(file_name)
}
