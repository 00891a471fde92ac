// Runtime configuration read from `VOLUNTEER_LOG_*` environment variables.
//
// Unset and blank variables fall back to the defaults below.

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::modules::volunteer_log::core::csv_export::CsvQuoting;
use crate::shared::infrastructure::entry_store::json_file::DEFAULT_QUOTA_BYTES;

pub const ADDR_VAR: &str = "VOLUNTEER_LOG_ADDR";
pub const STORE_PATH_VAR: &str = "VOLUNTEER_LOG_STORE_PATH";
pub const STORE_QUOTA_VAR: &str = "VOLUNTEER_LOG_STORE_QUOTA_BYTES";
pub const MIRROR_URL_VAR: &str = "VOLUNTEER_LOG_MIRROR_URL";
pub const MIRROR_TIMEOUT_VAR: &str = "VOLUNTEER_LOG_MIRROR_TIMEOUT_MS";
pub const MIRROR_WAIT_VAR: &str = "VOLUNTEER_LOG_MIRROR_WAIT_MS";
pub const CSV_QUOTING_VAR: &str = "VOLUNTEER_LOG_CSV_QUOTING";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name}={value} is not valid: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub store_path: PathBuf,
    pub store_quota_bytes: usize,
    /// `None` disables mirroring.
    pub mirror_url: Option<String>,
    pub mirror_timeout: Duration,
    /// How long a submission response waits for the mirror outcome.
    pub mirror_wait: Duration,
    pub csv_quoting: CsvQuoting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            store_path: PathBuf::from("volunteer_entries.json"),
            store_quota_bytes: DEFAULT_QUOTA_BYTES,
            mirror_url: None,
            mirror_timeout: Duration::from_millis(10_000),
            mirror_wait: Duration::from_millis(2_000),
            csv_quoting: CsvQuoting::Standard,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Unset and blank variables take the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let store_quota_bytes = parse_var(&read, STORE_QUOTA_VAR, defaults.store_quota_bytes)?;
        if store_quota_bytes == 0 {
            return Err(ConfigError::Invalid {
                name: STORE_QUOTA_VAR,
                value: "0".into(),
                reason: "must be > 0".into(),
            });
        }

        Ok(Self {
            addr: parse_var(&read, ADDR_VAR, defaults.addr)?,
            store_path: read(STORE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            store_quota_bytes,
            mirror_url: read(MIRROR_URL_VAR).map(|url| url.trim().to_string()),
            mirror_timeout: Duration::from_millis(parse_var(
                &read,
                MIRROR_TIMEOUT_VAR,
                millis(defaults.mirror_timeout),
            )?),
            mirror_wait: Duration::from_millis(parse_var(
                &read,
                MIRROR_WAIT_VAR,
                millis(defaults.mirror_wait),
            )?),
            csv_quoting: parse_var(&read, CSV_QUOTING_VAR, defaults.csv_quoting)?,
        })
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn parse_var<T>(
    read: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match read(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|error: T::Err| ConfigError::Invalid {
            name,
            reason: error.to_string(),
            value,
        }),
    }
}
