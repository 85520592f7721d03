use dotenvy::dotenv;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_WORKERS: usize = 8;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
    pub workers: usize,
    pub fetch_timeout: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => {
                write!(f, "{var} has an invalid value: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            workers: DEFAULT_WORKERS,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            addr: parse_var(&lookup, "LISTINGS_ADDR")?.unwrap_or(defaults.addr),
            data_dir: lookup("LISTINGS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            workers: parse_workers(&lookup)?.unwrap_or(defaults.workers),
            fetch_timeout: parse_var(&lookup, "LISTINGS_FETCH_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
        })
    }
}

// astra never starts a worker when the pool size is 0.
fn parse_workers<F>(lookup: &F) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match parse_var(lookup, "LISTINGS_WORKERS")? {
        Some(0) => Err(ConfigError::Invalid {
            var: "LISTINGS_WORKERS",
            value: "0".to_string(),
        }),
        workers => Ok(workers),
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
