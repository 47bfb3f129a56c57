//! Process configuration read from `MINDGARDEN_*` environment variables.
//!
//! Every value has a default; an unparsable value is logged and replaced by the default
//! rather than aborting startup.

mod timeouts;

pub use timeouts::TimeoutConfig;

use log::warn;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_PORT: &str = "MINDGARDEN_PORT";
pub const ENV_DATABASE_PATH: &str = "MINDGARDEN_DATABASE_PATH";
pub const ENV_LOG_DIR: &str = "MINDGARDEN_LOG_DIR";
pub const ENV_FRONTEND_URL: &str = "MINDGARDEN_FRONTEND_URL";
pub const ENV_ENVIRONMENT: &str = "MINDGARDEN_ENVIRONMENT";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "MINDGARDEN_REQUEST_TIMEOUT_SECS";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const APP_DIR_NAME: &str = "mindgarden";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment {other:?}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    pub frontend_url: String,
    pub environment: Environment,
    pub timeouts: TimeoutConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; `load` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = default_data_dir();

        let port = parse_or_default(&lookup, ENV_PORT, DEFAULT_PORT);
        let environment = parse_or_default(&lookup, ENV_ENVIRONMENT, Environment::default());

        let database_path = non_empty(&lookup, ENV_DATABASE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("mindgarden.db"));

        let log_dir = non_empty(&lookup, ENV_LOG_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("logs"));

        let frontend_url = non_empty(&lookup, ENV_FRONTEND_URL)
            .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());

        let mut timeouts = TimeoutConfig::default();
        let secs = parse_or_default(
            &lookup,
            ENV_REQUEST_TIMEOUT_SECS,
            timeouts.http_request.as_secs(),
        );
        if secs > 0 {
            timeouts.http_request = Duration::from_secs(secs);
        } else {
            warn!("[config] {ENV_REQUEST_TIMEOUT_SECS}=0 ignored, keeping default");
        }

        Self {
            port,
            database_path,
            log_dir,
            frontend_url,
            environment,
            timeouts,
        }
    }

    pub fn database_url_path(&self) -> String {
        self.database_path.to_string_lossy().into_owned()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// `<platform data dir>/mindgarden`, or `./data` when the platform has none.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("./data"))
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    match non_empty(lookup, key) {
        None => default,
        Some(raw) => match raw.parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    "[config] key={} value={:?} invalid ({}), using default {}",
                    key, raw, e, default
                );
                default
            }
        },
    }
}
