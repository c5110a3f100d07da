//! Config module.

mod drivers;
mod inputs;

use std::{
    env,
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

pub use drivers::{ApiDriver, DriverError};
pub use inputs::{EnvInputReader, InputReader, MemoryInputReader, OverrideInputReader};

const DEFAULT_GITHUB_ROOT_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target repository, as `owner/name`.
    pub repository: String,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Random seed
    pub random_seed: u64,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            repository: env_to_str("GITHUB_REPOSITORY", ""),
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("BOT_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("BOT_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str(
                        "BOT_API_GITHUB_ROOT_URL",
                        &env_to_str("GITHUB_API_URL", DEFAULT_GITHUB_ROOT_URL),
                    ),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            random_seed: env_to_u64("BOT_RANDOM_SEED", random_seed()),
            version,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: String::new(),
            api: ApiConfig {
                driver: ApiDriver::GitHub,
                github: ApiGitHubConfig {
                    connect_timeout: 5000,
                    root_url: DEFAULT_GITHUB_ROOT_URL.into(),
                },
            },
            logging: LoggingConfig { use_bunyan: false },
            random_seed: 0,
            version: "0.0.0".into(),
        }
    }
}

fn random_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}
