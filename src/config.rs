use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Demo-data seeding for the in-memory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Populate the store with a sample roster and attendance history.
    #[serde(default = "default_demo_data")]
    pub demo_data: bool,
    /// Weeks of attendance history to generate.
    #[serde(default = "default_weeks")]
    pub weeks: u32,
    /// Probability that a seeded member is marked present.
    #[serde(default = "default_attendance_rate")]
    pub attendance_rate: f64,
}

fn default_demo_data() -> bool {
    true
}

fn default_weeks() -> u32 {
    4
}

fn default_attendance_rate() -> f64 {
    0.7
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_data: default_demo_data(),
            weeks: default_weeks(),
            attendance_rate: default_attendance_rate(),
        }
    }
}

impl Config {
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // Missing file is fine, the service runs from env vars and defaults.
        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => toml::from_str(&config_str)
                .map_err(|e| AppError::ConfigError(format!("failed to parse {config_path}: {e}")))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fn get_env(name: &str) -> Option<String> {
                    env::var(name).ok()
                }
                fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
                    env::var(name)
                        .ok()
                        .and_then(|v| v.parse::<T>().ok())
                        .unwrap_or(default)
                }

                Config {
                    server: ServerConfig {
                        host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                        port: get_env_parse("SERVER_PORT", 8080u16),
                    },
                    seed: SeedConfig {
                        demo_data: get_env_parse("SEED_DEMO_DATA", default_demo_data()),
                        weeks: get_env_parse("SEED_WEEKS", default_weeks()),
                        attendance_rate: get_env_parse(
                            "SEED_ATTENDANCE_RATE",
                            default_attendance_rate(),
                        ),
                    },
                }
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "failed to read {config_path}: {e}"
                )));
            }
        };

        // Env vars win even when the file exists.
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("SEED_DEMO_DATA")
            && let Ok(b) = v.parse()
        {
            config.seed.demo_data = b;
        }
        if let Ok(v) = env::var("SEED_WEEKS")
            && let Ok(n) = v.parse()
        {
            config.seed.weeks = n;
        }
        if let Ok(v) = env::var("SEED_ATTENDANCE_RATE")
            && let Ok(r) = v.parse()
        {
            config.seed.attendance_rate = r;
        }

        Ok(config)
    }
}
