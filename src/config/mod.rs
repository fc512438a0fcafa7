//! Tries to create an `AppConfig` from config files and the environment.
//! Uses `figment` to layer `config/base.toml`, `config/{environment}.toml` and `APP_` variables.
//! `main` loads it once and hands it to `App::build_from_config`.

mod data;
mod error;

use tracing::info;

// Re-export config structs
pub use data::{AppConfig, Environment, NetConfig, WebConfig, ENV_PREFIX};
pub use error::{ConfigError, ConfigResult};

/// Reads `APP_ENVIRONMENT`, defaulting to `local`.
pub fn environment() -> ConfigResult<Environment> {
    std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
}

/// Builds a fresh `AppConfig` from `./config` and the environment.
pub fn load_config() -> ConfigResult<AppConfig> {
    let config_dir = std::env::current_dir()?.join("config");
    let environment = environment()?;
    info!(
        "{:<12} - Loading {} configuration from {}",
        "load_config",
        environment.as_ref(),
        config_dir.display()
    );

    AppConfig::load(&config_dir, environment)
}

