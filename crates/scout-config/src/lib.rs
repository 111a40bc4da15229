//! # scout-config
//!
//! Layered configuration loading for Scout using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCOUT_*` prefix, `__` as separator)
//! 2. Project-level `.scout/config.toml`
//! 3. User-level `~/.config/scout/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SCOUT_SEARCH__API_KEY` -> `search.api_key`,
//! `SCOUT_WEATHER__ENDPOINT` -> `weather.endpoint`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use scout_config::ScoutConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = ScoutConfig::load_with_dotenv().expect("config");
//!
//! if config.search.is_configured() {
//!     println!("search endpoint: {}", config.search.endpoint);
//! }
//! ```

mod error;
mod general;
mod search;
mod weather;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use search::SearchConfig;
pub use weather::WeatherConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl ScoutConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`SCOUT_*` prefix)
    /// 2. `.scout/config.toml` (project-local)
    /// 3. `~/.config/scout/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any layer fails to parse or merge.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI and
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any layer fails to parse or merge.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".scout/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("SCOUT_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scout").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}
