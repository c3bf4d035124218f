//! Configuration module for webship
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WEBSHIP_*)
//! 3. `--config` file, else project config (./webship.toml)
//! 4. User config (~/.config/webship/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{
    resolve, user_config_path, with_overrides_from, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{
    archive_root_of, ColorMode, Config, DeployConfig, OutputConfig, PackConfig, RemoteConfig,
    SshConfig, DEFAULT_ARCHIVE_ROOT,
};
