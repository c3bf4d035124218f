//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Host;
use crate::error::{ShipError, ShipResult};

use super::env_validator::{self, EnvVarValidator, BOOL_VALUES};
use super::types::Config;

/// Project config file name
pub const PROJECT_CONFIG_FILE: &str = "webship.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A loaded configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShipResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShipError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: env_validator::suggest(&key, KNOWN_KEYS).map(str::to_string),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration by priority
///
/// 1. `explicit` (`--config`), which must exist
/// 2. `<project_root>/webship.toml`
/// 3. `<config_dir>/webship/config.toml`
/// 4. Built-in defaults
///
/// Environment overrides are applied on top of whichever was found.
pub fn resolve(explicit: Option<&Path>, project_root: &Path) -> ShipResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(ShipError::Config {
                    file: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
            Some(path.to_path_buf())
        }
        None => {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            let user = user_config_path();
            if project.is_file() {
                Some(project)
            } else {
                user.filter(|p| p.is_file())
            }
        }
    };

    let (config, warnings) = match &candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        path: candidate,
        warnings,
    })
}

/// `<config_dir>/webship/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("webship").join("config.toml"))
}

/// Apply environment variable overrides (WEBSHIP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // WEBSHIP_HOSTS (comma-separated)
    if let Some(raw) = lookup("WEBSHIP_HOSTS") {
        match Host::parse_list(&raw) {
            Ok(hosts) if !hosts.is_empty() => config.remote.hosts = hosts,
            Ok(_) => {}
            Err(e) => tracing::warn!("ignoring WEBSHIP_HOSTS: {}", e),
        }
    }

    if let Some(source) = lookup("WEBSHIP_SOURCE").filter(|s| !s.is_empty()) {
        config.pack.source = PathBuf::from(source);
    }

    if let Some(output) = lookup("WEBSHIP_OUTPUT_DIR").filter(|s| !s.is_empty()) {
        config.pack.output_dir = PathBuf::from(output);
    }

    if let Some(user) = lookup("WEBSHIP_SSH_USER").filter(|s| !s.is_empty()) {
        config.ssh.user = Some(user);
    }

    if let Some(raw) = lookup("WEBSHIP_STOP_ON_FAILURE") {
        let validator = EnvVarValidator::new("WEBSHIP_STOP_ON_FAILURE", BOOL_VALUES);
        config.deploy.stop_on_host_failure = validator.parse(
            &raw,
            env_validator::parse_bool,
            config.deploy.stop_on_host_failure,
        );
    }

    config
}

const KNOWN_KEYS: &[&str] = &[
    "pack",
    "source",
    "output_dir",
    "remote",
    "hosts",
    "releases_dir",
    "current_link",
    "upload_dir",
    "ssh",
    "user",
    "port",
    "identity_file",
    "options",
    "ssh_program",
    "scp_program",
    "deploy",
    "stop_on_host_failure",
    "output",
    "color",
    "unicode",
];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
