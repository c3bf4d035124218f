//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Host, RemoteLayout, DEFAULT_CURRENT_LINK, DEFAULT_RELEASES_DIR, DEFAULT_UPLOAD_DIR,
};
use crate::error::ShipResult;

use super::loader::{self, ConfigWarning};

/// Archive root used when the source path has no usable file name
pub const DEFAULT_ARCHIVE_ROOT: &str = "web_static";

/// Packaging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// Directory to archive
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Where archives are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_ARCHIVE_ROOT)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("versions")
}

/// Remote hosts and their filesystem layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "Host::defaults")]
    pub hosts: Vec<Host>,

    #[serde(default = "default_releases_dir")]
    pub releases_dir: String,

    #[serde(default = "default_current_link")]
    pub current_link: String,

    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            hosts: Host::defaults(),
            releases_dir: default_releases_dir(),
            current_link: default_current_link(),
            upload_dir: default_upload_dir(),
        }
    }
}

impl RemoteConfig {
    pub fn layout(&self) -> RemoteLayout {
        RemoteLayout {
            releases_dir: self.releases_dir.clone(),
            current_link: self.current_link.clone(),
            upload_dir: self.upload_dir.clone(),
        }
    }
}

fn default_releases_dir() -> String {
    DEFAULT_RELEASES_DIR.to_string()
}

fn default_current_link() -> String {
    DEFAULT_CURRENT_LINK.to_string()
}

fn default_upload_dir() -> String {
    DEFAULT_UPLOAD_DIR.to_string()
}

/// SSH pass-through options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshConfig {
    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub identity_file: Option<PathBuf>,

    /// Extra `-o` options, e.g. `ConnectTimeout=10`
    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default = "default_ssh_program")]
    pub ssh_program: String,

    #[serde(default = "default_scp_program")]
    pub scp_program: String,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            user: None,
            port: None,
            identity_file: None,
            options: Vec::new(),
            ssh_program: default_ssh_program(),
            scp_program: default_scp_program(),
        }
    }
}

fn default_ssh_program() -> String {
    "ssh".to_string()
}

fn default_scp_program() -> String {
    "scp".to_string()
}

/// Deploy behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeployConfig {
    /// Skip the remaining hosts once one host fails
    #[serde(default)]
    pub stop_on_host_failure: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pack: PackConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub ssh: SshConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ShipResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ShipResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (WEBSHIP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Name of the single top-level directory inside packed archives
    pub fn archive_root(&self) -> String {
        archive_root_of(&self.pack.source)
    }
}

/// Base name of a source directory, as stored in the archive
///
/// Paths like `.` have no file name, so they are resolved first.
pub fn archive_root_of(source: &Path) -> String {
    let named = |p: &Path| p.file_name().and_then(|n| n.to_str()).map(str::to_string);
    named(source)
        .or_else(|| std::fs::canonicalize(source).ok().as_deref().and_then(named))
        .unwrap_or_else(|| DEFAULT_ARCHIVE_ROOT.to_string())
}
