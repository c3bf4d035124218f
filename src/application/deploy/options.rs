//! Deploy Options

use crate::config::{Config, DEFAULT_ARCHIVE_ROOT};
use crate::domain::value_objects::{Host, RemoteLayout};

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Hosts to deploy to, in order
    pub hosts: Vec<Host>,
    /// Remote filesystem layout
    pub layout: RemoteLayout,
    /// Top-level directory for archives whose name has no pack timestamp
    pub archive_root: String,
    /// Report the plan without touching any host
    pub dry_run: bool,
    /// Skip remaining hosts after the first failure
    pub stop_on_host_failure: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            hosts: Host::defaults(),
            layout: RemoteLayout::default(),
            archive_root: DEFAULT_ARCHIVE_ROOT.to_string(),
            dry_run: false,
            stop_on_host_failure: false,
        }
    }
}

impl DeployOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            hosts: config.remote.hosts.clone(),
            layout: config.remote.layout(),
            archive_root: config.archive_root(),
            dry_run: false,
            stop_on_host_failure: config.deploy.stop_on_host_failure,
        }
    }

    pub fn with_hosts(mut self, hosts: Vec<Host>) -> Self {
        self.hosts = hosts;
        self
    }

    pub fn with_layout(mut self, layout: RemoteLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_archive_root(mut self, root: impl Into<String>) -> Self {
        self.archive_root = root.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_stop_on_host_failure(mut self, stop: bool) -> Self {
        self.stop_on_host_failure = stop;
        self
    }
}
