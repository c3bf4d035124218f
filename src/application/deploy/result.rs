//! Deploy Result

use std::path::PathBuf;

use crate::domain::value_objects::{Host, StepKind};

/// Outcome for a single host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostStatus {
    /// Every step succeeded
    Deployed,
    /// Dry run: steps were reported, not executed
    Planned,
    /// `step` failed; later steps did not run
    Failed { step: StepKind, error: String },
    /// Not attempted
    Skipped { reason: String },
}

/// Per-host report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    pub host: Host,
    pub status: HostStatus,
    /// Steps that completed, in order
    pub completed: Vec<StepKind>,
}

impl HostReport {
    pub fn is_success(&self) -> bool {
        matches!(self.status, HostStatus::Deployed | HostStatus::Planned)
    }

    pub fn failed_step(&self) -> Option<StepKind> {
        match self.status {
            HostStatus::Failed { step, .. } => Some(step),
            _ => None,
        }
    }
}

/// Result of deploying one archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    pub archive: PathBuf,
    pub release: String,
    pub dry_run: bool,
    pub hosts: Vec<HostReport>,
}

impl DeployResult {
    /// True when every host succeeded
    pub fn is_success(&self) -> bool {
        !self.hosts.is_empty() && self.hosts.iter().all(HostReport::is_success)
    }

    pub fn deployed_count(&self) -> usize {
        self.hosts.iter().filter(|h| h.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.hosts
            .iter()
            .filter(|h| matches!(h.status, HostStatus::Failed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.hosts
            .iter()
            .filter(|h| matches!(h.status, HostStatus::Skipped { .. }))
            .count()
    }
}
