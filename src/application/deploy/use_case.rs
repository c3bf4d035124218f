//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Check the archive exists locally and has a usable name
//! 2. Build the step plan (upload, unpack, flatten, relink)
//! 3. Walk the plan on each host, stopping that host at its first failure
//!
//! There is no rollback. A host that fails mid-plan may be left without a
//! `current` link or with a half-extracted release.

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::{DeployEvent, DeployEventSink, NoopEventSink, RemoteError, RemoteShell};
use crate::domain::services::{DeployPlan, DeployStep, StepAction};
use crate::domain::value_objects::{ArchiveName, Host};
use crate::error::{ShipError, ShipResult};

use super::options::DeployOptions;
use super::result::{DeployResult, HostReport, HostStatus};

/// Deploy use case, parameterized by the remote execution facility
pub struct DeployUseCase<R: RemoteShell> {
    shell: R,
}

impl<R: RemoteShell> DeployUseCase<R> {
    pub fn new(shell: R) -> Self {
        Self { shell }
    }

    pub fn shell(&self) -> &R {
        &self.shell
    }

    /// Build the plan for `archive` without checking that it exists
    ///
    /// The directory to flatten comes from the archive's own name; the
    /// configured `archive_root` only covers names `pack` did not produce.
    pub fn plan(&self, archive: &Path, options: &DeployOptions) -> ShipResult<DeployPlan> {
        let name = ArchiveName::from_path(archive)?;
        let root = name.root().unwrap_or(options.archive_root.as_str());
        Ok(DeployPlan::build(archive, &name, root, &options.layout))
    }

    /// Execute the deploy use case
    pub fn execute(&self, archive: &Path, options: &DeployOptions) -> ShipResult<DeployResult> {
        self.execute_with_events(archive, options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    ///
    /// Pre-flight failures (missing archive, bad name, no hosts) return an
    /// error before any remote operation. Host failures are recorded in the
    /// returned `DeployResult`.
    pub fn execute_with_events(
        &self,
        archive: &Path,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> ShipResult<DeployResult> {
        let plan = match self.preflight(archive, options) {
            Ok(plan) => plan,
            Err(e) => {
                event_sink.on_event(DeployEvent::Aborted {
                    error: e.to_string(),
                });
                return Err(e);
            }
        };

        event_sink.on_event(DeployEvent::Started {
            archive: archive.to_path_buf(),
            host_count: options.hosts.len(),
            dry_run: options.dry_run,
        });

        let mut reports = Vec::with_capacity(options.hosts.len());
        let mut halted = false;

        for host in &options.hosts {
            if halted {
                let reason = "an earlier host failed".to_string();
                event_sink.on_event(DeployEvent::HostSkipped {
                    host: host.to_string(),
                    reason: reason.clone(),
                });
                reports.push(HostReport {
                    host: host.clone(),
                    status: HostStatus::Skipped { reason },
                    completed: Vec::new(),
                });
                continue;
            }

            let report = self.deploy_host(host, &plan, options.dry_run, event_sink.as_ref());
            if !report.is_success() && options.stop_on_host_failure {
                halted = true;
            }
            reports.push(report);
        }

        let result = DeployResult {
            archive: archive.to_path_buf(),
            release: plan.archive().release().to_string(),
            dry_run: options.dry_run,
            hosts: reports,
        };

        event_sink.on_event(DeployEvent::Completed {
            deployed: result.deployed_count(),
            failed: result.failed_count(),
            skipped: result.skipped_count(),
        });

        Ok(result)
    }

    fn preflight(&self, archive: &Path, options: &DeployOptions) -> ShipResult<DeployPlan> {
        if !archive.is_file() {
            return Err(ShipError::ArchiveNotFound {
                path: archive.to_path_buf(),
            });
        }
        if options.hosts.is_empty() {
            return Err(ShipError::NoHosts);
        }
        self.plan(archive, options)
    }

    /// Run every step of `plan` on `host`, stopping at the first failure
    fn deploy_host(
        &self,
        host: &Host,
        plan: &DeployPlan,
        dry_run: bool,
        event_sink: &dyn DeployEventSink,
    ) -> HostReport {
        let host_name = host.to_string();
        event_sink.on_event(DeployEvent::HostStarted {
            host: host_name.clone(),
        });

        let detailed = event_sink.wants_detailed_events();
        let mut completed = Vec::with_capacity(plan.len());
        for step in plan.steps() {
            if detailed {
                event_sink.on_event(DeployEvent::StepStarted {
                    host: host_name.clone(),
                    step: step.kind,
                    command: step.action.to_string(),
                });
            }

            if dry_run {
                completed.push(step.kind);
                continue;
            }

            match self.run_step(host, step) {
                Ok(()) => {
                    if detailed {
                        event_sink.on_event(DeployEvent::StepSucceeded {
                            host: host_name.clone(),
                            step: step.kind,
                        });
                    }
                    completed.push(step.kind);
                }
                Err(e) => {
                    tracing::debug!(%host, step = %step.kind, error = %e, "step failed");
                    event_sink.on_event(DeployEvent::StepFailed {
                        host: host_name.clone(),
                        step: step.kind,
                        error: e.to_string(),
                    });
                    return HostReport {
                        host: host.clone(),
                        status: HostStatus::Failed {
                            step: step.kind,
                            error: e.to_string(),
                        },
                        completed,
                    };
                }
            }
        }

        let status = if dry_run {
            HostStatus::Planned
        } else {
            event_sink.on_event(DeployEvent::HostDeployed { host: host_name });
            HostStatus::Deployed
        };

        HostReport {
            host: host.clone(),
            status,
            completed,
        }
    }

    fn run_step(&self, host: &Host, step: &DeployStep) -> Result<(), RemoteError> {
        match &step.action {
            StepAction::Upload { local, remote } => self.shell.upload(host, local, remote),
            StepAction::Run(command) => self.shell.run(host, command).map(|_| ()),
        }
    }
}
