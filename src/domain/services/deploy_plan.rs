//! Deploy planning service
//!
//! Turns an archive and a remote layout into the ordered list of steps run
//! on every host. No I/O happens here; the deploy use case walks the plan
//! and stops at the first failing step.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ArchiveName, RemoteLayout, StepKind};

/// What a step does on the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Copy a local file to a remote path
    Upload { local: PathBuf, remote: String },
    /// Run a shell command
    Run(String),
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepAction::Upload { local, remote } => {
                write!(f, "put {} {}", local.display(), remote)
            }
            StepAction::Run(command) => f.write_str(command),
        }
    }
}

/// A single planned step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployStep {
    pub kind: StepKind,
    pub action: StepAction,
}

/// Ordered steps for one archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    archive: ArchiveName,
    steps: Vec<DeployStep>,
}

impl DeployPlan {
    /// Build the plan for `local_archive`
    ///
    /// `archive_root` is the single top-level directory inside the archive;
    /// its contents are moved up into the release directory.
    pub fn build(
        local_archive: &Path,
        archive: &ArchiveName,
        archive_root: &str,
        layout: &RemoteLayout,
    ) -> Self {
        let upload = layout.upload_path(archive.file());
        let release = layout.release_dir(archive.release());
        let nested = layout.nested_dir(archive.release(), archive_root);
        let current = layout.current_link();

        let steps = vec![
            DeployStep {
                kind: StepKind::Upload,
                action: StepAction::Upload {
                    local: local_archive.to_path_buf(),
                    remote: upload.clone(),
                },
            },
            run(
                StepKind::RemoveStaleRelease,
                format!("rm -rf {}", shell_quote(&release)),
            ),
            run(
                StepKind::CreateReleaseDir,
                format!("mkdir -p {}", shell_quote(&release)),
            ),
            run(
                StepKind::Extract,
                format!(
                    "tar -xzf {} -C {}",
                    shell_quote(&upload),
                    shell_quote(&release)
                ),
            ),
            run(StepKind::RemoveUpload, format!("rm {}", shell_quote(&upload))),
            // The glob stays outside the quotes so the remote shell expands it.
            run(
                StepKind::Flatten,
                format!("mv {}/* {}", shell_quote(&nested), shell_quote(&release)),
            ),
            run(
                StepKind::RemoveNestedDir,
                format!("rm -rf {}", shell_quote(&nested)),
            ),
            run(
                StepKind::RemoveCurrentLink,
                format!("rm -rf {}", shell_quote(current)),
            ),
            run(
                StepKind::LinkCurrent,
                format!("ln -s {} {}", shell_quote(&release), shell_quote(current)),
            ),
        ];

        Self {
            archive: archive.clone(),
            steps,
        }
    }

    pub fn archive(&self) -> &ArchiveName {
        &self.archive
    }

    pub fn steps(&self) -> &[DeployStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// One `kind: action` line per step
    pub fn render(&self) -> String {
        self.steps
            .iter()
            .map(|s| format!("{}: {}", s.kind, s.action))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn run(kind: StepKind, command: String) -> DeployStep {
    DeployStep {
        kind,
        action: StepAction::Run(command),
    }
}

/// Quote a value for a POSIX shell
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}
