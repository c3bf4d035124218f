//! RemoteShell port - file upload and command execution on a remote host
//!
//! The deploy use case only speaks to hosts through this trait, so tests can
//! substitute a recording or local implementation for `ssh`/`scp`.

use std::path::Path;

use crate::domain::value_objects::Host;

/// Captured output of a successful remote command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Remote operation errors
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The transport program (`ssh`, `scp`) could not be started
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// File upload failed
    #[error("upload to {host} failed (exit code {code:?}): {stderr}")]
    Transfer {
        host: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Remote command returned non-zero
    #[error("`{command}` on {host} failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        host: String,
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Remote execution facility
///
/// Implementations:
/// - `SshShell` - `scp` for uploads, `ssh` for commands
pub trait RemoteShell {
    /// Copy a local file to `remote` on `host`
    fn upload(&self, host: &Host, local: &Path, remote: &str) -> Result<(), RemoteError>;

    /// Run a shell command on `host`; non-zero exit is an error
    fn run(&self, host: &Host, command: &str) -> Result<CommandOutput, RemoteError>;
}
