//! SSH Remote Shell
//!
//! Runs commands with `ssh <dest> <command>` and uploads with
//! `scp <local> <dest>:<remote>`. Authentication is whatever the user's SSH
//! setup provides; only the user name, port, identity file and extra `-o`
//! options are passed through.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutput, RemoteError, RemoteShell};
use crate::domain::value_objects::Host;

/// Remote shell backed by the OpenSSH client tools
#[derive(Debug, Clone)]
pub struct SshShell {
    ssh_program: String,
    scp_program: String,
    user: Option<String>,
    port: Option<u16>,
    identity_file: Option<PathBuf>,
    options: Vec<String>,
}

impl Default for SshShell {
    fn default() -> Self {
        Self {
            ssh_program: "ssh".to_string(),
            scp_program: "scp".to_string(),
            user: None,
            port: None,
            identity_file: None,
            options: Vec::new(),
        }
    }
}

impl SshShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_programs(mut self, ssh: impl Into<String>, scp: impl Into<String>) -> Self {
        self.ssh_program = ssh.into();
        self.scp_program = scp.into();
        self
    }

    pub fn with_user(mut self, user: Option<String>) -> Self {
        self.user = user;
        self
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    pub fn with_identity_file(mut self, identity_file: Option<PathBuf>) -> Self {
        self.identity_file = identity_file;
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Flags shared by ssh and scp; only the port flag differs in case
    fn common_args(&self, port_flag: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if let Some(port) = self.port {
            args.push(port_flag.into());
            args.push(port.to_string().into());
        }
        if let Some(identity) = &self.identity_file {
            args.push("-i".into());
            args.push(identity.as_os_str().to_owned());
        }
        for option in &self.options {
            args.push("-o".into());
            args.push(option.into());
        }
        args
    }

    fn ssh_command(&self, host: &Host, command: &str) -> Command {
        let mut cmd = Command::new(&self.ssh_program);
        cmd.args(self.common_args("-p"))
            .arg(host.destination(self.user.as_deref()))
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    fn scp_command(&self, host: &Host, local: &Path, remote: &str) -> Command {
        let mut cmd = Command::new(&self.scp_program);
        cmd.args(self.common_args("-P"))
            .arg(local)
            .arg(format!(
                "{}:{}",
                host.destination(self.user.as_deref()),
                remote
            ))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl RemoteShell for SshShell {
    fn upload(&self, host: &Host, local: &Path, remote: &str) -> Result<(), RemoteError> {
        tracing::debug!(%host, local = %local.display(), remote, "scp upload");

        let output = self
            .scp_command(host, local, remote)
            .output()
            .map_err(|source| RemoteError::Spawn {
                program: "scp",
                source,
            })?;

        if !output.status.success() {
            return Err(RemoteError::Transfer {
                host: host.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    fn run(&self, host: &Host, command: &str) -> Result<CommandOutput, RemoteError> {
        tracing::debug!(%host, command, "ssh run");

        let output = self
            .ssh_command(host, command)
            .output()
            .map_err(|source| RemoteError::Spawn {
                program: "ssh",
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::trace!(%host, %stdout, %stderr, code = ?output.status.code(), "ssh finished");

        if !output.status.success() {
            return Err(RemoteError::CommandFailed {
                host: host.to_string(),
                command: command.to_string(),
                code: output.status.code(),
                stderr,
            });
        }
        Ok(CommandOutput { stdout, stderr })
    }
}
