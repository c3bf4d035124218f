//! Common test utilities for webship CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and home directories plus a CLI runner
//! - Fake `ssh`/`scp` scripts that run "remote" commands locally (unix)

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a webship CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON: {l:?} ({e})\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated test environment
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root, creating parents
    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// A small static site at `web_static/`
    pub fn with_site(self) -> Self {
        self.write_project_file("web_static/index.html", "<h1>Hello</h1>\n");
        self.write_project_file("web_static/styles/main.css", "body { margin: 0; }\n");
        self
    }

    /// Run webship from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_webship"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("WEBSHIP_HOSTS")
            .env_remove("WEBSHIP_SOURCE")
            .env_remove("WEBSHIP_OUTPUT_DIR")
            .env_remove("WEBSHIP_SSH_USER")
            .env_remove("WEBSHIP_STOP_ON_FAILURE")
            .env_remove("WEBSHIP_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute webship");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Archives currently under `versions/`
    pub fn archives(&self) -> Vec<PathBuf> {
        let dir = self.project_path("versions");
        let mut found: Vec<PathBuf> = fs::read_dir(&dir)
            .map(|entries| entries.flatten().map(|e| e.path()).collect())
            .unwrap_or_default();
        found.sort();
        found
    }
}

/// Directory standing in for the remote filesystem
pub fn remote_root(env: &TestEnv) -> PathBuf {
    env.project_path("remote")
}

/// Write `webship.toml` pointing the layout into `remote/` and the SSH tools
/// at fake scripts that act on the local filesystem.
///
/// `fail_on` makes the fake ssh fail any command containing that text.
#[cfg(unix)]
pub fn install_fake_remote(env: &TestEnv, hosts: &[&str], fail_on: Option<&str>) {
    use std::os::unix::fs::PermissionsExt;

    let bin = env.project_path("fakebin");
    fs::create_dir_all(&bin).unwrap();
    let remote = remote_root(env);
    fs::create_dir_all(remote.join("tmp")).unwrap();
    let log = env.project_path("ssh.log");

    let guard = match fail_on {
        Some(pattern) => format!(
            "case \"$2\" in *'{pattern}'*) echo \"simulated failure\" >&2; exit 3;; esac\n"
        ),
        None => String::new(),
    };
    let ssh = format!(
        "#!/bin/sh\necho \"$1 $2\" >> '{}'\n{}exec sh -c \"$2\"\n",
        log.display(),
        guard
    );
    let scp = "#!/bin/sh\ncp \"$1\" \"${2#*:}\"\n";

    for (name, body) in [("ssh", ssh.as_str()), ("scp", scp)] {
        let path = bin.join(name);
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let host_list = hosts
        .iter()
        .map(|h| format!("\"{h}\""))
        .collect::<Vec<_>>()
        .join(", ");
    env.write_project_file(
        "webship.toml",
        &format!(
            r#"[remote]
hosts = [{host_list}]
releases_dir = "{releases}"
current_link = "{current}"
upload_dir = "{upload}"

[ssh]
ssh_program = "{ssh}"
scp_program = "{scp}"
"#,
            releases = remote.join("releases").display(),
            current = remote.join("current").display(),
            upload = remote.join("tmp").display(),
            ssh = bin.join("ssh").display(),
            scp = bin.join("scp").display(),
        ),
    );
}

/// Lines the fake ssh logged, `"<dest> <command>"` each
pub fn ssh_log(env: &TestEnv) -> Vec<String> {
    fs::read_to_string(env.project_path("ssh.log"))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// True when `tar` is on PATH
pub fn tar_available() -> bool {
    Command::new("tar")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Resolve `current` and return the release directory it points at
pub fn current_release(env: &TestEnv) -> PathBuf {
    fs::canonicalize(remote_root(env).join("current")).expect("current link missing")
}

pub fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
