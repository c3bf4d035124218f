//! Tar Archiver
//!
//! Creates gzipped tarballs with the system `tar`. The archive is built from
//! the source directory's parent so its only top-level entry is the source
//! directory itself, wherever the command runs from.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{ArchiveError, Archiver};

/// Archiver using `tar -czf`
#[derive(Debug, Clone)]
pub struct TarArchiver {
    program: String,
}

impl Default for TarArchiver {
    fn default() -> Self {
        Self {
            program: "tar".to_string(),
        }
    }
}

impl TarArchiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Check if tar is installed and available
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn command(&self, source_dir: &Path, archive: &Path) -> Command {
        let parent = source_dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let entry = source_dir
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| source_dir.as_os_str().to_os_string());

        let mut cmd = Command::new(&self.program);
        cmd.arg("-czf")
            .arg(archive)
            .arg("-C")
            .arg(parent)
            .arg(entry)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Archiver for TarArchiver {
    fn create(&self, source_dir: &Path, archive: &Path) -> Result<(), ArchiveError> {
        tracing::debug!(
            source = %source_dir.display(),
            archive = %archive.display(),
            "creating tarball"
        );

        let output = self
            .command(source_dir, archive)
            .output()
            .map_err(|source| ArchiveError::Spawn {
                program: "tar",
                source,
            })?;

        if !output.status.success() {
            return Err(ArchiveError::Failed {
                program: "tar",
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn archives_from_parent_directory() {
        let cmd = TarArchiver::new().command(
            Path::new("/work/site/web_static"),
            Path::new("/work/site/versions/a.tgz"),
        );
        assert_eq!(
            args(&cmd),
            vec![
                "-czf",
                "/work/site/versions/a.tgz",
                "-C",
                "/work/site",
                "web_static"
            ]
        );
    }

    #[test]
    fn relative_source_uses_current_directory() {
        let cmd =
            TarArchiver::new().command(Path::new("web_static"), Path::new("versions/a.tgz"));
        assert_eq!(
            args(&cmd),
            vec!["-czf", "versions/a.tgz", "-C", ".", "web_static"]
        );
    }

    #[test]
    fn missing_program_is_not_available() {
        let archiver = TarArchiver::new().with_program("/nonexistent/webship-tar");
        assert!(!archiver.check_available());
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let archiver = TarArchiver::new().with_program("/nonexistent/webship-tar");
        let err = archiver
            .create(dir.path(), &dir.path().join("a.tgz"))
            .unwrap_err();
        assert!(matches!(err, ArchiveError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn creates_archive_with_single_top_level_directory() {
        let archiver = TarArchiver::new();
        if !archiver.check_available() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("web_static");
        fs::create_dir_all(source.join("images")).unwrap();
        fs::write(source.join("index.html"), "<h1>hi</h1>").unwrap();
        fs::write(source.join("images/logo.png"), "png").unwrap();

        let archive = dir.path().join("site.tgz");
        archiver.create(&source, &archive).unwrap();

        let listing = Command::new("tar")
            .arg("-tzf")
            .arg(&archive)
            .output()
            .unwrap();
        let listing = String::from_utf8_lossy(&listing.stdout);
        assert!(listing.lines().all(|l| l.starts_with("web_static")));
        assert!(listing.contains("web_static/index.html"));
        assert!(listing.contains("web_static/images/logo.png"));
    }
}
