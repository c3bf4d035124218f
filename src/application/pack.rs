//! Pack Use Case
//!
//! Creates a timestamped archive of the source directory under the output
//! directory:
//! 1. Check the source directory exists
//! 2. Create the output directory (idempotent)
//! 3. Archive the source as `<root>_<YYYYMMDDHHMMSS>.tgz`
//! 4. Report size and digest
//!
//! Failures are returned as errors and reported through the event sink;
//! nothing here panics.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::archive_root_of;
use crate::domain::ports::{Archiver, DeployEvent, DeployEventSink, NoopEventSink};
use crate::domain::value_objects::{ArchiveDigest, ArchiveName};
use crate::error::{ShipError, ShipResult};

/// Options for the pack use case
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Directory to archive
    pub source: PathBuf,
    /// Directory receiving the archive
    pub output_dir: PathBuf,
    /// Timestamp embedded in the archive name
    pub timestamp: DateTime<Utc>,
}

impl PackOptions {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// A freshly written archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedArchive {
    pub path: PathBuf,
    pub name: ArchiveName,
    pub size: u64,
    pub digest: ArchiveDigest,
}

/// Pack use case, parameterized by the archiving backend
pub struct PackUseCase<A: Archiver> {
    archiver: A,
}

impl<A: Archiver> PackUseCase<A> {
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }

    /// Pack without event reporting
    pub fn execute(&self, options: &PackOptions) -> ShipResult<PackedArchive> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Pack, reporting progress and failure to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &PackOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> ShipResult<PackedArchive> {
        let result = self.pack(options, event_sink.as_ref());
        match &result {
            Ok(packed) => event_sink.on_event(DeployEvent::Packed {
                archive: packed.path.clone(),
                size: packed.size,
                digest: packed.digest.to_string(),
            }),
            Err(e) => {
                tracing::debug!(error = %e, "pack failed");
                event_sink.on_event(DeployEvent::PackFailed {
                    error: e.to_string(),
                });
            }
        }
        result
    }

    fn pack(
        &self,
        options: &PackOptions,
        event_sink: &dyn DeployEventSink,
    ) -> ShipResult<PackedArchive> {
        if !options.source.is_dir() {
            return Err(ShipError::SourceNotFound {
                path: options.source.clone(),
            });
        }
        let source = fs::canonicalize(&options.source).map_err(|_| ShipError::SourceNotFound {
            path: options.source.clone(),
        })?;

        fs::create_dir_all(&options.output_dir).map_err(|source| ShipError::OutputDir {
            path: options.output_dir.clone(),
            source,
        })?;

        let name = ArchiveName::for_timestamp(&archive_root_of(&source), options.timestamp);
        let path = options.output_dir.join(name.file());

        event_sink.on_event(DeployEvent::PackStarted {
            source: options.source.clone(),
            archive: path.clone(),
        });

        self.archiver
            .create(&source, &path)
            .map_err(|source| ShipError::Archive {
                path: path.clone(),
                source,
            })?;

        let size = fs::metadata(&path)?.len();
        let digest = ArchiveDigest::from_file(&path)?;
        tracing::debug!(archive = %path.display(), size, %digest, "packed");

        Ok(PackedArchive {
            path,
            name,
            size,
            digest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::deploy_events::testing::RecordingEventSink;
    use crate::domain::ports::ArchiveError;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::path::Path;
    use tempfile::tempdir;

    /// Writes a fixed payload instead of a real tarball
    #[derive(Default)]
    struct FakeArchiver {
        calls: RefCell<Vec<(PathBuf, PathBuf)>>,
    }

    impl Archiver for FakeArchiver {
        fn create(&self, source_dir: &Path, archive: &Path) -> Result<(), ArchiveError> {
            self.calls
                .borrow_mut()
                .push((source_dir.to_path_buf(), archive.to_path_buf()));
            fs::write(archive, b"archive").map_err(|source| ArchiveError::Spawn {
                program: "fake",
                source,
            })
        }
    }

    struct FailingArchiver;

    impl Archiver for FailingArchiver {
        fn create(&self, _source_dir: &Path, _archive: &Path) -> Result<(), ArchiveError> {
            Err(ArchiveError::Failed {
                program: "tar",
                code: Some(2),
                stderr: "disk full".to_string(),
            })
        }
    }

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn packs_into_timestamped_file_and_creates_output_dir() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("web_static");
        fs::create_dir_all(&source).unwrap();
        let output = dir.path().join("versions");

        let use_case = PackUseCase::new(FakeArchiver::default());
        let packed = use_case
            .execute(&PackOptions::new(&source, &output).with_timestamp(ts()))
            .unwrap();

        assert_eq!(packed.path, output.join("web_static_20240102030405.tgz"));
        assert_eq!(packed.name.release(), "web_static_20240102030405");
        assert_eq!(packed.size, 7);
        assert_eq!(packed.digest, ArchiveDigest::from_bytes(b"archive"));
        assert!(output.is_dir());

        let calls = use_case.archiver.calls.borrow();
        assert_eq!(calls[0].0, fs::canonicalize(&source).unwrap());
    }

    #[test]
    fn existing_output_dir_is_fine() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("web_static");
        let output = dir.path().join("versions");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&output).unwrap();

        let use_case = PackUseCase::new(FakeArchiver::default());
        let options = PackOptions::new(&source, &output).with_timestamp(ts());
        assert!(use_case.execute(&options).is_ok());
        // Same second, same name: the second pack overwrites the first.
        let again = use_case.execute(&options).unwrap();
        assert_eq!(fs::read_dir(&output).unwrap().count(), 1);
        assert!(again.path.exists());
    }

    #[test]
    fn archive_prefix_follows_source_name() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("public");
        fs::create_dir_all(&source).unwrap();

        let packed = PackUseCase::new(FakeArchiver::default())
            .execute(&PackOptions::new(&source, dir.path().join("out")).with_timestamp(ts()))
            .unwrap();
        assert_eq!(packed.name.file(), "public_20240102030405.tgz");
    }

    #[test]
    fn missing_source_fails_without_archiving() {
        let dir = tempdir().unwrap();
        let use_case = PackUseCase::new(FakeArchiver::default());
        let sink = RecordingEventSink::default();

        let err = use_case
            .execute_with_events(
                &PackOptions::new(dir.path().join("missing"), dir.path().join("versions")),
                Arc::new(sink.clone()),
            )
            .unwrap_err();

        assert!(matches!(err, ShipError::SourceNotFound { .. }));
        assert!(use_case.archiver.calls.borrow().is_empty());
        assert!(matches!(
            sink.events().as_slice(),
            [DeployEvent::PackFailed { .. }]
        ));
    }

    #[test]
    fn output_dir_that_is_a_file_fails() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("web_static");
        fs::create_dir_all(&source).unwrap();
        let blocker = dir.path().join("versions");
        fs::write(&blocker, "not a dir").unwrap();

        let use_case = PackUseCase::new(FakeArchiver::default());
        let err = use_case
            .execute(&PackOptions::new(&source, &blocker))
            .unwrap_err();

        assert!(matches!(err, ShipError::OutputDir { .. }));
        assert!(use_case.archiver.calls.borrow().is_empty());
    }

    #[test]
    fn archiver_failure_is_reported() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("web_static");
        fs::create_dir_all(&source).unwrap();
        let sink = RecordingEventSink::default();

        let err = PackUseCase::new(FailingArchiver)
            .execute_with_events(
                &PackOptions::new(&source, dir.path().join("versions")),
                Arc::new(sink.clone()),
            )
            .unwrap_err();

        assert!(matches!(err, ShipError::Archive { .. }));
        let events = sink.events();
        assert!(matches!(events[0], DeployEvent::PackStarted { .. }));
        assert!(matches!(events[1], DeployEvent::PackFailed { .. }));
    }
}
