//! Archive Name Value Object
//!
//! Names of packed archives and the release directories derived from them.
//!
//! An archive `versions/web_static_20240101120000.tgz` has the file name
//! `web_static_20240101120000.tgz` and unpacks into the release
//! `web_static_20240101120000`.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};

/// Extension used for packed archives
pub const ARCHIVE_EXTENSION: &str = "tgz";

/// Timestamp layout embedded in archive names (UTC, second resolution)
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Error returned when a path does not name an archive
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' does not name an archive file")]
pub struct InvalidArchiveName(pub String);

/// Validated archive name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveName {
    file: String,
    release: String,
}

impl ArchiveName {
    /// Derive the archive name from a local path
    ///
    /// The release is everything in the file name before the first `.`.
    pub fn from_path(path: &Path) -> Result<Self, InvalidArchiveName> {
        let file = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| InvalidArchiveName(path.display().to_string()))?;
        Self::from_file_name(file)
    }

    /// Derive the archive name from a bare file name
    pub fn from_file_name(file: &str) -> Result<Self, InvalidArchiveName> {
        let release = file.split('.').next().unwrap_or_default();
        if release.is_empty() || file.contains('/') {
            return Err(InvalidArchiveName(file.to_string()));
        }
        Ok(Self {
            file: file.to_string(),
            release: release.to_string(),
        })
    }

    /// Name for an archive of `prefix` packed at `at`
    pub fn for_timestamp(prefix: &str, at: DateTime<Utc>) -> Self {
        let release = format!("{}_{}", prefix, at.format(TIMESTAMP_FORMAT));
        Self {
            file: format!("{}.{}", release, ARCHIVE_EXTENSION),
            release,
        }
    }

    /// Archive file name (`web_static_20240101120000.tgz`)
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Release directory name (`web_static_20240101120000`)
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Packed directory name encoded in the release (`web_static`)
    ///
    /// `None` unless the release ends in `_<YYYYMMDDHHMMSS>` after a
    /// non-empty prefix, which is how [`ArchiveName::for_timestamp`] names it.
    pub fn root(&self) -> Option<&str> {
        let (prefix, stamp) = self.release.rsplit_once('_')?;
        let is_stamp = stamp.len() == TIMESTAMP_LEN && stamp.bytes().all(|b| b.is_ascii_digit());
        (is_stamp && !prefix.is_empty()).then_some(prefix)
    }
}

/// Digits in a formatted [`TIMESTAMP_FORMAT`]
const TIMESTAMP_LEN: usize = 14;

impl fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file)
    }
}
