//! Archiver port - creates compressed archives of a directory

use std::path::Path;

/// Archive creation errors
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The archiving tool could not be started
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The archiving tool ran but reported failure
    #[error("{program} exited with code {code:?}: {stderr}")]
    Failed {
        program: &'static str,
        code: Option<i32>,
        stderr: String,
    },
}

/// Creates a gzipped archive whose single top-level entry is `source_dir`
///
/// Implementations:
/// - `TarArchiver` - shells out to `tar`
pub trait Archiver {
    fn create(&self, source_dir: &Path, archive: &Path) -> Result<(), ArchiveError>;
}
