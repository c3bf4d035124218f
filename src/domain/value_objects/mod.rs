//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod archive;
mod digest;
mod host;
mod remote_layout;
mod step_kind;

pub use archive::{ArchiveName, InvalidArchiveName, ARCHIVE_EXTENSION, TIMESTAMP_FORMAT};
pub use digest::ArchiveDigest;
pub use host::{Host, InvalidHost, DEFAULT_HOSTS};
pub use remote_layout::{
    RemoteLayout, DEFAULT_CURRENT_LINK, DEFAULT_RELEASES_DIR, DEFAULT_UPLOAD_DIR,
};
pub use step_kind::StepKind;
