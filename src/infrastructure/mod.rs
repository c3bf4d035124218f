//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `archive/` - Archiver implementations (tar)
//! - `remote/` - RemoteShell implementations (ssh + scp)
//! - `events/` - Event sinks (NDJSON)

pub mod archive;
pub mod events;
pub mod remote;

pub use archive::TarArchiver;
pub use events::JsonEventSink;
pub use remote::SshShell;
