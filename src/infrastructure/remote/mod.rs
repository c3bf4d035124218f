//! Remote Shell Implementations
//!
//! Implements the RemoteShell port on top of the OpenSSH client tools.

mod ssh;

pub use ssh::SshShell;
