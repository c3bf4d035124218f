//! Deploy Module
//!
//! Distributes a packed archive to every configured host.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`, `HostReport`, `HostStatus`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use webship::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(SshShell::new());
//! let result = use_case.execute(Path::new("versions/web_static_20240101120000.tgz"), &options)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployResult, HostReport, HostStatus};
pub use use_case::DeployUseCase;
