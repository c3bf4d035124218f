//! webship - package a static web directory and roll it out over SSH
//!
//! `pack` archives the content directory under a timestamped name, `deploy`
//! uploads an archive to every host, unpacks it into its own release
//! directory and repoints the `current` link, and `ship` does both.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    DeployOptions, DeployResult, DeployUseCase, PackOptions, PackUseCase, PackedArchive,
    ShipOutcome, ShipUseCase,
};
pub use config::Config;
pub use domain::services::DeployPlan;
pub use domain::value_objects::{ArchiveName, Host, RemoteLayout, StepKind};
pub use error::{ShipError, ShipResult};
