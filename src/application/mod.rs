//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PackUseCase` - Archive the source directory under a timestamped name
//! - `DeployUseCase` - Upload, unpack and relink an archive on each host
//! - `ShipUseCase` - Pack, then deploy the result

pub mod deploy;
pub mod pack;
pub mod ship;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase, HostReport, HostStatus};
pub use pack::{PackOptions, PackUseCase, PackedArchive};
pub use ship::{ShipOutcome, ShipUseCase};
