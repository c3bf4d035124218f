//! Domain Services
//!
//! Pure business logic services that operate on domain values.
//! These services have no I/O dependencies and are easily testable.

mod deploy_plan;

pub use deploy_plan::{shell_quote, DeployPlan, DeployStep, StepAction};
