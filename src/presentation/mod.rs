//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Terminal detection and output settings
//! - Status line and plan rendering
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Console event sink and plan rendering
//! - `terminal` - Capability detection and `UiContext`

pub mod factory;
pub mod output;
pub mod terminal;

pub use output::{render_plan, render_plan_json, ConsoleEventSink};
pub use terminal::UiContext;
