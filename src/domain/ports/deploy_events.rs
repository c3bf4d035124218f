//! Deploy Event Port
//!
//! Provides an observable interface for pack and deploy operations.
//! Enables human status lines, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::StepKind;

/// Event emitted while packing or deploying
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Packing started
    PackStarted { source: PathBuf, archive: PathBuf },

    /// Archive written
    Packed {
        archive: PathBuf,
        size: u64,
        digest: String,
    },

    /// Packing failed
    PackFailed { error: String },

    /// Deploy started
    Started {
        archive: PathBuf,
        host_count: usize,
        dry_run: bool,
    },

    /// Deploy refused before touching any host
    Aborted { error: String },

    /// A host's step sequence started
    HostStarted { host: String },

    /// A step is about to run
    StepStarted {
        host: String,
        step: StepKind,
        command: String,
    },

    /// A step finished successfully
    StepSucceeded { host: String, step: StepKind },

    /// A step failed; later steps for this host do not run
    StepFailed {
        host: String,
        step: StepKind,
        error: String,
    },

    /// Every step succeeded on this host
    HostDeployed { host: String },

    /// Host not attempted
    HostSkipped { host: String, reason: String },

    /// Deploy completed
    Completed {
        deployed: usize,
        failed: usize,
        skipped: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: status lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants per-step events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
