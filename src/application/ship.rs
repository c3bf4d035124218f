//! Ship Use Case
//!
//! Pack then deploy. A failed pack never reaches the remote shell.

use std::sync::Arc;

use crate::domain::ports::{Archiver, DeployEventSink, NoopEventSink, RemoteShell};
use crate::error::ShipError;

use super::deploy::{DeployOptions, DeployResult, DeployUseCase};
use super::pack::{PackOptions, PackUseCase, PackedArchive};

/// How a ship run ended
#[derive(Debug)]
pub enum ShipOutcome {
    /// No archive was produced
    PackFailed { error: ShipError },
    /// The archive exists but the deploy refused to start
    DeployRefused {
        packed: PackedArchive,
        error: ShipError,
    },
    /// The deploy ran; per-host results inside
    Finished {
        packed: PackedArchive,
        deploy: DeployResult,
    },
}

impl ShipOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ShipOutcome::Finished { deploy, .. } if deploy.is_success())
    }

    pub fn packed(&self) -> Option<&PackedArchive> {
        match self {
            ShipOutcome::PackFailed { .. } => None,
            ShipOutcome::DeployRefused { packed, .. } | ShipOutcome::Finished { packed, .. } => {
                Some(packed)
            }
        }
    }
}

/// Composition of [`PackUseCase`] and [`DeployUseCase`]
pub struct ShipUseCase<A: Archiver, R: RemoteShell> {
    pack: PackUseCase<A>,
    deploy: DeployUseCase<R>,
}

impl<A: Archiver, R: RemoteShell> ShipUseCase<A, R> {
    pub fn new(archiver: A, shell: R) -> Self {
        Self {
            pack: PackUseCase::new(archiver),
            deploy: DeployUseCase::new(shell),
        }
    }

    pub fn deployer(&self) -> &DeployUseCase<R> {
        &self.deploy
    }

    pub fn execute(&self, pack: &PackOptions, deploy: &DeployOptions) -> ShipOutcome {
        self.execute_with_events(pack, deploy, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        pack: &PackOptions,
        deploy: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> ShipOutcome {
        let packed = match self.pack.execute_with_events(pack, event_sink.clone()) {
            Ok(packed) => packed,
            Err(error) => return ShipOutcome::PackFailed { error },
        };

        match self
            .deploy
            .execute_with_events(&packed.path, deploy, event_sink)
        {
            Ok(result) => ShipOutcome::Finished {
                packed,
                deploy: result,
            },
            Err(error) => ShipOutcome::DeployRefused { packed, error },
        }
    }
}
