//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up from the
//! resolved configuration.

use std::sync::Arc;

use crate::application::{DeployOptions, DeployUseCase, PackOptions, PackUseCase, ShipUseCase};
use crate::config::Config;
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{JsonEventSink, SshShell, TarArchiver};

use super::output::ConsoleEventSink;
use super::terminal::UiContext;

/// Type alias for the concrete PackUseCase
pub type ConcretePackUseCase = PackUseCase<TarArchiver>;

/// Type alias for the concrete DeployUseCase
pub type ConcreteDeployUseCase = DeployUseCase<SshShell>;

/// Type alias for the concrete ShipUseCase
pub type ConcreteShipUseCase = ShipUseCase<TarArchiver, SshShell>;

/// SSH shell configured from `[ssh]`
pub fn create_ssh_shell(config: &Config) -> SshShell {
    let ssh = &config.ssh;
    SshShell::new()
        .with_programs(ssh.ssh_program.clone(), ssh.scp_program.clone())
        .with_user(ssh.user.clone())
        .with_port(ssh.port)
        .with_identity_file(ssh.identity_file.clone())
        .with_options(ssh.options.clone())
}

pub fn create_pack_use_case() -> ConcretePackUseCase {
    PackUseCase::new(TarArchiver::new())
}

pub fn create_deploy_use_case(config: &Config) -> ConcreteDeployUseCase {
    DeployUseCase::new(create_ssh_shell(config))
}

pub fn create_ship_use_case(config: &Config) -> ConcreteShipUseCase {
    ShipUseCase::new(TarArchiver::new(), create_ssh_shell(config))
}

/// Pack options from `[pack]`
pub fn pack_options(config: &Config) -> PackOptions {
    PackOptions::new(&config.pack.source, &config.pack.output_dir)
}

/// Deploy options from `[remote]` and `[deploy]`
pub fn deploy_options(config: &Config) -> DeployOptions {
    DeployOptions::from_config(config)
}

/// NDJSON sink for `--json`, console sink otherwise
pub fn create_event_sink(ui: &UiContext, command: &'static str) -> Arc<dyn DeployEventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stdout(ui))
    }
}
