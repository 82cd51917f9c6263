//! # campanel: terminal control panel for an ESP32 camera
//!
//! Composition root that wires the HTTP adapter into the panel services.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Install the `tracing` subscriber
//! - Construct the device client, timer, display and prompt adapters
//! - Construct the services, injecting adapters via port traits
//! - Dispatch the requested command
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod cli;
mod config;
mod terminal;

use campanel_adapter_http_reqwest::{HttpDeviceClient, TokioTimer};
use campanel_app::ports::{DeviceClient, StatusDisplay};
use campanel_app::services::{ControlSynchronizer, StatusPoller, SystemActions};
use campanel_domain::control::CameraVariable;
use campanel_domain::poll::PollOutcome;
use campanel_domain::status::CONNECTION_ERROR_MESSAGE;
use campanel_domain::system::{ActionOutcome, SystemAction};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, CliError, Command};
use crate::config::Config;
use crate::terminal::{StdoutDisplay, TerminalPrompt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load().map_err(CliError::from)?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .unwrap_or_else(|_| EnvFilter::new("campanel=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = HttpDeviceClient::new(&config.device.base_url).map_err(CliError::from)?;
    tracing::debug!(device = %client.base_url(), command = ?cli.command, "starting");

    run(cli.command, &config, client).await?;
    Ok(())
}

async fn run(command: Command, config: &Config, client: HttpDeviceClient) -> Result<(), CliError> {
    match command {
        Command::Watch => watch(client, config).await,
        Command::Status { detailed: false } => {
            let mut poller = StatusPoller::new(client, StdoutDisplay, TokioTimer);
            match poller.poll().await {
                PollOutcome::Rendered(_) => Ok(()),
                PollOutcome::Failed => Err(CliError::StatusUnavailable),
            }
        }
        Command::Status { detailed: true } => detailed_status(&client).await,
        Command::Set { variable, value } => {
            if CameraVariable::from_name(&variable).is_none() {
                tracing::warn!(%variable, "not a known camera variable, sending anyway");
            }
            let answered = ControlSynchronizer::new(client, StdoutDisplay)
                .set_control(&variable, &value)
                .await;
            if answered {
                Ok(())
            } else {
                Err(CliError::ControlUnavailable { variable })
            }
        }
        Command::Reset { yes } => system_action(client, SystemAction::ClearSettings, yes).await,
        Command::Reboot { yes } => system_action(client, SystemAction::Reboot, yes).await,
    }
}

async fn watch(client: HttpDeviceClient, config: &Config) -> Result<(), CliError> {
    let poller = StatusPoller::new(client, StdoutDisplay, TokioTimer).with_timing(config.timing());
    tracing::info!(interval = ?config.timing().interval, "watching camera status");
    tokio::select! {
        () = poller.run() => Ok(()),
        signal = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted");
            signal.map_err(CliError::Signal)
        }
    }
}

async fn detailed_status(client: &HttpDeviceClient) -> Result<(), CliError> {
    let display = StdoutDisplay;
    match client.fetch_status().await {
        Ok(status) => {
            display.show(&status.to_string());
            for (label, value) in status.diagnostics() {
                display.show(&format!("  {label}: {value}"));
            }
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = ?err, "status request failed");
            display.show(CONNECTION_ERROR_MESSAGE);
            Err(CliError::StatusUnavailable)
        }
    }
}

async fn system_action(
    client: HttpDeviceClient,
    action: SystemAction,
    assume_yes: bool,
) -> Result<(), CliError> {
    let actions = SystemActions::new(client, TerminalPrompt::stdio(assume_yes));
    match actions.perform(action).await {
        Ok(ActionOutcome::Declined) => {
            tracing::info!(%action, "cancelled");
            Ok(())
        }
        Ok(ActionOutcome::Completed { .. }) => Ok(()),
        Err(source) => Err(CliError::Action { action, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn offline_client() -> HttpDeviceClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        HttpDeviceClient::new(&format!("http://{addr}")).unwrap()
    }

    #[tokio::test]
    async fn should_fail_set_when_device_unreachable() {
        let command = Command::Set {
            variable: "quality".to_string(),
            value: "10".to_string(),
        };

        let result = run(command, &Config::default(), offline_client().await).await;

        assert!(matches!(
            result,
            Err(CliError::ControlUnavailable { ref variable }) if variable == "quality"
        ));
    }

    #[tokio::test]
    async fn should_fail_status_when_device_unreachable() {
        let command = Command::Status { detailed: false };

        let result = run(command, &Config::default(), offline_client().await).await;

        assert!(matches!(result, Err(CliError::StatusUnavailable)));
    }
}
