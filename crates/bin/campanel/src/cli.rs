//! Command-line surface.

use campanel_adapter_http_reqwest::HttpError;
use campanel_domain::error::PanelError;
use campanel_domain::system::SystemAction;
use clap::{Parser, Subcommand};

use crate::config::ConfigError;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Control panel for an ESP32 camera",
    long_about = "Watches the camera status line and changes camera settings over the \
                  device's HTTP interface. The device address and poll timing come from \
                  campanel.toml or CAMPANEL_* environment variables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Poll the status forever, printing each status line
    Watch,
    /// Poll the status once
    Status {
        /// Also print heap, PSRAM, uptime and WiFi link details
        #[arg(short, long)]
        detailed: bool,
    },
    /// Set one camera variable (e.g. `set quality 10`)
    Set {
        /// Variable name as the firmware knows it
        variable: String,
        /// New value, sent as-is
        value: String,
    },
    /// Clear all saved settings and reboot
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Reboot the camera
    Reboot {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Failures that end the process with a non-zero status.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid device address")]
    Device(#[from] HttpError),
    #[error("camera did not answer the status request")]
    StatusUnavailable,
    #[error("camera did not answer the request to set {variable}")]
    ControlUnavailable { variable: String },
    #[error("{action} failed")]
    Action {
        action: SystemAction,
        #[source]
        source: PanelError,
    },
    #[error("failed to wait for ctrl-c")]
    Signal(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("campanel").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn should_have_consistent_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn should_parse_set_with_raw_value() {
        let command = parse(&["set", "wb_mode", "a b&c"]);
        assert!(matches!(
            command,
            Command::Set { ref variable, ref value } if variable == "wb_mode" && value == "a b&c"
        ));
    }

    #[test]
    fn should_parse_negative_value_after_separator() {
        let command = parse(&["set", "brightness", "--", "-2"]);
        assert!(matches!(command, Command::Set { ref value, .. } if value == "-2"));
    }

    #[test]
    fn should_parse_detailed_status() {
        assert!(matches!(
            parse(&["status", "--detailed"]),
            Command::Status { detailed: true }
        ));
        assert!(matches!(
            parse(&["status"]),
            Command::Status { detailed: false }
        ));
    }

    #[test]
    fn should_parse_assume_yes_for_destructive_commands() {
        assert!(matches!(parse(&["reset"]), Command::Reset { yes: false }));
        assert!(matches!(parse(&["reboot", "--yes"]), Command::Reboot { yes: true }));
        assert!(matches!(parse(&["reboot", "-y"]), Command::Reboot { yes: true }));
    }

    #[test]
    fn should_require_a_subcommand() {
        assert!(Cli::try_parse_from(["campanel"]).is_err());
    }
}
