//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use fieldcast::config::ConfigFileError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// No stations configured for a refresh run
    NoStations,
    /// The hidden worker mode was invoked directly
    DirectWorkerInvocation,
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::NoStations => {
                eprintln!();
                eprintln!("Add stations to the [stations] section of your config, e.g.:");
                eprintln!("  [stations]");
                eprintln!("  list = kspb:2, k1a5");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Run 'fieldcast config init' to create a default config file.");
            }
            _ => {}
        }

        let code = match self {
            CliError::DirectWorkerInvocation => 2,
            _ => 1,
        };
        process::exit(code)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(err) => write!(f, "{}", err),
            CliError::NoStations => write!(f, "No stations configured"),
            CliError::DirectWorkerInvocation => write!(
                f,
                "Workers are spawned by the refresh scheduler and cannot be invoked directly; \
                 run 'fieldcast refresh' instead"
            ),
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(err: ConfigFileError) -> Self {
        CliError::Config(err)
    }
}
