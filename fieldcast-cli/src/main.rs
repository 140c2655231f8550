//! Fieldcast CLI - refresh scheduler for airport display caches.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use commands::config::ConfigAction;
use commands::refresh::RefreshArgs;
use error::CliError;
use fieldcast::logging::init_logging;

#[derive(Parser)]
#[command(name = "fieldcast")]
#[command(version = fieldcast::VERSION)]
#[command(about = "Refresh weather and webcam caches for airport displays", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one refresh batch over all configured stations
    Refresh(RefreshArgs),

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Internal worker mode; workers are started by the scheduler only
    #[command(hide = true)]
    Worker {
        /// Ignored; kept so stray invocations produce a clear error
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Refresh(args) => {
            let _guard = match init_logging("logs", "fieldcast.log", "info") {
                Ok(guard) => guard,
                Err(err) => CliError::LoggingInit(err.to_string()).exit(),
            };
            commands::refresh::execute(args).await
        }
        Command::Config { action } => commands::config::execute(action),
        // Workers run in-process under the pool; there is nothing to start
        // from the command line.
        Command::Worker { .. } => Err(CliError::DirectWorkerInvocation),
    };

    if let Err(err) = result {
        err.exit();
    }
}
