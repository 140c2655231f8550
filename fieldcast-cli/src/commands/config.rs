//! The `config` command: inspect or create the config file.

use crate::error::CliError;
use clap::Subcommand;
use fieldcast::config::{config_file_path, to_config_string, ConfigFile};

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Create the default config file if it doesn't exist
    Init,
}

/// Executes a config subcommand.
pub fn execute(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            let config = ConfigFile::load()?;
            println!("# {}", config_file_path().display());
            print!("{}", to_config_string(&config));
        }
        ConfigAction::Init => {
            let path = ConfigFile::ensure_exists()?;
            println!("Config file: {}", path.display());
        }
    }
    Ok(())
}
