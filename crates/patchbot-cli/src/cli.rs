//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use patchbot_publish::CONFIG_FILE;

/// Validate LV2 plugin packages across build targets and prepare them for
/// publishing
#[derive(Parser, Debug)]
#[command(name = "patchbot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, env = "PATCHBOT_CONFIG", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List discovered packages and the targets they were built for
    Scan,

    /// Check that every target of a package has the same files and metadata
    ///
    /// Examples:
    ///   patchbot validate all
    ///   patchbot validate reverb
    Validate {
        /// Package name, or "all"
        #[arg(default_value = "all")]
        package: String,
    },

    /// Validate, then write debug.json, artwork.png and patchstorage.json
    /// into the dist folder
    Prepare {
        /// Package name, or "all"
        #[arg(default_value = "all")]
        package: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_defaults_to_all() {
        let cli = Cli::try_parse_from(["patchbot", "validate"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Validate {
                package: "all".into()
            }
        );
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["patchbot", "prepare", "reverb", "-v", "--config", "x.toml"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert_eq!(
            cli.command,
            Commands::Prepare {
                package: "reverb".into()
            }
        );
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["patchbot"]).is_err());
    }
}
