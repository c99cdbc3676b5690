//! Command-line interface for tabpick
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and merging with arguments
//! - Subcommand dispatch (script, config, version)
//! - The default completion path invoked by the shell

pub mod script;

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::completion::{CompletionEngine, CompletionReply, StaticCandidateProvider};
use crate::config::Config;
use crate::error::Result;

/// Tab completion helper driven by shell environment variables
#[derive(Parser, Debug)]
#[command(
    name = "tabpick",
    version,
    about = "Prefix completion helper for interactive shells",
    long_about = "A completion helper invoked by the shell's completion subsystem.
Run with no subcommand it reads COMP_WORDS, EVAL_WORDS and COMP_CWORD from the
environment and prints matching candidates joined by the BEL character."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for tabpick
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell registration script
    Script {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// Parsing failures exit via clap; configuration failures fall back to
    /// defaults so the completion path stays available.
    pub fn new() -> Self {
        let args = CliArgs::parse();
        let config = Self::load_config(&args);

        Self { args, config }
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Config` - Effective configuration
    fn load_config(args: &CliArgs) -> Config {
        let config_path = args.config_file.as_deref();
        let mut config = match Config::load_from_file(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: Failed to load configuration: {}", e);
                eprintln!("Using default configuration instead.");
                Config::default()
            }
        };

        // Apply CLI arguments to override config values
        Self::apply_args_to_config(&mut config, args);

        config
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        use crate::config::LogLevel;

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Get the configuration
    ///
    /// # Returns
    /// * `&Config` - Reference to configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    ///
    /// # Returns
    /// * `&CliArgs` - Reference to arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Script { shell }) => {
                script::generate_script(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        println!("tabpick version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file()?;
        }

        if show {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("Configuration file does not exist; defaults apply");
            return Ok(());
        }

        match Config::load_from_file(self.args.config_file.as_deref()) {
            Ok(_) => println!("Configuration is valid"),
            Err(e) => println!("Failed to load configuration: {}", e),
        }

        Ok(())
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("=== Effective Configuration ===");
        println!();

        match self.config.to_toml() {
            Ok(toml_str) => println!("{}", toml_str),
            Err(e) => {
                eprintln!("Error formatting configuration: {}", e);
                println!("{:#?}", self.config);
            }
        }

        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .as_ref()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Config::default_config_path)
    }

    /// Run the completion path against the process environment
    ///
    /// Prints the BEL-joined matches to stdout. This path never fails: an
    /// unusable environment yields an empty reply and a stdout write error
    /// is absorbed, because a completion helper that errors out breaks the
    /// interactive shell it serves.
    pub fn run_completion(&self) {
        let engine = CompletionEngine::new(Arc::new(StaticCandidateProvider::new()));
        let reply = CompletionReply::new(engine.complete_from_env());

        if let Err(e) = reply.write_to(&mut io::stdout()) {
            tracing::debug!("failed to write completion reply: {e}");
        }
    }
}
