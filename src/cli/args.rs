//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check that every JSP message code exists in the properties file
//! - `init`: Initialize jspcheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all checking commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory; config lookup and relative paths start here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory scanned recursively for templates (overrides config file)
    #[arg(long)]
    pub template_root: Option<PathBuf>,

    /// Message properties file (overrides config file)
    #[arg(long)]
    pub message_properties: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that every JSP message code exists in the message properties
    Check(CheckCommand),
    /// Initialize a new .jspcheckrc.json configuration file
    Init,
}
