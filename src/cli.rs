//! Command line definition
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chef-menu")]
#[command(version)]
#[command(about = "Menu manager for A Taste With Chef Christoffel")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Add a dish before showing the menu: NAME DESCRIPTION COURSE PRICE
    #[arg(
        long,
        num_args = 4,
        value_names = ["NAME", "DESCRIPTION", "COURSE", "PRICE"],
        action = clap::ArgAction::Append
    )]
    pub(crate) add: Vec<String>,

    /// Remove the dish with this id before showing the menu
    #[arg(long, value_name = "ID")]
    pub(crate) remove: Vec<String>,

    /// Only show one course: All, Starters, Mains or Dessert
    #[arg(long, default_value = "All")]
    pub(crate) course: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check a configuration file and exit
    Test {
        #[arg(index = 1)]
        config_file: PathBuf,
    },
}
