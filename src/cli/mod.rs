pub mod keys;
pub mod ops;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Roster account registry CLI", long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, default_value = "roster.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identity key management
    Keys {
        #[command(subcommand)]
        cmd: keys::KeysCommands,
    },
    /// Initialize the registry; the caller becomes admin
    Init,
    /// Create the caller's account
    Create { name: String },
    /// Show the caller's account
    Show,
    /// Rename the caller's account
    Rename { new_name: String },
    /// Delete the caller's account
    Delete,
}
