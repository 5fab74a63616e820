use clap::Parser;
use roster::cli::{self, Cli, Commands};
use roster::config::RosterConfig;
use roster::error::RosterError;
use roster::identity::{Identity, IdentityFile};
use roster::registry::{LogicRef, LogicV1, Registry};
use roster::storage::Storage;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn open_registry(config: &RosterConfig) -> Result<Registry, RosterError> {
    let storage = Arc::new(Storage::new(&config.db_path)?);
    let implementations: Vec<LogicRef> = vec![Arc::new(LogicV1)];
    Registry::with_storage(storage, &implementations)
}

fn load_caller(config: &RosterConfig) -> Result<Identity, RosterError> {
    IdentityFile::load(Path::new(&config.identity_file))?.identity()
}

fn main() {
    let cli = Cli::parse();
    let config = RosterConfig::load_or_default(&cli.config);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let Some(command) = cli.command else {
        println!("No command given. Try 'roster --help'.");
        return;
    };

    match command {
        // Key management needs no registry or caller identity
        Commands::Keys { cmd } => cli::keys::handle_keys_command(cmd),
        command => {
            let registry = match open_registry(&config) {
                Ok(r) => r,
                Err(e) => {
                    println!("Error: {}", e);
                    return;
                }
            };
            let caller = match load_caller(&config) {
                Ok(id) => id,
                Err(e) => {
                    println!("Error: {}", e);
                    println!("Generate one with 'roster keys generate --name identity'.");
                    return;
                }
            };

            match command {
                Commands::Keys { .. } => unreachable!(),
                Commands::Init => cli::ops::handle_init(&registry, caller),
                Commands::Create { name } => cli::ops::handle_create(&registry, caller, &name),
                Commands::Show => cli::ops::handle_show(&registry, caller),
                Commands::Rename { new_name } => {
                    cli::ops::handle_rename(&registry, caller, &new_name)
                }
                Commands::Delete => cli::ops::handle_delete(&registry, caller),
            }
        }
    }
}
