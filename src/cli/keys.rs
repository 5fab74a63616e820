use crate::identity::IdentityFile;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand, Debug, Clone)]
pub enum KeysCommands {
    /// Generate a new identity keyfile
    Generate {
        /// Name of the key file (e.g. "admin" writes "admin.json")
        #[clap(long)]
        name: String,
    },
    /// Inspect a key file and print its public key
    Inspect {
        #[clap(long)]
        name: String,
    },
}

pub fn handle_keys_command(cmd: KeysCommands) {
    match cmd {
        KeysCommands::Generate { name } => {
            let filename = format!("{}.json", name);
            if Path::new(&filename).exists() {
                println!(
                    "Error: File '{}' already exists. Aborting to prevent overwrite.",
                    filename
                );
                return;
            }

            let keyfile = IdentityFile::generate();
            match keyfile.save(Path::new(&filename)) {
                Ok(()) => {
                    println!("Created '{}'", filename);
                    println!("Public Key: {}", keyfile.public_key);
                }
                Err(e) => println!("Error: {}", e),
            }
        }
        KeysCommands::Inspect { name } => {
            let filename = format!("{}.json", name);
            match IdentityFile::load(Path::new(&filename)) {
                Ok(keyfile) => match keyfile.identity() {
                    Ok(id) => println!("Public Key: {}", id),
                    Err(e) => println!("Error: Corrupt keyfile: {}", e),
                },
                Err(e) => println!("Error: {}", e),
            }
        }
    }
}
