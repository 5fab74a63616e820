use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RosterConfig {
    pub db_path: String,
    pub log_level: String,
    #[serde(default = "default_identity_file")]
    pub identity_file: String,
}

fn default_identity_file() -> String {
    "identity.json".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            db_path: "./data/roster".to_string(),
            log_level: "info".to_string(),
            identity_file: "identity.json".to_string(),
        }
    }
}

impl RosterConfig {
    pub fn load_or_default(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            match std::fs::read_to_string(path) {
                Ok(s) => match toml::from_str(&s) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error parsing config: {}. Using Defaults.", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    eprintln!("Error reading config: {}. Using Defaults.", e);
                    Self::default()
                }
            }
        } else {
            println!("Config file not found at '{}'. Creating default.", path);
            let config = Self::default();
            if let Ok(s) = toml::to_string_pretty(&config) {
                let _ = std::fs::write(path, s);
            }
            config
        }
    }
}
