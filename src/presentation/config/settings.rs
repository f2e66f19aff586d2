use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub generator: GeneratorSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    /// Records produced and committed per loop iteration.
    pub batch_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub tabs_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3000),
            },
            generator: GeneratorSettings {
                batch_size: std::env::var("GENERATOR_BATCH_SIZE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .filter(|&n| n > 0)
                    .unwrap_or(100),
            },
            storage: StorageSettings {
                tabs_path: std::env::var("TABS_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("data/tabs.json")),
            },
        }
    }
}
