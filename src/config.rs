use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Defaults for CLI flags the user leaves out, optionally overridden
/// by a `config.toml` next to the manifest.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub resource_url: String,
    pub header_text: String,
    pub interval: String,
}

impl Default for Config {
    fn default() -> Self {
        // Try to read from config.toml first
        if let Ok(config) = load_config() {
            return config;
        }

        // Fallback to hardcoded defaults
        Self {
            resource_url: "https://www.investing.com/indices/arca-gold-miners-historical-data"
                .to_string(),
            header_text: "ARCA Gold Miners Historical Data".to_string(),
            interval: "monthly".to_string(),
        }
    }
}

fn get_config_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("config.toml");
    path
}

pub fn load_config() -> anyhow::Result<Config> {
    let config_path = get_config_path();
    let config_str = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
