use std::env;
use std::path::PathBuf;

/// Runtime configuration for the server binary
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            data_file: PathBuf::from("data.json"),
        }
    }
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults
    ///
    /// Recognized variables: `PORT`, `BIND_ADDRESS`, `DATA_FILE`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring unparsable PORT value: {}", raw);
                defaults.port
            }),
            Err(_) => defaults.port,
        };
        let bind_address = env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address);
        let data_file = env::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        Self {
            bind_address,
            port,
            data_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.data_file, PathBuf::from("data.json"));
    }
}
