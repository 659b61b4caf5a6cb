use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_PATH: &str = "data/movement.json";

/// Settings resolved from `.env`, the environment and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_file: None,
            debug: false,
        }
    }
}

/// Loads `.env` and reads the application settings from the environment.
pub fn init_app_config() -> AppConfig {
    dotenv().ok();
    config_from(|key| env::var(key).ok())
}

fn config_from(lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    let data_path = lookup("MOVEMENT_DATA")
        .filter(|value| !value.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);

    let log_file = lookup("MOVEMENT_LOG_FILE")
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from);

    let debug = lookup("DEBUG").is_some_and(|value| value != "0" && !value.is_empty());

    AppConfig {
        data_path,
        log_file,
        debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_defaults() {
        assert_eq!(config_from(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(lookup(&[
            ("MOVEMENT_DATA", "/srv/forecast.json"),
            ("MOVEMENT_LOG_FILE", "movement.log"),
            ("DEBUG", "1"),
        ]));
        assert_eq!(config.data_path, PathBuf::from("/srv/forecast.json"));
        assert_eq!(config.log_file, Some(PathBuf::from("movement.log")));
        assert!(config.debug);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(lookup(&[("MOVEMENT_DATA", "  "), ("DEBUG", "0")]));
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert!(!config.debug);
    }
}
