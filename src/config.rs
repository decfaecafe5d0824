use crate::db::{get_data_dir, get_db_path};
use std::path::PathBuf;
use std::time::Duration;

pub const STORAGE_KEY: &str = "vocab_words_v1";
pub const DEFAULT_SEED_FILE: &str = "words.json";
pub const LOG_FILE_NAME: &str = "vocab-cards.log";
pub const ADD_TO_LIST_DELAY: Duration = Duration::from_millis(1000);
pub const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub seed_path: PathBuf,
    pub storage_key: String,
    pub add_to_list_delay: Duration,
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: get_db_path(),
            log_path: get_data_dir().join(LOG_FILE_NAME),
            seed_path: PathBuf::from(DEFAULT_SEED_FILE),
            storage_key: STORAGE_KEY.to_string(),
            add_to_list_delay: ADD_TO_LIST_DELAY,
            tick_rate: TICK_RATE,
        }
    }
}

impl Config {
    /// Config rooted at `dir`, used by tests to keep the database off the user's data dir.
    pub fn in_dir(dir: &std::path::Path) -> Self {
        Self {
            db_path: dir.join("vocab.db"),
            log_path: dir.join(LOG_FILE_NAME),
            seed_path: dir.join(DEFAULT_SEED_FILE),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, "vocab_words_v1");
        assert_eq!(config.add_to_list_delay, Duration::from_millis(1000));
        assert_eq!(config.log_path.parent(), config.db_path.parent());
        assert_eq!(config.seed_path, PathBuf::from("words.json"));
    }

    #[test]
    fn test_config_in_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::in_dir(temp_dir.path());
        assert_eq!(config.db_path, temp_dir.path().join("vocab.db"));
        assert_eq!(config.seed_path, temp_dir.path().join("words.json"));
        assert_eq!(config.storage_key, STORAGE_KEY);
    }
}
