//! Game configuration
//!
//! Defaults follow the conventional board and the standard timings. Each
//! field can be overridden from the environment:
//!
//! - `TETROMINOS_COLUMNS`: board width (default: 10)
//! - `TETROMINOS_LINES`: visible lines (default: 20)
//! - `TETROMINOS_GRAVITY_MS`: gravity interval (default: 700)
//! - `TETROMINOS_LOCK_DELAY_MS`: lock-delay grace period (default: 300)
//! - `TETROMINOS_SEED`: randomizer seed (default: OS entropy)
//! - `TETROMINOS_LOG_PATH`: JSON-lines journal file (default: none)

use std::str::FromStr;

use crate::error::ConfigError;
use crate::types::{BOARD_COLUMNS, BOARD_LINES, GRAVITY_MS, LOCK_DELAY_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: i32,
    pub lines: i32,
    pub gravity_ms: u32,
    pub lock_delay_ms: u32,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: BOARD_COLUMNS,
            lines: BOARD_LINES,
            gravity_ms: GRAVITY_MS,
            lock_delay_ms: LOCK_DELAY_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; absent keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let columns = parse(&lookup, "TETROMINOS_COLUMNS")?.unwrap_or(defaults.columns);
        let lines = parse(&lookup, "TETROMINOS_LINES")?.unwrap_or(defaults.lines);
        let gravity_ms = parse(&lookup, "TETROMINOS_GRAVITY_MS")?.unwrap_or(defaults.gravity_ms);
        let lock_delay_ms =
            parse(&lookup, "TETROMINOS_LOCK_DELAY_MS")?.unwrap_or(defaults.lock_delay_ms);
        let seed = parse(&lookup, "TETROMINOS_SEED")?;

        let log_path = lookup("TETROMINOS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        if gravity_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "TETROMINOS_GRAVITY_MS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            columns,
            lines,
            gravity_ms,
            lock_delay_ms,
            seed,
            log_path,
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn absent_keys_use_defaults() {
        let config = GameConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.gravity_ms, 700);
        assert_eq!(config.lock_delay_ms, 300);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TETROMINOS_COLUMNS", "12"),
            ("TETROMINOS_LINES", " 22 "),
            ("TETROMINOS_SEED", "42"),
            ("TETROMINOS_LOG_PATH", "/tmp/tetrominos.jsonl"),
        ]))
        .unwrap();
        assert_eq!(config.columns, 12);
        assert_eq!(config.lines, 22);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/tetrominos.jsonl"));
    }

    #[test]
    fn empty_log_path_is_ignored() {
        let config = GameConfig::from_lookup(lookup_from(&[("TETROMINOS_LOG_PATH", "  ")])).unwrap();
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn bad_values_are_errors() {
        let err = GameConfig::from_lookup(lookup_from(&[("TETROMINOS_GRAVITY_MS", "fast")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "TETROMINOS_GRAVITY_MS",
                value: "fast".to_string()
            }
        );
        assert!(GameConfig::from_lookup(lookup_from(&[("TETROMINOS_GRAVITY_MS", "0")])).is_err());
    }
}
