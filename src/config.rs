//! # Machine Configuration
//!
//! Settings for the threaded [`crate::Motorola6800`]. The struct is serde
//! friendly so a host can keep it in the same settings file as its bus layout.

use serde::{Deserialize, Serialize};

/// Settings for a threaded processor.
///
/// Missing fields take their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use mc6800::Config;
///
/// let config = Config::default();
/// assert_eq!(config.thread_name, "m6800-dispatch");
/// assert!(!config.collect_stats);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name given to the dispatch thread.
    #[serde(default = "default_thread_name")]
    pub thread_name: String,

    /// Count executed opcodes, readable through `opcode_stats()`.
    #[serde(default)]
    pub collect_stats: bool,
}

fn default_thread_name() -> String {
    "m6800-dispatch".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thread_name: default_thread_name(),
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{"collect_stats": true}"#).unwrap();
        assert_eq!(config.thread_name, "m6800-dispatch");
        assert!(config.collect_stats);
    }
}
