//! Values for configurable (`<name>`) segments.
//!
//! A configurable segment carries no value in the template itself. The value is
//! supplied at runtime, for example per build flavor or environment:
//!
//! ```toml
//! env = "staging"
//! region = "eu"
//! ```

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PathConfig {
    values: HashMap<String, String>,
}

#[cfg(feature = "config-toml")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid path config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PathConfig {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn insert(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads a flat table of string values.
    #[cfg(feature = "config-toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

impl<K, V> std::iter::FromIterator<(K, V)> for PathConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs() {
        let config: PathConfig = vec![("env", "prod"), ("region", "eu")]
            .into_iter()
            .collect();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("env"), Some("prod"));
        assert!(config.contains("region"));
        assert!(!config.contains("tenant"));
    }

    #[cfg(feature = "config-toml")]
    #[test]
    fn from_toml() {
        let config = PathConfig::from_toml_str("env = \"staging\"\nregion = \"eu\"\n").unwrap();
        assert_eq!(config.get("env"), Some("staging"));
        assert_eq!(config.get("region"), Some("eu"));

        assert!(PathConfig::from_toml_str("env = 1").is_err());
        assert!(PathConfig::from_toml_str("env = ").is_err());
    }
}
