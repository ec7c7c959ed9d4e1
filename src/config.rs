use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::ConfigError;
use crate::languages::Languages;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub languages: LanguagesConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    /// Passed through to the tokenizer. No link grammar exists yet.
    pub allow_links: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LanguagesConfig {
    /// Extra fenced-code language ids mapped to display names.
    pub extra: BTreeMap<String, String>,
}

impl LanguagesConfig {
    /// Language registry combining the built-in table with `extra`.
    pub fn registry(&self) -> Languages {
        Languages::with_extra(&self.extra)
    }
}

impl Config {
    /// The bundled default configuration.
    pub fn compiled_default() -> Self {
        // Syntax is checked by build.rs
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a TOML file, or return the compiled default if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::compiled_default())
            }
            result => result,
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compiled_default_disables_links() {
        let config = Config::compiled_default();
        assert!(!config.render.allow_links);
        assert!(config.languages.extra.is_empty());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = Config::from_toml("[render]\nallow_links = true\n").unwrap();
        assert!(config.render.allow_links);
        assert!(config.languages.extra.is_empty());
    }

    #[test]
    fn extra_languages() {
        let config = Config::from_toml("[languages]\nextra = { vue = \"Vue\" }\n").unwrap();
        assert_eq!(config.languages.extra.get("vue").map(String::as_str), Some("Vue"));
        assert_eq!(config.languages.registry().pretty_name("vue"), Some("Vue"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[render\n").is_err());
        assert!(Config::from_toml("[render]\nallow_links = \"yes\"\n").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let path = Path::new("this/path/does/not/exist/chatmark.toml");
        assert!(matches!(Config::load(path), Err(ConfigError::Io { .. })));
        let config = Config::load_or_default(path).unwrap();
        assert!(!config.render.allow_links);
    }
}
