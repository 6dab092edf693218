use markdown_slides_engine::ClassifierSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the CLI writes slide JSON when `--output` names a bare file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub classifier: ClassifierSettings,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the output directory
        config.output_dir = config
            .output_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-slides");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolves an output file against `output_dir`. Paths with a directory
    /// component are used as given.
    pub fn resolve_output(&self, output: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if output.parent().is_none_or(|p| p.as_os_str().is_empty()) => {
                dir.join(output)
            }
            _ => output.to_path_buf(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-slides/config.toml"));
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.classifier.short_item_max_len, 80);
        assert_eq!(config.classifier.title_paragraph_max_len, 160);
        assert_eq!(config.classifier.timeline_min_items, 3);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_partial_classifier_section() {
        let config: Config = toml::from_str(
            r#"
[classifier]
timeline_min_items = 5
"#,
        )
        .unwrap();

        assert_eq!(config.classifier.timeline_min_items, 5);
        assert_eq!(config.classifier.short_item_max_len, 80);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            output_dir: Some(PathBuf::from("/tmp/slides")),
            classifier: ClassifierSettings {
                short_item_max_len: 60,
                ..ClassifierSettings::default()
            },
            output: OutputConfig { pretty: true },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("SLIDES_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$SLIDES_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("SLIDES_TEST_VAR");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[classifier\nshort_item_max_len = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            output_dir: Some(PathBuf::from("/tmp/slides")),
            output: OutputConfig { pretty: true },
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_output_dir_tilde_expanded_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "output_dir = \"~/slides\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        let dir = config.output_dir.unwrap();

        assert!(!dir.to_string_lossy().starts_with('~'));
        assert!(dir.ends_with("slides"));
    }

    #[test]
    fn test_resolve_output() {
        let config = Config {
            output_dir: Some(PathBuf::from("/srv/slides")),
            ..Config::default()
        };

        assert_eq!(
            config.resolve_output(Path::new("deck.json")),
            PathBuf::from("/srv/slides/deck.json")
        );
        assert_eq!(
            config.resolve_output(Path::new("out/deck.json")),
            PathBuf::from("out/deck.json")
        );
        assert_eq!(
            Config::default().resolve_output(Path::new("deck.json")),
            PathBuf::from("deck.json")
        );
    }
}
