use serde::Deserialize;
use std::path::{Path, PathBuf};

use licensetui::{ConfigError, Filter};

/// User configuration loaded from `config.yaml`. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub vim_mode: bool,
    /// Filter token applied at startup ("all", "permissive", ...)
    pub initial_filter: Option<String>,
    /// Open the category guide at startup
    pub show_guide: bool,
}

impl Config {
    /// Parse YAML contents. An empty file yields the defaults.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validated initial filter, if one is configured
    pub fn initial_filter(&self) -> Result<Option<Filter>, ConfigError> {
        match self.initial_filter.as_deref() {
            Some(token) => Ok(Some(token.parse()?)),
            None => Ok(None),
        }
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise the platform config directory is
/// tried, then `./config.yaml`. `None` means "run with defaults".
pub fn get_config_path(cli_path: Option<PathBuf>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = cli_path {
        return if path.exists() {
            Ok(Some(path))
        } else {
            Err(ConfigError::NotFound(path))
        };
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("licensetui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Locate and load the configuration
pub fn load(cli_path: Option<PathBuf>) -> Result<(Config, Option<PathBuf>), ConfigError> {
    let Some(path) = get_config_path(cli_path)? else {
        return Ok((Config::default(), None));
    };

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = Config::parse(&path, &contents)?;
    Ok((config, Some(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use licensetui::Category;

    fn parse(yaml: &str) -> Result<Config, ConfigError> {
        Config::parse(Path::new("config.yaml"), yaml)
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
        assert_eq!(parse("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse("vim_mode: true\n").unwrap();
        assert!(config.vim_mode);
        assert!(!config.show_guide);
        assert!(config.initial_filter.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            "vim_mode: false\ninitial_filter: copyleft-strong\nshow_guide: true\n",
        )
        .unwrap();
        assert!(config.show_guide);
        assert_eq!(
            config.initial_filter().unwrap(),
            Some(Filter::Category(Category::StrongCopyleft))
        );
    }

    #[test]
    fn test_invalid_initial_filter_rejected() {
        let config = parse("initial_filter: proprietary\n").unwrap();
        assert!(matches!(
            config.initial_filter(),
            Err(ConfigError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_malformed_yaml_reports_path() {
        let err = parse("vim_mode: [unclosed").unwrap_err();
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let missing = PathBuf::from("/definitely/not/here/licensetui.yaml");
        assert!(matches!(
            get_config_path(Some(missing)),
            Err(ConfigError::NotFound(_))
        ));
    }
}
