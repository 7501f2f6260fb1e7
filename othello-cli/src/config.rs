use derive_more::{Display, Error};
use serde::Deserialize;
use std::{fs, path::Path};

/// Display settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dark_symbol: char,
    pub light_symbol: char,
    pub empty_symbol: char,
    /// Clear the terminal before each turn, and pause after a rejected move.
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_symbol: 'B',
            light_symbol: 'W',
            empty_symbol: ' ',
            clear_screen: true,
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "failed to read config {}: {}", path, source)]
    Read { path: String, source: std::io::Error },

    #[display(fmt = "failed to parse config {}: {}", path, source)]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

impl Config {
    /// Load settings from `path`. A missing path or file gives the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) if p.exists() => p,
            Some(p) => {
                log::warn!("config file {} not found, using defaults", p.display());
                return Ok(Self::default());
            }
            None => return Ok(Self::default()),
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load(Some(Path::new("no_such_othello_config.yaml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("othello.yaml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "dark_symbol: X\nclear_screen: false").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.dark_symbol, 'X');
        assert!(!config.clear_screen);
        assert_eq!(config.light_symbol, 'W');
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("othello.yaml");
        fs::write(&path, "dark_symbol: [not, a, char]").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
