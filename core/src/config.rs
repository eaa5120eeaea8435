//! Configuration loading and data directory resolution.
//!
//! The data directory is resolved in priority order:
//! 1. command-line argument
//! 2. `TRACBOARD_DATA_DIR`
//! 3. `data_dir` in the TOML config file
//! 4. `~/.tracboard`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::time::ReferenceZone;

pub const DATA_DIR_ENV: &str = "TRACBOARD_DATA_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_DATA_DIR_NAME: &str = ".tracboard";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub data_dir: Option<PathBuf>,
    pub reference_zone: ReferenceZone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub reference_zone: ReferenceZone,
}

impl ConfigFile {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads `path`, or the default location when `None`. A missing default
    /// file yields an empty config; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let content = fs::read_to_string(p)
                    .map_err(|e| Error::Config(format!("{}: {}", p.display(), e)))?;
                Self::from_toml(&content)
            }
            None => match default_config_path() {
                Some(p) if p.exists() => {
                    debug!(path = %p.display(), "loading config file");
                    Self::from_toml(&fs::read_to_string(&p)?)
                }
                _ => Ok(Self::default()),
            },
        }
    }
}

impl Config {
    pub fn resolve(cli_data_dir: Option<PathBuf>, file: ConfigFile) -> Result<Self> {
        let env_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        Self::resolve_with_env(cli_data_dir, env_dir, file)
    }

    fn resolve_with_env(
        cli_data_dir: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        file: ConfigFile,
    ) -> Result<Self> {
        let data_dir = match cli_data_dir.or(env_dir).or(file.data_dir) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Config {
            data_dir,
            reference_zone: file.reference_zone,
        })
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tracboard").join(CONFIG_FILE_NAME))
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DATA_DIR_NAME))
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_file() {
        let file = ConfigFile::from_toml("data_dir = \"/srv/tracboard\"\nreference_zone = \"local\"\n").unwrap();
        assert_eq!(file.data_dir, Some(PathBuf::from("/srv/tracboard")));
        assert_eq!(file.reference_zone, ReferenceZone::Local);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = ConfigFile::from_toml("").unwrap();
        assert_eq!(file, ConfigFile::default());
        assert_eq!(file.reference_zone, ReferenceZone::Utc);
    }

    #[test]
    fn test_bad_zone_is_rejected() {
        assert!(ConfigFile::from_toml("reference_zone = \"mars\"").is_err());
    }

    #[test]
    fn test_resolution_priority() {
        let file = ConfigFile {
            data_dir: Some(PathBuf::from("/from/file")),
            reference_zone: ReferenceZone::Utc,
        };

        let cfg = Config::resolve_with_env(
            Some(PathBuf::from("/from/cli")),
            Some(PathBuf::from("/from/env")),
            file.clone(),
        )
        .unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/from/cli"));

        let cfg = Config::resolve_with_env(None, Some(PathBuf::from("/from/env")), file.clone()).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/from/env"));

        let cfg = Config::resolve_with_env(None, None, file).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/from/file"));
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let err = ConfigFile::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
