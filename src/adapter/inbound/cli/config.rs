//! Configuration loading for CLI handlers.

use std::fmt;
use std::path::{Path, PathBuf};

use super::paths;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Load the configuration for a command.
///
/// An explicit path must exist. Without one, the default path is used when
/// present and built-in defaults (plus environment secrets) otherwise.
pub fn load(explicit: Option<&Path>) -> Result<(Config, ConfigSource)> {
    resolve(explicit, &paths::default_config())
}

fn resolve(explicit: Option<&Path>, default_path: &Path) -> Result<(Config, ConfigSource)> {
    match explicit {
        Some(path) => Ok((Config::load(path)?, ConfigSource::File(path.to_path_buf()))),
        None if default_path.exists() => Ok((
            Config::load(default_path)?,
            ConfigSource::File(default_path.to_path_buf()),
        )),
        None => Ok((Config::from_env(), ConfigSource::Defaults)),
    }
}
