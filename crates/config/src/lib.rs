//! Configuration loading for weblist.
//!
//! Configuration is layered with [`figment`], later sources overriding
//! earlier ones:
//!
//! 1. Built-in defaults ([`Config::default`]).
//! 2. A TOML file: either given explicitly, or `weblist.toml` in the
//!    platform configuration directory (skipped when absent).
//! 3. Environment variables prefixed with `WEBLIST_` (e.g.
//!    `WEBLIST_TEMP_DIR=/var/tmp`).

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use weblist_store::DEFAULT_RESOURCE;

/// Prefix of environment variables that override configuration keys.
pub const ENV_PREFIX: &str = "WEBLIST_";
/// File name looked up in the platform configuration directory.
pub const FILE_NAME: &str = "weblist.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logical path of the database inside the bundled resource set.
    pub database: String,
    /// Directory to materialize the database into. Defaults to the system
    /// temporary directory.
    pub temp_dir: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}
impl Default for Config {
    fn default() -> Self {
        Self { database: DEFAULT_RESOURCE.to_string(), temp_dir: None, log_level: "warn".to_string() }
    }
}

impl Config {
    /// Location of the configuration file when none is given explicitly.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "weblist").map(|dirs| dirs.config_dir().join(FILE_NAME))
    }

    /// Load configuration from all sources.
    ///
    /// An explicit `file` must exist. The default file is optional.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file = match file {
            Some(path) if !path.is_file() => {
                exn::bail!(ErrorKind::FileNotFound(path.to_path_buf()));
            },
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path(),
        };
        tracing::debug!(file = ?file, "Loading configuration");
        Self::figment(file.as_deref()).extract().or_raise(|| ErrorKind::Invalid)
    }

    /// The layered [`Figment`] backing [`load`](Self::load), exposed so that
    /// callers can merge in further providers.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(file) = file {
            figment = figment.merge(Toml::file(file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }
}
