//! Path resolution for the journal database and the wiki root.
//!
//! Each setting is taken from the first source that provides it: command-line
//! flag, environment variable, YAML config file, then the XDG default.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DB_ENV: &str = "JWIKI_DB";
pub const WIKI_DIR_ENV: &str = "JWIKI_WIKI_DIR";

const APP_DIR: &str = "jwiki";

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    #[diagnostic(code(jwiki::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", path.display())]
    #[diagnostic(
        code(jwiki::config::parse),
        help("Expected YAML with optional 'db_path' and 'wiki_dir' keys")
    )]
    Parse { path: PathBuf, message: String },

    #[error("Cannot determine home directory")]
    #[diagnostic(
        code(jwiki::config::no_home),
        help("Set HOME, or pass --db and --wiki-dir explicitly")
    )]
    NoHome,
}

/// Resolved locations used by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub db_path: PathBuf,
    pub wiki_dir: PathBuf,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
    pub wiki_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    db_path: Option<PathBuf>,
    wiki_dir: Option<PathBuf>,
}

impl SyncConfig {
    /// Resolve against the process environment.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve<F>(overrides: &ConfigOverrides, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &overrides.config_file {
            Some(path) => read_config_file(path)?,
            None => match default_config_path(&env) {
                Some(path) if path.is_file() => read_config_file(&path)?,
                _ => ConfigFile::default(),
            },
        };

        let from_env = |key: &str| env(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        let db_path = match overrides
            .db_path
            .clone()
            .or_else(|| from_env(DB_ENV))
            .or(file.db_path)
        {
            Some(path) => path,
            None => data_dir(&env)?.join("journal.db"),
        };

        let wiki_dir = match overrides
            .wiki_dir
            .clone()
            .or_else(|| from_env(WIKI_DIR_ENV))
            .or(file.wiki_dir)
        {
            Some(path) => path,
            None => data_dir(&env)?.join("wiki"),
        };

        debug!(db = %db_path.display(), wiki = %wiki_dir.display(), "Resolved configuration");
        Ok(Self { db_path, wiki_dir })
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn home<F: Fn(&str) -> Option<String>>(env: &F) -> Option<PathBuf> {
    env("HOME").filter(|h| !h.is_empty()).map(PathBuf::from)
}

/// `$XDG_CONFIG_HOME/jwiki/config.yaml`, falling back to `~/.config`.
fn default_config_path<F: Fn(&str) -> Option<String>>(env: &F) -> Option<PathBuf> {
    let base = env("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home(env).map(|h| h.join(".config")))?;
    Some(base.join(APP_DIR).join("config.yaml"))
}

/// `$XDG_DATA_HOME/jwiki`, falling back to `~/.local/share`.
fn data_dir<F: Fn(&str) -> Option<String>>(env: &F) -> Result<PathBuf, ConfigError> {
    let base = env("XDG_DATA_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home(env).map(|h| h.join(".local/share")))
        .ok_or(ConfigError::NoHome)?;
    Ok(base.join(APP_DIR))
}

/// Create the database's parent directory if it does not exist yet.
pub fn ensure_parent(path: &Path) -> Result<(), ConfigError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => match fs::create_dir_all(parent) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(source) => Err(ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            }),
        },
        _ => Ok(()),
    }
}
