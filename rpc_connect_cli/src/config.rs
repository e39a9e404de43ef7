//! RpcConnectCli Config
//!
//! See instructions in `commands.rs` to specify the path to your
//! application's configuration file and/or command-line options
//! for specifying it.
use crate::error::{Error, ErrorKind};
use abscissa_core::tracing::debug;
use rpc_connect::storage::{self, FileStore};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config directory, relative to the home directory
pub const DEFAULT_CONFIG_DIR: &str = ".rpc_connect";
/// Config file name
pub const DEFAULT_CONFIG_NAME: &str = "config.toml";

/// RpcConnectCli Configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct RpcConnectCliConfig {
    /// Key/value store the last connected address is saved in. Falls back
    /// to ~/.rpc_connect/storage.toml when unset.
    pub storage_path: Option<PathBuf>,
}

impl RpcConnectCliConfig {
    /// Opens the configured key/value store
    pub fn open_storage(&self) -> Result<FileStore, Error> {
        FileStore::open(self.storage_path.as_deref()).map_err(|err| err.into())
    }
}

/// Builds a config path in the users home directory
pub fn get_config_path() -> Result<PathBuf, Error> {
    let mut path = dirs::home_dir()
        .ok_or_else(|| ErrorKind::Config.context("could not determine home directory"))?;
    path.push(DEFAULT_CONFIG_DIR);
    path.push(DEFAULT_CONFIG_NAME);

    Ok(path)
}

/// Initializes the config dir and file if they do not exist. Uses the
/// default location when no path is given.
pub fn init(path: Option<&Path>) -> Result<PathBuf, Error> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => get_config_path()?,
    };

    if let Some(config_dir) = path.parent() {
        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            debug!("config directory does not exist. creating!");
            fs::create_dir_all(config_dir)?;
        }
    }
    if !path.exists() {
        debug!("creating config file with default storage path");
        let config_content = RpcConnectCliConfig {
            storage_path: Some(storage::default_storage_path()?),
        };
        let config_content = toml::to_string(&config_content)?;
        fs::write(&path, config_content)?
    }

    Ok(path)
}
