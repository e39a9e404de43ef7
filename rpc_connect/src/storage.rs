use crate::error::StorageError;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

// Constants
pub const DEFAULT_STORAGE_DIR: &str = ".rpc_connect";
pub const DEFAULT_STORAGE_NAME: &str = "storage.toml";
/// Key the last successfully used RPC address is stored under
pub const RPC_ADDRESS_KEY: &str = "RPC_ADDRESS";
/// Unix permissions for dir
#[cfg(unix)]
const STORAGE_DIR_PERMISSIONS: u32 = 0o700;

// Toml structs
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageToml {
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

/// Durable string key/value storage.
pub trait KeyValueStore {
    /// Retrieve the value stored under key, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Store value under key, overwriting whatever was there
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads back the last address written by a successful connection.
pub fn saved_address<K: KeyValueStore + ?Sized>(store: &K) -> Result<Option<String>, StorageError> {
    store.get(RPC_ADDRESS_KEY)
}

/// Default file location, e.g. ~/.rpc_connect/storage.toml
pub fn default_storage_path() -> Result<PathBuf, StorageError> {
    let mut p = dirs::home_dir().ok_or_else(|| {
        StorageError::Initialization(String::from("could not determine home directory"))
    })?;

    p.push(DEFAULT_STORAGE_DIR);
    p.push(DEFAULT_STORAGE_NAME);

    Ok(p)
}

/// File based store. Every write rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens (or creates) the store at file_path. Must include filename with ".toml" suffix.
    ///
    /// If None, the store lives at [`default_storage_path`]. Existing contents are loaded.
    ///
    /// Toml will be structured as so:
    /// [entries]
    ///     RPC_ADDRESS = "https://rpc.cosmos.network:443"
    pub fn open(file_path: Option<&Path>) -> Result<FileStore, StorageError> {
        let path = match file_path {
            Some(path) => path.to_path_buf(),
            None => default_storage_path()?,
        };

        tracing::debug!("opening key/value store at {:?}", path);

        // Verify path formatting
        if path.is_dir() {
            return Err(StorageError::Initialization(String::from(
                "Path is a dir; must be a file.",
            )));
        } else if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            return Err(StorageError::Initialization(String::from(
                "Only files with extension .toml are supported.",
            )));
        }

        if let Some(save_path) = path.parent() {
            if !save_path.as_os_str().is_empty() && !save_path.exists() {
                std::fs::create_dir_all(save_path)?;

                #[cfg(unix)]
                std::fs::set_permissions(
                    save_path,
                    std::fs::Permissions::from_mode(STORAGE_DIR_PERMISSIONS),
                )?;
            }
        }

        let mut entries = BTreeMap::new();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;

            // Possible contents is empty, check to avoid parsing errors
            if !content.trim().is_empty() {
                let toml: StorageToml =
                    toml::from_str(&content).map_err(|err| StorageError::Toml(err.to_string()))?;
                entries = toml.entries;
            }
        }

        Ok(FileStore { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let toml = StorageToml {
            entries: self.entries.clone(),
        };
        let content = toml::to_string(&toml).map_err(|err| StorageError::Toml(err.to_string()))?;

        std::fs::write(&self.path, content).map_err(|err| err.into())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());

        self.flush()
    }
}

/// In memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;

    #[assay]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();

        assert_eq!(saved_address(&store)?, None);

        store.set(RPC_ADDRESS_KEY, "http://localhost:26657")?;
        store.set(RPC_ADDRESS_KEY, "https://rpc.cosmos.network")?;

        assert_eq!(
            saved_address(&store)?,
            Some("https://rpc.cosmos.network".to_string())
        );
    }

    #[assay]
    fn file_store_rejects_bad_paths() {
        // assay runs every test inside its own temp dir
        let dir = std::env::current_dir()?.join("store_dir.toml");
        std::fs::create_dir_all(&dir)?;

        assert!(matches!(
            FileStore::open(Some(dir.as_path())),
            Err(StorageError::Initialization(_))
        ));
        assert!(matches!(
            FileStore::open(Some(Path::new("storage.json"))),
            Err(StorageError::Initialization(_))
        ));
    }

    #[assay]
    fn file_store_creates_missing_dirs() {
        let path = std::env::current_dir()?.join("nested/dir/storage.toml");
        let mut store = FileStore::open(Some(path.as_path()))?;

        assert!(path.parent().unwrap().exists());
        assert!(!path.exists());

        store.set(RPC_ADDRESS_KEY, "http://localhost:26657")?;

        assert!(path.exists());
        #[cfg(unix)]
        assert_eq!(
            std::fs::metadata(path.parent().unwrap())?.permissions().mode() & 0o777,
            STORAGE_DIR_PERMISSIONS
        );
    }

    #[assay]
    fn file_store_reads_empty_file() {
        let path = std::env::current_dir()?.join("empty.toml");
        std::fs::write(&path, "")?;

        let store = FileStore::open(Some(path.as_path()))?;

        assert_eq!(store.get(RPC_ADDRESS_KEY)?, None);
    }

    #[assay]
    fn file_store_rejects_malformed_toml() {
        let path = std::env::current_dir()?.join("broken.toml");
        std::fs::write(&path, "entries = [")?;

        assert!(matches!(
            FileStore::open(Some(path.as_path())),
            Err(StorageError::Toml(_))
        ));
    }
}
