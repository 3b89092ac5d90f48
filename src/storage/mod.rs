use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

const APP_DATA_DIR: &str = "cat-gallery";
const SLOT_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// A durable string slot addressed by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Stores each slot as `<key>.json` inside one data directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    pub const fn with_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn with_default_dir() -> StorageResult<Self> {
        let xdg_data_home = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from);
        let home = std::env::var_os("HOME").map(PathBuf::from);
        Ok(Self::with_dir(default_data_dir(
            xdg_data_home.as_deref(),
            home.as_deref(),
        )?))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn slot_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        let mut path = self.data_dir.clone();
        path.push(format!("{key}.{SLOT_EXTENSION}"));
        Ok(path)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.data_dir)?;

        let staging = path.with_extension(format!("{SLOT_EXTENSION}.tmp"));
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        tracing::trace!(path = %path.display(), bytes = value.len(), "storage slot written");
        Ok(())
    }
}

/// In-memory slots. Clones share the same backing map, so a clone can stand
/// in for "the same storage after a restart".
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

pub(crate) fn default_data_dir(
    xdg_data_home: Option<&Path>,
    home: Option<&Path>,
) -> StorageResult<PathBuf> {
    let mut path = match xdg_data_home.filter(|path| !path.as_os_str().is_empty()) {
        Some(xdg) => xdg.to_path_buf(),
        None => {
            let home = home.ok_or(StorageError::MissingHomeDirectory)?;
            home.join(".local").join("share")
        }
    };
    path.push(APP_DATA_DIR);
    Ok(path)
}
