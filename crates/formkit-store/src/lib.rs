#![forbid(unsafe_code)]

//! Explicit key-value preference storage.
//!
//! A [`KeyValueStore`] holds JSON values by string key; [`Preference`]
//! layers a typed default on top of one key. The store is always passed in
//! by the caller rather than living in a process-global registry, so tests
//! and hosts choose between [`MemoryStore`] and the file-backed
//! [`FileStore`].
//!
//! # Example
//!
//! ```rust
//! use formkit_store::{MemoryStore, Preference};
//!
//! let mut store = MemoryStore::new();
//! let volume = Preference::new("volume", 50u32);
//!
//! assert_eq!(volume.get(&store), 50);
//! volume.set(&mut store, &80).unwrap();
//! assert_eq!(volume.get(&store), 80);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Storage errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Filesystem failure while reading or writing the backing file.
    Io(String),
    /// The backing file exists but does not parse as a JSON object.
    Parse(String),
    /// A value could not be encoded to JSON.
    Encode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "store i/o failed: {msg}"),
            Self::Parse(msg) => write!(f, "store file is not valid json: {msg}"),
            Self::Encode(msg) => write!(f, "value failed to encode: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

// ---------------------------------------------------------------------------
// KeyValueStore
// ---------------------------------------------------------------------------

/// A mutable mapping from string keys to JSON values.
pub trait KeyValueStore {
    /// Look up the value stored under `key`.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value);

    /// Remove the value under `key`. Returns `true` if one was present.
    fn remove(&mut self, key: &str) -> bool;

    /// Whether a value is stored under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// An in-memory store, the default for tests and ephemeral hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// A store backed by a single JSON-object file.
///
/// Entries live in memory; [`FileStore::flush`] persists them. Opening a
/// path with no file yields an empty store, while an unreadable or
/// unparseable file is an error rather than silent data loss.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, Value>,
}

impl FileStore {
    /// Open a store backed by `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => {
                serde_json::from_str(&text).map_err(|err| StoreError::Parse(err.to_string()))?
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };
        Ok(Self { path, entries })
    }

    /// Persist the current entries to the backing file.
    pub fn flush(&self) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| StoreError::Encode(err.to_string()))?;
        fs::write(&self.path, text).map_err(|err| StoreError::Io(err.to_string()))
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

// ---------------------------------------------------------------------------
// Preference
// ---------------------------------------------------------------------------

/// A typed preference: one key plus the default returned when the stored
/// value is missing or does not decode.
#[derive(Debug, Clone)]
pub struct Preference<T> {
    key: String,
    default: T,
}

impl<T> Preference<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Create a preference for `key` with a fallback `default`.
    pub fn new(key: impl Into<String>, default: T) -> Self {
        Self {
            key: key.into(),
            default,
        }
    }

    /// The preference key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored value.
    ///
    /// Falls back to the default when the key is missing or the stored
    /// value does not decode as `T`.
    pub fn get(&self, store: &dyn KeyValueStore) -> T {
        store
            .get(&self.key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_else(|| self.default.clone())
    }

    /// Encode and store a value.
    pub fn set(&self, store: &mut dyn KeyValueStore, value: &T) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_value(value).map_err(|err| StoreError::Encode(err.to_string()))?;
        store.set(&self.key, encoded);
        Ok(())
    }

    /// Remove the stored value, reverting reads to the default.
    pub fn clear(&self, store: &mut dyn KeyValueStore) -> bool {
        store.remove(&self.key)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
