//! Snapshot storage providers.
//!
//! The engine never touches storage itself. A session loads a snapshot,
//! mutates the in-memory game, and saves the result; whatever implements
//! `SnapshotStore` is responsible for making each save atomic.
//!
//! - `MemoryStore`: In-process map, for tests and embedding
//! - `FileStore`: One file per game under a root directory, JSON or bincode

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::snapshot::GameSnapshot;
use crate::error::StorageError;

/// Load and save complete snapshots by game name.
pub trait SnapshotStore {
    /// Load the named game. `StorageError::NotFound` if it was never saved.
    fn load(&self, name: &str) -> Result<GameSnapshot, StorageError>;

    /// Replace the named game with `snapshot`.
    fn save(&mut self, name: &str, snapshot: &GameSnapshot) -> Result<(), StorageError>;

    /// Has the named game been saved?
    fn exists(&self, name: &str) -> bool;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    games: FxHashMap<String, GameSnapshot>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, name: &str) -> Result<GameSnapshot, StorageError> {
        self.games
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn save(&mut self, name: &str, snapshot: &GameSnapshot) -> Result<(), StorageError> {
        self.games.insert(name.to_string(), snapshot.clone());
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.games.contains_key(name)
    }
}

/// On-disk encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Pretty-printed JSON, readable and hand-editable.
    #[default]
    Json,
    /// Compact bincode.
    Bincode,
}

impl SnapshotFormat {
    fn extension(self) -> &'static str {
        match self {
            SnapshotFormat::Json => "json",
            SnapshotFormat::Bincode => "bin",
        }
    }

    fn encode(self, snapshot: &GameSnapshot) -> Result<Vec<u8>, StorageError> {
        Ok(match self {
            SnapshotFormat::Json => serde_json::to_vec_pretty(snapshot)?,
            SnapshotFormat::Bincode => bincode::serialize(snapshot)?,
        })
    }

    fn decode(self, bytes: &[u8]) -> Result<GameSnapshot, StorageError> {
        Ok(match self {
            SnapshotFormat::Json => serde_json::from_slice(bytes)?,
            SnapshotFormat::Bincode => bincode::deserialize(bytes)?,
        })
    }
}

/// One file per game: `<root>/<name>.<ext>`.
///
/// Saves write a sibling temp file and rename it into place, so a reader
/// never sees a half-written snapshot. There is no cross-process lock.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
    format: SnapshotFormat,
}

impl FileStore {
    /// Store JSON files under `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: SnapshotFormat::Json,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: SnapshotFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the named game's file.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StorageError> {
        if !is_safe_name(name) {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(format!("{name}.{}", self.format.extension())))
    }
}

/// Game names become file names; keep them to a single path component.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

impl SnapshotStore for FileStore {
    fn load(&self, name: &str) -> Result<GameSnapshot, StorageError> {
        let path = self.path_for(name)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        log::debug!("loaded {}", path.display());
        self.format.decode(&bytes)
    }

    fn save(&mut self, name: &str, snapshot: &GameSnapshot) -> Result<(), StorageError> {
        let path = self.path_for(name)?;
        let bytes = self.format.encode(snapshot)?;

        fs::create_dir_all(&self.root)?;
        let tmp = path.with_extension(format!("{}.tmp", self.format.extension()));
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;

        log::debug!("saved {}", path.display());
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_ok_and(|p| p.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::crazy_eights::GameBuilder;

    fn snapshot() -> GameSnapshot {
        GameBuilder::new()
            .players(["alice", "bob"])
            .seed(5)
            .build()
            .unwrap()
            .to_snapshot()
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(!store.exists("g"));
        assert!(matches!(store.load("g"), Err(StorageError::NotFound(_))));

        let snap = snapshot();
        store.save("g", &snap).unwrap();
        assert!(store.exists("g"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.load("g").unwrap(), snap);
    }

    #[test]
    fn test_file_store_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("games"));
        let snap = snapshot();

        assert!(!store.exists("table1"));
        store.save("table1", &snap).unwrap();

        assert!(store.exists("table1"));
        assert!(dir.path().join("games/table1.json").is_file());
        assert!(!dir.path().join("games/table1.json.tmp").exists());
        assert_eq!(store.load("table1").unwrap(), snap);
    }

    #[test]
    fn test_file_store_bincode() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path()).with_format(SnapshotFormat::Bincode);
        let snap = snapshot();

        store.save("table1", &snap).unwrap();
        assert!(dir.path().join("table1.bin").is_file());
        assert_eq!(store.load("table1").unwrap(), snap);
    }

    #[test]
    fn test_file_store_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        let mut snap = snapshot();
        store.save("g", &snap).unwrap();
        snap.current_player = "bob".to_string();
        store.save("g", &snap).unwrap();

        assert_eq!(store.load("g").unwrap().current_player, "bob");
    }

    #[test]
    fn test_file_store_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(store.load("nope"), Err(StorageError::NotFound(name)) if name == "nope"));
    }

    #[test]
    fn test_file_store_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        fs::write(dir.path().join("bad.json"), b"{ not json").unwrap();
        assert!(matches!(store.load("bad"), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_file_store_rejects_path_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let snap = snapshot();

        for name in ["", "..", "a/b", "..\\x"] {
            assert!(matches!(store.save(name, &snap), Err(StorageError::InvalidName(_))));
            assert!(!store.exists(name));
        }
    }
}
