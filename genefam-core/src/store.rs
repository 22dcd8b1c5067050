//! Directory listing, reading and writing behind one trait, so the batch
//! drivers run the same against the filesystem and against memory.

use crate::error::{BioError, BioResult};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait SeqStore: Sync {
    fn is_dir(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir`, sorted by path.
    fn list_files(&self, dir: &Path) -> BioResult<Vec<PathBuf>>;

    fn read(&self, path: &Path) -> BioResult<Vec<u8>>;

    fn create_dir_all(&self, path: &Path) -> BioResult<()>;

    /// Create or truncate `path`.
    fn write(&self, path: &Path, contents: &[u8]) -> BioResult<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FsStore;

impl SeqStore for FsStore {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> BioResult<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| BioError::path_io(dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BioError::path_io(dir, e))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn read(&self, path: &Path) -> BioResult<Vec<u8>> {
        fs::read(path).map_err(|e| BioError::path_io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> BioResult<()> {
        fs::create_dir_all(path).map_err(|e| BioError::path_io(path, e))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> BioResult<()> {
        fs::write(path, contents).map_err(|e| BioError::path_io(path, e))
    }
}

/// In-memory store. Adding a file also adds its parent directories.
#[derive(Debug, Default)]
pub struct MemStore {
    inner: Mutex<MemInner>,
}

#[derive(Debug, Default)]
struct MemInner {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemInner {
    fn add_dirs(&mut self, path: &Path) {
        for dir in path.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            self.dirs.insert(dir.to_path_buf());
        }
    }
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        self.insert_file(path, contents);
        self
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.lock().add_dirs(path.as_ref());
        self
    }

    pub fn insert_file(&self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let mut inner = self.lock();
        if let Some(parent) = path.parent() {
            inner.add_dirs(parent);
        }
        inner
            .files
            .insert(path.to_path_buf(), contents.as_ref().to_vec());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    pub fn get_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.get(path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Every file path currently stored, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().files.keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemInner> {
        // a panic while holding the lock leaves plain maps behind, still usable
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn not_found(path: &Path) -> BioError {
    BioError::path_io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
}

impl SeqStore for MemStore {
    fn is_dir(&self, path: &Path) -> bool {
        self.lock().dirs.contains(path)
    }

    fn list_files(&self, dir: &Path) -> BioResult<Vec<PathBuf>> {
        let inner = self.lock();
        if !inner.dirs.contains(dir) {
            return Err(not_found(dir));
        }
        Ok(inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn read(&self, path: &Path) -> BioResult<Vec<u8>> {
        self.lock()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn create_dir_all(&self, path: &Path) -> BioResult<()> {
        self.lock().add_dirs(path);
        Ok(())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> BioResult<()> {
        let mut inner = self.lock();
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !inner.dirs.contains(parent) => {
                Err(not_found(parent))
            }
            _ => {
                inner.files.insert(path.to_path_buf(), contents.to_vec());
                Ok(())
            }
        }
    }
}
