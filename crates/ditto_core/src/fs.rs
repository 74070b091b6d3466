//! Filesystem capability used by the extractor, registry and renderer.
//!
//! All disk access in the pipeline goes through [`FileSystem`] so every stage
//! can be exercised against [`MemoryFileSystem`] without touching the real
//! filesystem. Production code uses [`OsFileSystem`], a thin passthrough to
//! `std::fs`.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// The file operations the pipeline needs: read, write, ensure directories,
/// check existence. Nothing else.
pub trait FileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// In-memory filesystem for tests.
///
/// Stores file contents keyed by path. Directories are tracked only so that
/// `exists` answers honestly for paths created via `create_dir_all`; there is
/// no permission or parent-must-exist modeling, matching what the pipeline
/// actually relies on.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file, e.g. a template or a source file under test.
    pub fn seed(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    /// Contents of a previously written or seeded file.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    /// All file paths currently present, in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_roundtrip() {
        let fs = MemoryFileSystem::new();
        fs.write(Path::new("/a/b.txt"), "hello").unwrap();

        assert!(fs.exists(Path::new("/a/b.txt")));
        assert_eq!(fs.read_to_string(Path::new("/a/b.txt")).unwrap(), "hello");
        assert_eq!(fs.file_count(), 1);
    }

    #[test]
    fn test_memory_fs_missing_file_is_not_found() {
        let fs = MemoryFileSystem::new();
        let err = fs.read_to_string(Path::new("/nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_fs_tracks_directories() {
        let fs = MemoryFileSystem::new();
        assert!(!fs.exists(Path::new("/out/dir")));
        fs.create_dir_all(Path::new("/out/dir")).unwrap();
        assert!(fs.exists(Path::new("/out/dir")));
    }

    #[test]
    fn test_os_fs_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("probe.txt");
        let fs = OsFileSystem;

        fs.write(&path, "contents").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "contents");

        let nested = dir.path().join("a").join("b");
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
    }
}
