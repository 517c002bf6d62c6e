//! Dataset Sources
//!
//! Where the cache reads raw dataset bytes from.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// == Source Reader ==
/// Provides the raw bytes of the dataset document.
pub trait SourceReader: Send + Sync {
    /// Reads the full document.
    fn read(&self) -> io::Result<Vec<u8>>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

// == File Source ==
/// Reads the document from a file on every call.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceReader for FileSource {
    fn read(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// == Memory Source ==
/// Serves the document from memory. The contents can be swapped at runtime,
/// which makes it handy for embedding and for exercising reloads.
#[derive(Debug, Default)]
pub struct MemorySource {
    bytes: Mutex<Vec<u8>>,
}

impl MemorySource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Mutex::new(bytes.into()),
        }
    }

    /// Replaces the document returned by subsequent reads.
    pub fn replace(&self, bytes: impl Into<Vec<u8>>) {
        let mut guard = self.bytes.lock().unwrap_or_else(|e| e.into_inner());
        *guard = bytes.into();
    }
}

impl SourceReader for MemorySource {
    fn read(&self) -> io::Result<Vec<u8>> {
        let guard = self.bytes.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
