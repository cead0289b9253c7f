//! Persistence of encoded messages.
//!
//! A message store holds exactly one encoded message: writing replaces it,
//! reading returns all of it. A store with nothing in it is not an error;
//! callers get `Ok(None)` and decide how to tell the user.

use crate::error::{CoreError, CoreResult};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Backend that persists the encoded message.
pub trait MessageStore {
    /// Returns the stored message, or `None` if nothing has been stored.
    fn read(&self) -> CoreResult<Option<String>>;

    /// Replaces the stored message.
    fn write(&self, message: &str) -> CoreResult<()>;

    /// Human-readable name of the backing resource, used in messages and logs.
    fn location(&self) -> String;
}

/// Stores the message as the full contents of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMessageStore {
    path: PathBuf,
}

impl FileMessageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageStore for FileMessageStore {
    fn read(&self) -> CoreResult<Option<String>> {
        if self.path.is_dir() {
            return Err(CoreError::PathError(format!(
                "{} is a directory, not a message file",
                self.path.display()
            )));
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(strip_line_ending(&content).to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Io(e)),
        }
    }

    fn write(&self, message: &str) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CoreError::PathError(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        fs::write(&self.path, message)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-process store, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    message: Mutex<Option<String>>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Mutex::new(Some(message.into())),
        }
    }

    fn lock(&self) -> CoreResult<std::sync::MutexGuard<'_, Option<String>>> {
        self.message
            .lock()
            .map_err(|_| CoreError::OperationFailed("Message store lock poisoned".to_string()))
    }
}

impl MessageStore for MemoryMessageStore {
    fn read(&self) -> CoreResult<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn write(&self, message: &str) -> CoreResult<()> {
        *self.lock()? = Some(message.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Drops a single trailing `\n` or `\r\n` left by editors.
fn strip_line_ending(content: &str) -> &str {
    content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileMessageStore::new(dir.path().join("encrypted_msg.txt"));
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn write_then_read_returns_contents() {
        let dir = tempdir().unwrap();
        let store = FileMessageStore::new(dir.path().join("encrypted_msg.txt"));

        store.write("43,30,104").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("43,30,104"));
    }

    #[test]
    fn write_overwrites_previous_message() {
        let dir = tempdir().unwrap();
        let store = FileMessageStore::new(dir.path().join("msg.txt"));

        store.write("59,36,35,102,91").unwrap();
        store.write("43").unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "43");
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let store = FileMessageStore::new(dir.path().join("a").join("b").join("msg.txt"));

        store.write("43").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn trailing_newline_is_stripped_once() {
        assert_eq!(strip_line_ending("43,30\n"), "43,30");
        assert_eq!(strip_line_ending("43,30\r\n"), "43,30");
        assert_eq!(strip_line_ending("43,30\n\n"), "43,30\n");
        assert_eq!(strip_line_ending("43,30"), "43,30");
    }

    #[test]
    fn directory_path_is_a_path_error() {
        let dir = tempdir().unwrap();
        let store = FileMessageStore::new(dir.path());
        assert!(matches!(store.read(), Err(CoreError::PathError(_))));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryMessageStore::new();
        assert_eq!(store.read().unwrap(), None);

        store.write("98").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("98"));
        assert_eq!(store.location(), "memory");

        let seeded = MemoryMessageStore::with_message("104");
        assert_eq!(seeded.read().unwrap().as_deref(), Some("104"));
    }
}
