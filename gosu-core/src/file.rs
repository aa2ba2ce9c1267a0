use std::{
    cell::RefCell,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Failure of a file-system operation, carrying the path it was attempted on.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to create directory '{}'", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}'", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Path of the operation that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::CreateDirectory { path, .. } | Self::WriteFile { path, .. } => path,
        }
    }
}

/// Destination the generator writes into.
///
/// Operations are issued one at a time and each completes before the next
/// is issued.
pub trait FileSystem {
    /// Create a directory. An already existing directory is not an error.
    fn create_directory(&self, path: &Path) -> Result<(), FsError>;

    /// Write `content` to `path`, replacing any existing file.
    fn write_text_file(&self, path: &Path, content: &str) -> Result<(), FsError>;
}

/// The local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn create_directory(&self, path: &Path) -> Result<(), FsError> {
        std::fs::create_dir_all(path).map_err(|source| FsError::CreateDirectory {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "created directory");
        Ok(())
    }

    fn write_text_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        std::fs::write(path, content).map_err(|source| FsError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

/// One recorded operation of a [`MemoryFileSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Directory(PathBuf),
    File { path: PathBuf, content: String },
}

impl Entry {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::File { path, .. } => path,
        }
    }
}

/// Records operations in memory instead of touching the disk.
///
/// Used for dry runs and tests. A path registered with [`fail_on`] makes the
/// matching operation fail with [`io::ErrorKind::PermissionDenied`].
///
/// [`fail_on`]: MemoryFileSystem::fail_on
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    entries: RefCell<Vec<Entry>>,
    fail_on: Vec<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any operation on `path` fail.
    pub fn fail_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.fail_on.push(path.into());
        self
    }

    /// Operations recorded so far, in issue order.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    /// Files written so far, in issue order.
    pub fn files(&self) -> Vec<(PathBuf, String)> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Entry::File { path, content } => Some((path.clone(), content.clone())),
                Entry::Directory(_) => None,
            })
            .collect()
    }

    /// Content of the file written at `path`, if any.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = path.as_ref();
        self.entries.borrow().iter().rev().find_map(|e| match e {
            Entry::File { path: p, content } if p == path => Some(content.clone()),
            _ => None,
        })
    }

    fn check(&self, path: &Path) -> io::Result<()> {
        if self.fail_on.iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("refusing to touch {}", path.display()),
            ));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFileSystem {
    fn create_directory(&self, path: &Path) -> Result<(), FsError> {
        self.check(path).map_err(|source| FsError::CreateDirectory {
            path: path.to_path_buf(),
            source,
        })?;
        self.entries
            .borrow_mut()
            .push(Entry::Directory(path.to_path_buf()));
        Ok(())
    }

    fn write_text_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        self.check(path).map_err(|source| FsError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.entries.borrow_mut().push(Entry::File {
            path: path.to_path_buf(),
            content: content.to_string(),
        });
        Ok(())
    }
}
