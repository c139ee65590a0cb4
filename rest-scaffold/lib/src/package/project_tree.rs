use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, ScaffoldError};

/// The project directory tree generated files are inserted into.
///
/// Directory handles are plain paths; implementations decide where the
/// bytes actually go.
pub trait ProjectTree {
    /// Returns the subdirectory `name` of `dir` if it already exists.
    fn find_subdirectory(&self, dir: &Path, name: &str) -> Option<PathBuf>;

    /// Creates the subdirectory `name` of `dir` and returns its handle.
    fn create_subdirectory(&mut self, dir: &Path, name: &str) -> Result<PathBuf>;

    /// Returns true if a file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Writes `content` to `dir/file_name`, replacing any existing file.
    fn insert_text_file(&mut self, dir: &Path, file_name: &str, content: &str) -> Result<PathBuf>;

    /// Removes a file previously inserted with [`ProjectTree::insert_text_file`].
    fn remove_file(&mut self, path: &Path) -> Result<()>;
}

/// Resolves or creates each `/`-separated segment of `relative` under
/// `base`, returning the deepest directory.
///
/// Existing directories are reused, so repeated calls return the same
/// handle without creating anything. A `None` base propagates.
///
/// ## Errors
/// Returns an error if a missing directory cannot be created.
pub fn ensure_subdirectories<T: ProjectTree + ?Sized>(
    tree: &mut T,
    base: Option<&Path>,
    relative: &str,
) -> Result<Option<PathBuf>> {
    let Some(base) = base else {
        return Ok(None);
    };

    let mut current = base.to_path_buf();
    for segment in relative.split('/').filter(|segment| !segment.is_empty()) {
        current = match tree.find_subdirectory(&current, segment) {
            Some(existing) => existing,
            None => tree.create_subdirectory(&current, segment)?,
        };
    }

    Ok(Some(current))
}

/// A [`ProjectTree`] on the local filesystem.
///
/// Files are written atomically: the content goes to a temp file first and
/// is renamed into place.
#[derive(Debug, Clone, Default)]
pub struct FsProjectTree;

impl FsProjectTree {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectTree for FsProjectTree {
    fn find_subdirectory(&self, dir: &Path, name: &str) -> Option<PathBuf> {
        let candidate = dir.join(name);
        candidate.is_dir().then_some(candidate)
    }

    fn create_subdirectory(&mut self, dir: &Path, name: &str) -> Result<PathBuf> {
        let path = dir.join(name);
        fs::create_dir(&path).map_err(|source| ScaffoldError::CreateDirectory {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "created directory");
        Ok(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn insert_text_file(&mut self, dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = dir.join(file_name);
        write_atomic(&path, content)?;
        trace!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(path)
    }

    fn remove_file(&mut self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|source| ScaffoldError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Writes content to a file atomically using temp file + rename.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|source| ScaffoldError::Write {
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        ScaffoldError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// An in-memory [`ProjectTree`], used for dry runs and tests.
///
/// It can be seeded with existing directories and files to mimic a real
/// project.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectTree {
    directories: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    created_directories: usize,
}

impl MemoryProjectTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `dir` and all of its ancestors as existing.
    pub fn with_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        for ancestor in dir.as_ref().ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.directories.insert(ancestor.to_path_buf());
            }
        }
        self
    }

    /// Seeds a file, creating its parent directories.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self = self.with_directory(parent);
        }
        self.files.insert(path.to_path_buf(), content.into());
        self
    }

    pub fn file(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files
            .iter()
            .map(|(path, content)| (path.as_path(), content.as_str()))
    }

    pub fn has_directory(&self, dir: &Path) -> bool {
        self.directories.contains(dir)
    }

    /// Number of directories created through [`ProjectTree::create_subdirectory`].
    pub fn created_directories(&self) -> usize {
        self.created_directories
    }
}

impl ProjectTree for MemoryProjectTree {
    fn find_subdirectory(&self, dir: &Path, name: &str) -> Option<PathBuf> {
        let candidate = dir.join(name);
        self.directories.contains(&candidate).then_some(candidate)
    }

    fn create_subdirectory(&mut self, dir: &Path, name: &str) -> Result<PathBuf> {
        let path = dir.join(name);
        self.directories.insert(path.clone());
        self.created_directories += 1;
        Ok(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn insert_text_file(&mut self, dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = dir.join(file_name);
        self.files.insert(path.clone(), content.to_string());
        Ok(path)
    }

    fn remove_file(&mut self, path: &Path) -> Result<()> {
        self.files.remove(path);
        Ok(())
    }
}
