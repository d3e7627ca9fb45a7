//! Project directory model
//!
//! Wraps the operator-supplied project root and implements the ordered
//! subdirectory search used by both the request router and the bundler.

use std::io;
use std::path::{Path, PathBuf};

/// Subdirectories consulted when resolving a requested file, in priority
/// order: the first entry containing the file wins. The bundler walks the
/// same list, so entries copied from later subdirectories overwrite
/// earlier ones.
pub const SEARCH_ORDER: [&str; 3] = ["includes", "public", "src"];

/// Subdirectory holding the site entrypoint.
pub const ENTRY_DIR: &str = "public";

/// File served for requests to the site root.
pub const ENTRY_FILE: &str = "index.html";

/// A validated project root directory.
#[derive(Debug, Clone)]
pub struct ProjectRoot {
    root: PathBuf,
}

impl ProjectRoot {
    /// Validate and wrap the directory supplied on the command line.
    pub fn open(path: &Path) -> io::Result<Self> {
        if path.is_dir() {
            Ok(Self {
                root: path.to_path_buf(),
            })
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{}' is not a valid directory", path.display()),
            ))
        }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Base name of the project directory, used to derive the default
    /// build output name (`build-<basename>`).
    pub fn basename(&self) -> String {
        let canonical = self
            .root
            .canonicalize()
            .unwrap_or_else(|_| self.root.clone());
        canonical.file_name().map_or_else(
            || "project".to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// Path of one search-order subdirectory under the root.
    pub fn subdir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Path of the file served at the site root.
    pub fn entrypoint(&self) -> PathBuf {
        self.root.join(ENTRY_DIR).join(ENTRY_FILE)
    }

    /// First existing match for `relative` across the search order.
    pub fn resolve(&self, relative: &str) -> Option<PathBuf> {
        for sub in SEARCH_ORDER {
            let candidate = self.root.join(sub).join(relative);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }
}
