//! Installed kegs and their resolution.
//!
//! A rack (`<cellar>/<name>`) holds one directory per installed version; each
//! of those is a keg. Resolving a name picks exactly one keg, preferring in
//! order:
//!
//! ```text
//! opt/<name> symlink → LinkedKegs/<name> symlink → sole version dir → formula prefix
//! ```
//!
//! and fails with a [`KegError`] when nothing, or too much, is installed.

mod error;
mod resolver;

pub use error::KegError;
pub use resolver::{resolve_kegs, KegLayout, KegResolver};

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One installed version directory of a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Keg {
    name: String,
    path: PathBuf,
}

impl Keg {
    /// Create a keg for `name` at `path`.
    ///
    /// The path is canonicalized, so a symlink yields its target.
    pub fn new(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, KegError> {
        let path = path.as_ref();
        let path = fs::canonicalize(path).map_err(|e| KegError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if !path.is_dir() || path.file_name().is_none() {
            return Err(KegError::InvalidKeg { path });
        }

        Ok(Self {
            name: name.into(),
            path,
        })
    }

    /// Canonical package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute keg directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Installed version (the keg directory's name).
    pub fn version(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Rack holding this keg.
    pub fn rack(&self) -> Option<&Path> {
        self.path.parent()
    }
}
