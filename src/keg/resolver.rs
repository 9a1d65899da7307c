use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::formulary::{FormulaError, Formulary};
use crate::keg::{Keg, KegError};

/// Directories consulted during keg resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KegLayout {
    /// Root holding one rack per package.
    pub cellar: PathBuf,
    /// `opt/` symlink store.
    pub opt_dir: PathBuf,
    /// `LinkedKegs/` symlink store.
    pub linked_kegs_dir: PathBuf,
}

impl From<&LayoutConfig> for KegLayout {
    fn from(layout: &LayoutConfig) -> Self {
        Self {
            cellar: layout.cellar(),
            opt_dir: layout.opt_dir(),
            linked_kegs_dir: layout.linked_kegs_dir(),
        }
    }
}

/// Maps package names to installed kegs.
pub struct KegResolver<'a> {
    layout: KegLayout,
    formulary: &'a dyn Formulary,
}

impl<'a> KegResolver<'a> {
    pub fn new(layout: KegLayout, formulary: &'a dyn Formulary) -> Self {
        Self { layout, formulary }
    }

    /// Resolve one name to exactly one installed keg.
    pub fn resolve(&self, name: &str) -> Result<Keg, KegError> {
        let canonical = self.formulary.canonical_name(name);
        let rack = self.layout.cellar.join(&canonical);

        // A rack name is a single path component
        if matches!(canonical.as_str(), "" | "." | "..") || canonical.contains('/') {
            return Err(KegError::NoSuchKeg {
                name: canonical,
                rack,
            });
        }

        let versions = rack_subdirs(&rack)?;

        if versions.is_empty() {
            return Err(KegError::NoSuchKeg {
                name: canonical,
                rack,
            });
        }

        let opt_prefix = self.layout.opt_dir.join(&canonical);
        if is_symlinked_dir(&opt_prefix) {
            tracing::debug!("{}: using opt link {}", canonical, opt_prefix.display());
            return Keg::new(canonical, opt_prefix);
        }

        let linked_keg_ref = self.layout.linked_kegs_dir.join(&canonical);
        if is_symlinked_dir(&linked_keg_ref) {
            tracing::debug!("{}: using linked keg {}", canonical, linked_keg_ref.display());
            return Keg::new(canonical, linked_keg_ref);
        }

        if let [only] = versions.as_slice() {
            tracing::debug!("{}: single version {}", canonical, only.display());
            return Keg::new(canonical, only);
        }

        let formula = if name.contains('/') {
            self.formulary.factory(name, None)
        } else {
            self.formulary.from_rack(&rack, None)
        };

        match formula {
            Ok(formula) if formula.prefix.is_dir() => {
                tracing::debug!("{}: formula prefix {}", canonical, formula.prefix.display());
                Keg::new(canonical, &formula.prefix)
            }
            Ok(formula) => {
                tracing::debug!(
                    "{}: formula prefix {} is not installed",
                    canonical,
                    formula.prefix.display()
                );
                Err(KegError::MultipleVersionsInstalled {
                    name: canonical,
                    versions,
                })
            }
            Err(FormulaError::Unavailable { .. }) => {
                tracing::warn!("{}: no formula to disambiguate {}", canonical, rack.display());
                Err(KegError::DefinitionUnavailable { rack })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Resolve every name, stopping at the first failure.
pub fn resolve_kegs<S: AsRef<str>>(
    names: &[S],
    resolver: &KegResolver<'_>,
) -> Result<Vec<Keg>, KegError> {
    names
        .iter()
        .map(|name| resolver.resolve(name.as_ref()))
        .collect()
}

/// Version directories in a rack, sorted. A missing rack has none.
fn rack_subdirs(rack: &Path) -> Result<Vec<PathBuf>, KegError> {
    if !rack.is_dir() {
        return Ok(Vec::new());
    }

    let io_err = |e: std::io::Error| KegError::Io {
        path: rack.to_path_buf(),
        source: e,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(rack).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// True when `path` is itself a symlink and its target is a directory.
fn is_symlinked_dir(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
        && path.is_dir()
}
