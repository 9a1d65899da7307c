//! Shared test utilities: a throwaway install prefix on disk.

#![allow(dead_code, unused_imports)]

use kegargv::config::LayoutConfig;
use kegargv::keg::KegLayout;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary prefix with `Cellar/`, `opt/` and `Library/LinkedKegs/`.
pub struct TempPrefix {
    dir: TempDir,
}

impl TempPrefix {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for sub in ["Cellar", "opt", "Library/LinkedKegs"] {
            fs::create_dir_all(dir.path().join(sub)).expect("Failed to create layout dir");
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn cellar(&self) -> PathBuf {
        self.root().join("Cellar")
    }

    pub fn rack(&self, name: &str) -> PathBuf {
        self.cellar().join(name)
    }

    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            prefix: self.root().to_path_buf(),
            cellar: None,
            library: None,
        }
    }

    pub fn layout(&self) -> KegLayout {
        KegLayout::from(&self.layout_config())
    }

    /// Create `Cellar/<name>/<version>` and return it.
    pub fn install(&self, name: &str, version: &str) -> PathBuf {
        let keg = self.rack(name).join(version);
        fs::create_dir_all(keg.join("bin")).expect("Failed to create keg");
        keg
    }

    /// Point `opt/<name>` at an installed version, relative like the real thing.
    #[cfg(unix)]
    pub fn opt_link(&self, name: &str, version: &str) {
        let target = PathBuf::from("../Cellar").join(name).join(version);
        std::os::unix::fs::symlink(target, self.root().join("opt").join(name))
            .expect("Failed to create opt link");
    }

    /// Point `Library/LinkedKegs/<name>` at an installed version.
    #[cfg(unix)]
    pub fn linked_link(&self, name: &str, version: &str) {
        std::os::unix::fs::symlink(
            self.rack(name).join(version),
            self.root().join("Library/LinkedKegs").join(name),
        )
        .expect("Failed to create linked keg ref");
    }

    /// Write a config file pointing at this prefix, with extra TOML appended.
    pub fn write_config(&self, extra: &str) -> PathBuf {
        let path = self.root().join("config.toml");
        let content = format!(
            "[layout]\nprefix = \"{}\"\n\n{}",
            self.root().display(),
            extra
        );
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}

/// Canonical form of an expected keg path.
pub fn real(path: &Path) -> PathBuf {
    fs::canonicalize(path).expect("Failed to canonicalize")
}

pub fn raw_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
