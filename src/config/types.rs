use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where installed packages and their symlinks live.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Formula definitions keyed by canonical name.
    #[serde(default)]
    pub formulae: HashMap<String, FormulaDef>,
    /// Alias → canonical formula name.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

/// Install layout on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Installation prefix; `opt/` lives directly beneath it (default: /usr/local).
    #[serde(default = "default_prefix")]
    pub prefix: PathBuf,
    /// Root holding one rack per package (default: `<prefix>/Cellar`).
    #[serde(default)]
    pub cellar: Option<PathBuf>,
    /// Library directory holding `LinkedKegs/` (default: `<prefix>/Library`).
    #[serde(default)]
    pub library: Option<PathBuf>,
}

/// A formula definition: one version per spec variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaDef {
    /// Stable version.
    pub version: String,
    /// Development version, if the formula has one.
    #[serde(default)]
    pub devel: Option<String>,
    /// Whether the formula can be built from the upstream tip.
    #[serde(default)]
    pub head: bool,
}

fn default_prefix() -> PathBuf {
    PathBuf::from("/usr/local")
}

impl LayoutConfig {
    pub fn cellar(&self) -> PathBuf {
        self.cellar
            .clone()
            .unwrap_or_else(|| self.prefix.join("Cellar"))
    }

    pub fn library(&self) -> PathBuf {
        self.library
            .clone()
            .unwrap_or_else(|| self.prefix.join("Library"))
    }

    pub fn opt_dir(&self) -> PathBuf {
        self.prefix.join("opt")
    }

    pub fn linked_kegs_dir(&self) -> PathBuf {
        self.library().join("LinkedKegs")
    }
}

impl FormulaDef {
    /// A formula with only a stable version.
    pub fn stable(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            devel: None,
            head: false,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            cellar: None,
            library: None,
        }
    }
}
