//! Spec variants — which source revision a package name refers to.

use serde::Serialize;
use std::fmt;

/// Which version variant of a formula a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecVariant {
    /// Released version (the default).
    Stable,
    /// Development pre-release, selected with `--devel`.
    Devel,
    /// Upstream tip, selected with `--HEAD`.
    Head,
}

impl SpecVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecVariant::Stable => "stable",
            SpecVariant::Devel => "devel",
            SpecVariant::Head => "head",
        }
    }
}

impl fmt::Display for SpecVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
