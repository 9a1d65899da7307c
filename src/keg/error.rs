use std::path::PathBuf;
use thiserror::Error;

use crate::formulary::FormulaError;

/// Errors that can occur while resolving a name to an installed keg.
#[derive(Debug, Error)]
pub enum KegError {
    /// Nothing is installed under this name.
    #[error("No such keg: {rack}")]
    NoSuchKeg { name: String, rack: PathBuf },

    /// Several versions are installed and nothing says which one is meant.
    #[error("{name} has multiple installed versions")]
    MultipleVersionsInstalled { name: String, versions: Vec<PathBuf> },

    /// Several versions are installed and the formula definition that could
    /// have picked one is gone.
    #[error(
        "Multiple kegs installed to {rack}\nHowever we don't know which one you refer to.\nPlease delete (with rm -rf!) all but one and then try again."
    )]
    DefinitionUnavailable { rack: PathBuf },

    /// The formulary failed for a reason other than a missing definition.
    #[error(transparent)]
    Formula(#[from] FormulaError),

    /// A directory that should be a keg is not one.
    #[error("{path} is not a valid keg")]
    InvalidKeg { path: PathBuf },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KegError {
    /// Canonical package name the error refers to, when known.
    pub fn name(&self) -> Option<&str> {
        match self {
            KegError::NoSuchKeg { name, .. } | KegError::MultipleVersionsInstalled { name, .. } => {
                Some(name)
            }
            KegError::Formula(FormulaError::Unavailable { name })
            | KegError::Formula(FormulaError::SpecUnavailable { name, .. }) => Some(name),
            KegError::DefinitionUnavailable { .. }
            | KegError::InvalidKeg { .. }
            | KegError::Io { .. } => None,
        }
    }
}
