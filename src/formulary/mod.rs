//! Formula lookup collaborator.
//!
//! Formula definitions live outside this crate. Keg resolution and the
//! `formulae` views of [`Argv`](crate::args::Argv) only need three answers
//! from them: the canonical name behind an alias, and the expected install
//! prefix for a name (or rack) under a given spec variant.

mod table;

pub use table::TableFormulary;

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::SpecVariant;

/// A loaded formula, reduced to what argv handling needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Formula {
    /// Canonical formula name.
    pub name: String,
    /// Active spec variant.
    pub spec: SpecVariant,
    /// Version string for the active spec.
    pub version: String,
    /// Expected install prefix (`<cellar>/<name>/<version>`).
    pub prefix: PathBuf,
}

/// Errors returned by a [`Formulary`].
#[derive(Debug, Error)]
pub enum FormulaError {
    /// No definition exists for this name.
    #[error("No available formula with the name \"{name}\"")]
    Unavailable { name: String },

    /// The definition exists but lacks the requested spec.
    #[error("Formula \"{name}\" has no {spec} version")]
    SpecUnavailable { name: String, spec: SpecVariant },
}

/// Source of formula definitions.
pub trait Formulary {
    /// Resolve aliases to the canonical formula name.
    ///
    /// Unknown names pass through unchanged.
    fn canonical_name(&self, name: &str) -> String;

    /// Load a formula by name or path-qualified reference.
    ///
    /// `spec = None` means the formula's default (stable) spec.
    fn factory(&self, name: &str, spec: Option<SpecVariant>) -> Result<Formula, FormulaError>;

    /// Load the formula that owns an installed rack.
    fn from_rack(&self, rack: &Path, spec: Option<SpecVariant>) -> Result<Formula, FormulaError>;
}
