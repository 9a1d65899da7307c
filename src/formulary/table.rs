//! Config-backed formulary.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::args::SpecVariant;
use crate::config::{Config, FormulaDef};
use crate::formulary::{Formula, FormulaError, Formulary};

/// A [`Formulary`] backed by the `[formulae]` and `[aliases]` config tables.
#[derive(Debug, Clone)]
pub struct TableFormulary {
    cellar: PathBuf,
    formulae: HashMap<String, FormulaDef>,
    aliases: HashMap<String, String>,
}

impl TableFormulary {
    /// Create an empty formulary rooted at `cellar`.
    pub fn new(cellar: impl Into<PathBuf>) -> Self {
        Self {
            cellar: cellar.into(),
            formulae: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Build from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            cellar: config.layout.cellar(),
            formulae: config.formulae.clone(),
            aliases: config.aliases.clone(),
        }
    }

    /// Declare a formula.
    pub fn with_formula(mut self, name: impl Into<String>, def: FormulaDef) -> Self {
        self.formulae.insert(name.into(), def);
        self
    }

    /// Declare an alias for a formula.
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }

    fn load(&self, name: &str, spec: Option<SpecVariant>) -> Result<Formula, FormulaError> {
        let def = self
            .formulae
            .get(name)
            .ok_or_else(|| FormulaError::Unavailable {
                name: name.to_string(),
            })?;

        let spec = spec.unwrap_or(SpecVariant::Stable);
        let version = match spec {
            SpecVariant::Stable => Some(def.version.clone()),
            SpecVariant::Devel => def.devel.clone(),
            SpecVariant::Head => def.head.then(|| "HEAD".to_string()),
        }
        .ok_or_else(|| FormulaError::SpecUnavailable {
            name: name.to_string(),
            spec,
        })?;

        Ok(Formula {
            name: name.to_string(),
            spec,
            prefix: self.cellar.join(name).join(&version),
            version,
        })
    }
}

/// Name a path-qualified reference refers to.
///
/// `user/tap/foo`, `./Formula/foo.rb` and `foo/` all name `foo`.
fn reference_stem(reference: &str) -> &str {
    let trimmed = reference.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    last.strip_suffix(".rb").unwrap_or(last)
}

impl Formulary for TableFormulary {
    fn canonical_name(&self, name: &str) -> String {
        let stem = if name.contains('/') {
            reference_stem(name)
        } else {
            name
        };
        match self.aliases.get(stem) {
            Some(target) => target.clone(),
            None if name.contains('/') => stem.to_string(),
            None => name.to_string(),
        }
    }

    fn factory(&self, name: &str, spec: Option<SpecVariant>) -> Result<Formula, FormulaError> {
        self.load(&self.canonical_name(name), spec)
    }

    fn from_rack(&self, rack: &Path, spec: Option<SpecVariant>) -> Result<Formula, FormulaError> {
        let name = rack
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| FormulaError::Unavailable {
                name: rack.display().to_string(),
            })?;
        self.load(name, spec)
    }
}
