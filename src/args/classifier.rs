//! Argument classifier — raw tokens → options, named targets, predicates.

use std::cell::OnceCell;
use std::path::Path;

use crate::args::env_snapshot::EnvSnapshot;
use crate::args::registry::Flag;
use crate::args::spec::SpecVariant;
use crate::formulary::{Formula, FormulaError, Formulary};
use crate::keg::{resolve_kegs, Keg, KegError, KegResolver};

/// A token that is not an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArg {
    /// As typed.
    pub raw: String,
    /// Lower-cased, unless the token is a path or URL.
    pub normalized: String,
}

impl NamedArg {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = if is_path(&raw) {
            raw.clone()
        } else {
            raw.to_lowercase()
        };
        Self { raw, normalized }
    }

    /// Paths, URLs and tap-qualified names contain a separator.
    pub fn is_path(&self) -> bool {
        is_path(&self.raw)
    }
}

/// Derived views over an immutable command line.
///
/// Views are computed on first access and cached; the token list never
/// changes after construction.
#[derive(Debug)]
pub struct Argv {
    tokens: Vec<String>,
    env: EnvSnapshot,
    options: OnceCell<Vec<String>>,
    named: OnceCell<Vec<String>>,
    unique_named: OnceCell<Vec<NamedArg>>,
}

/// Classify raw tokens.
pub fn classify(tokens: &[String], env: EnvSnapshot) -> Argv {
    Argv::new(tokens.to_vec(), env)
}

impl Argv {
    pub fn new(tokens: Vec<String>, env: EnvSnapshot) -> Self {
        Self {
            tokens,
            env,
            options: OnceCell::new(),
            named: OnceCell::new(),
            unique_named: OnceCell::new(),
        }
    }

    /// Tokens beginning with a dash, in order.
    pub fn options(&self) -> &[String] {
        self.options.get_or_init(|| {
            self.tokens
                .iter()
                .filter(|t| t.starts_with('-'))
                .cloned()
                .collect()
        })
    }

    /// Tokens beginning with two dashes.
    pub fn flags_only(&self) -> Vec<&str> {
        self.options()
            .iter()
            .filter(|t| t.starts_with("--"))
            .map(String::as_str)
            .collect()
    }

    /// Every non-option token, as typed, duplicates included.
    pub fn named(&self) -> &[String] {
        self.named.get_or_init(|| {
            self.tokens
                .iter()
                .filter(|t| !t.starts_with('-'))
                .cloned()
                .collect()
        })
    }

    /// Named targets deduplicated by normalized value, first occurrence wins.
    pub fn named_args(&self) -> &[NamedArg] {
        self.unique_named.get_or_init(|| {
            let mut unique: Vec<NamedArg> = Vec::new();
            for raw in self.named() {
                let arg = NamedArg::new(raw.as_str());
                if !unique.iter().any(|u| u.normalized == arg.normalized) {
                    unique.push(arg);
                }
            }
            unique
        })
    }

    /// Normalized values of [`Argv::named_args`].
    pub fn downcased_unique_named(&self) -> Vec<&str> {
        self.named_args()
            .iter()
            .map(|a| a.normalized.as_str())
            .collect()
    }

    /// Exact token presence.
    pub fn include(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// The token following the first occurrence of `token`.
    pub fn value_after(&self, token: &str) -> Option<&str> {
        let pos = self.tokens.iter().position(|t| t == token)?;
        self.tokens.get(pos + 1).map(String::as_str)
    }

    /// Single-character switch inside a short option group.
    ///
    /// `foo -ns -i --bar` has three switches: n, s and i.
    pub fn switch(&self, c: char) -> bool {
        self.options()
            .iter()
            .any(|arg| arg.chars().nth(1) != Some('-') && arg.contains(c))
    }

    /// Long flag present, or its first letter present as a switch.
    pub fn flag(&self, long: &str) -> bool {
        if self.options().iter().any(|t| t == long) {
            return true;
        }
        match long.strip_prefix("--").and_then(|rest| rest.chars().next()) {
            Some(c) => self.switch(c),
            None => false,
        }
    }

    /// Value of the first `--key=value` token.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.tokens.iter().find_map(|t| {
            t.strip_prefix("--")?
                .strip_prefix(key)?
                .strip_prefix('=')
                .filter(|v| !v.is_empty())
        })
    }

    /// Answer a registry predicate: long token, short switch, or env var.
    pub fn is(&self, flag: Flag) -> bool {
        let def = flag.def();
        self.include(def.long)
            || def.short.is_some_and(|c| self.switch(c))
            || def.env.iter().any(|var| self.env.is_set(var))
    }

    /// Neither `--HEAD` nor `--devel`.
    pub fn build_stable(&self) -> bool {
        !(self.is(Flag::BuildHead) || self.is(Flag::BuildDevel))
    }

    /// Requested spec variant; `--HEAD` wins over `--devel`.
    pub fn build_spec(&self, default: SpecVariant) -> SpecVariant {
        self.spec_or(Some(default)).unwrap_or(default)
    }

    /// Like [`Argv::build_spec`] but with no variant when none was requested.
    pub fn spec_or(&self, default: Option<SpecVariant>) -> Option<SpecVariant> {
        if self.include("--HEAD") {
            Some(SpecVariant::Head)
        } else if self.include("--devel") {
            Some(SpecVariant::Devel)
        } else {
            default
        }
    }

    pub fn bottle_arch(&self) -> Option<&str> {
        self.value("bottle-arch")
    }

    /// Named targets that refer to tapped casks, not formulae.
    pub fn casks(&self) -> Vec<&str> {
        self.downcased_unique_named()
            .into_iter()
            .filter(|name| is_cask_reference(name))
            .collect()
    }

    /// Load a formula for each named target that is not a cask.
    pub fn formulae(&self, formulary: &dyn Formulary) -> Result<Vec<Formula>, FormulaError> {
        let spec = Some(self.build_spec(SpecVariant::Stable));
        self.formula_names()
            .map(|name| formulary.factory(&name.normalized, spec))
            .collect()
    }

    /// Like [`Argv::formulae`], but plain names are loaded from their rack
    /// and no spec is forced unless one was requested.
    pub fn resolved_formulae(
        &self,
        formulary: &dyn Formulary,
        cellar: &Path,
    ) -> Result<Vec<Formula>, FormulaError> {
        let spec = self.spec_or(None);
        self.formula_names()
            .map(|name| {
                if name.is_path() {
                    formulary.factory(&name.normalized, spec)
                } else {
                    formulary.from_rack(&cellar.join(&name.normalized), spec)
                }
            })
            .collect()
    }

    /// Resolve every named target to its installed keg.
    pub fn kegs(&self, resolver: &KegResolver<'_>) -> Result<Vec<Keg>, KegError> {
        resolve_kegs(&self.downcased_unique_named(), resolver)
    }

    fn formula_names(&self) -> impl Iterator<Item = &NamedArg> {
        self.named_args()
            .iter()
            .filter(|name| !is_cask_reference(&name.normalized))
    }
}

fn is_path(name: &str) -> bool {
    name.contains('/')
}

/// `Caskroom/cask/<token>` or `Caskroom/versions/<token>`.
fn is_cask_reference(name: &str) -> bool {
    let mut parts = name.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some("Caskroom"), Some("cask" | "versions"), Some(token), None) => {
            !token.is_empty()
                && token
                    .chars()
                    .all(|c| c.is_alphanumeric() || matches!(c, '_' | '+' | '-' | '.'))
        }
        _ => false,
    }
}
