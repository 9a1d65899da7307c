//! Command-line argument views for the package manager.
//!
//! This module derives everything a command needs from its raw tokens:
//!
//! ```text
//! Raw tokens → Classify → options / named targets / predicates → Resolve kegs
//! ```
//!
//! Classification never fails; absence is a normal answer.

mod classifier;
mod env_snapshot;
mod registry;
mod spec;

pub use classifier::{classify, Argv, NamedArg};
pub use env_snapshot::EnvSnapshot;
pub use registry::{flag_registry, Flag, FlagDef, VALUE_KEYS};
pub use spec::SpecVariant;
