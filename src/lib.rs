//! Argv views for a Homebrew-style package manager.
//!
//! - [`args`]: classify raw tokens into options and named targets, answer
//!   flag predicates, pick the requested spec variant.
//! - [`keg`]: resolve named targets to the one installed keg each refers to.
//! - [`formulary`]: the formula lookup the resolver falls back on.
//! - [`config`]: install layout and formula tables.

pub mod args;
pub mod config;
pub mod formulary;
pub mod keg;
pub mod logging;
