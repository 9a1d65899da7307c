//! Configuration: install layout and formula definitions.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FormulaDef, LayoutConfig};
