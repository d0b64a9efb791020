//! Run configuration, merged from CLI arguments, an optional TOML file, and
//! built-in defaults, in that order of precedence.

mod builder;
mod file;
mod models;

pub use builder::build_config;
pub use models::{OutputConfig, RunConfig};
