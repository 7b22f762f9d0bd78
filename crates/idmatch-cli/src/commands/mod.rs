//! Subcommand implementations.

pub mod compare;
pub mod lookup;
pub mod normalize;
pub mod parse;
pub mod show_config;
