//! Command-line interface module.

mod args;
pub mod build;
pub mod inspect;
pub mod query;

pub use args::{BuildArgs, Cli, Commands, ExcerptArgs, QueryArgs, SlugArgs};
