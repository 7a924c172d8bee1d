//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::TesterArgs;
pub use types::{PositiveU64, PositiveUsize};

pub(crate) use defaults::{CONNECT_TIMEOUT_FACTOR, DEFAULT_CONFIG_FILES};
pub(crate) use parsers::normalize_args;
