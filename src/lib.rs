// CardSeed - lib.rs
// Builds the SQLite store for the vocabulary review app and seeds it from a CSV word list.

pub mod config;
pub mod debug;
pub mod deck;
pub mod error;
pub mod render;
pub mod seed;
pub mod storage;

#[cfg(test)]
mod test_util;

pub use config::Config;
pub use error::{Result, SeedError};
pub use seed::{run, SeedReport};
