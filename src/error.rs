// src/error.rs
// The single error type shared by every stage of a seeding run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    /// A CSV data row with fewer than three fields or a non-integer rank.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
    #[error("output directory {0} doesn't exist")]
    MissingOutputDirectory(PathBuf),
    #[error("no rendered image for row {index} at {path}")]
    MissingImage { index: usize, path: PathBuf },
    #[error("input is not valid UTF-16: {0}")]
    Encoding(String),
    #[error("font error: {0}")]
    Font(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeedError>;
