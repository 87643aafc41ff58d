// src/config.rs
// Settings for one seeding run: where the data comes from, where it goes,
// and how card fronts are stored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The database file to create, e.g. "database.db".
    pub db_path: PathBuf,
    /// UTF-16 CSV laid out as popularity,front,back.
    pub csv_path: PathBuf,
    /// true to store card fronts as rendered images, false to keep them as text.
    pub render_images: bool,
    pub font_path: PathBuf,
    pub font_size: u16,
    /// Where rendered fronts are written. Stored paths are built from this, so
    /// keep it relative if the database is going to be moved around.
    pub images_dir: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        Self {
            db_path: PathBuf::from("database.db"),
            csv_path: PathBuf::from("database.csv"),
            render_images: true,
            font_path: PathBuf::from("ARIALUNI.TTF"),
            font_size: 30,
            images_dir: PathBuf::from("card_fronts"),
        }
    }

    /// Loads settings from a JSON file. Keys that are missing keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.db_path, PathBuf::from("database.db"));
        assert!(config.render_images);
        assert_eq!(config.font_size, 30);
        assert_eq!(config.images_dir, PathBuf::from("card_fronts"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(&path, r#"{ "db_path": "words.db", "render_images": false }"#).unwrap();

        let config = Config::from_json_file(&path).unwrap();
        assert_eq!(config.db_path, PathBuf::from("words.db"));
        assert!(!config.render_images);
        assert_eq!(config.csv_path, PathBuf::from("database.csv"));
        assert_eq!(config.font_path, PathBuf::from("ARIALUNI.TTF"));
    }

    #[test]
    fn test_bad_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::from_json_file(&path).unwrap_err();
        assert!(matches!(err, crate::error::SeedError::Config(_)));
    }
}
