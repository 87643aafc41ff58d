// src/seed.rs
// One seeding run from start to finish: schema, CSV, optional front images, cards.

use crate::config::Config;
use crate::deck::loader;
use crate::error::{Result, SeedError};
use crate::render::{FontManager, ImageRenderer, RenderSummary, TextRasterizer};
use crate::storage::{DatabaseManager, FrontMode};

#[derive(Debug)]
pub struct SeedReport {
    pub cards: usize,
    // Set when the fronts were rendered to images.
    pub images: Option<RenderSummary>,
}

/// Runs with the settings in `config`, loading the font through SDL2_ttf when fronts become images.
pub fn run(config: &Config) -> Result<SeedReport> {
    if !config.render_images {
        return seed(config, None);
    }

    let ttf_context = sdl2::ttf::init().map_err(|e| SeedError::Font(e.to_string()))?;
    let mut font = FontManager::new(&ttf_context, &config.font_path, config.font_size)?;
    seed(config, Some(&mut font as &mut dyn TextRasterizer))
}

/// Creates the database, reads the CSV once, renders fronts if a rasterizer is
/// given, then inserts the cards. Rendering and inserting share the same rows,
/// so card i always points at image i.
pub fn seed(config: &Config, rasterizer: Option<&mut dyn TextRasterizer>) -> Result<SeedReport> {
    let mut db = DatabaseManager::create(&config.db_path)?;
    let rows = loader::load_rows(&config.csv_path)?;

    let images = match rasterizer {
        Some(rasterizer) => Some(ImageRenderer::new(rasterizer, &config.images_dir).render_all(&rows)?),
        None => None,
    };
    let mode = match images {
        Some(_) => FrontMode::Images(&config.images_dir),
        None => FrontMode::Text,
    };

    let cards = db.populate(rows.into_iter().map(Ok), mode)?;
    Ok(SeedReport { cards, images })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::image_path;
    use crate::test_util::{write_utf16_le, BlockRasterizer};
    use std::path::PathBuf;

    fn config_in(dir: &tempfile::TempDir, csv: &str, render_images: bool) -> Config {
        let csv_path = dir.path().join("database.csv");
        write_utf16_le(&csv_path, csv);
        Config {
            db_path: dir.path().join("database.db"),
            csv_path,
            render_images,
            images_dir: dir.path().join("card_fronts"),
            ..Config::new()
        }
    }

    #[test]
    fn test_text_mode_example() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, "popularity,front,back\n1,dog,chien; le chien\n2,cat,chat\n", false);

        let report = run(&config).unwrap();
        assert_eq!(report.cards, 2);
        assert!(report.images.is_none());
        assert!(!config.images_dir.exists());

        let db = DatabaseManager::create(&config.db_path).unwrap();
        let cards = db.cards().unwrap();
        assert_eq!((cards[0].popularity, cards[0].front.as_str(), cards[0].back.as_str()), (1, "dog", "chien; le chien"));
        assert_eq!((cards[1].popularity, cards[1].front.as_str(), cards[1].back.as_str()), (2, "cat", "chat"));
        assert_eq!(db.review_count().unwrap(), 0);
    }

    #[test]
    fn test_image_mode_one_image_per_card() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(
            &dir,
            "popularity,front,back\n1,the,le\n2,friendship,amitié\n3,I,je\n4,water,eau\\n\\nl'eau\n",
            true,
        );

        let mut raster = BlockRasterizer::new();
        let report = seed(&config, Some(&mut raster)).unwrap();
        assert_eq!(report.cards, 4);
        let summary = report.images.unwrap();
        assert_eq!((summary.count, summary.width, summary.height), (4, 100, 20));

        let cards = DatabaseManager::create(&config.db_path).unwrap().cards().unwrap();
        assert_eq!(cards.len(), 4);
        for (index, card) in cards.iter().enumerate() {
            let path = image_path(&config.images_dir, index);
            assert_eq!(PathBuf::from(&card.front), path);
            assert_eq!(image::image_dimensions(&path).unwrap(), (100, 20));
        }
        assert_eq!(std::fs::read_dir(&config.images_dir).unwrap().count(), 4);
        assert_eq!(cards[3].back, "eau\r\rl'eau");
    }

    #[test]
    fn test_malformed_row_leaves_store_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, "popularity,front,back\n1,dog,chien\ntwo,cat,chat\n", true);

        let mut raster = BlockRasterizer::new();
        let err = seed(&config, Some(&mut raster)).unwrap_err();
        assert!(matches!(err, SeedError::MalformedRow { line: 3, .. }));

        // Rows are validated before anything is drawn or inserted.
        assert!(raster.drawn.is_empty());
        assert!(!config.images_dir.exists());
        let db = DatabaseManager::create(&config.db_path).unwrap();
        assert!(db.cards().unwrap().is_empty());
    }

    #[test]
    fn test_missing_csv_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            db_path: dir.path().join("database.db"),
            csv_path: dir.path().join("nope.csv"),
            render_images: false,
            ..Config::new()
        };
        assert!(matches!(run(&config), Err(SeedError::Io(_))));
    }
}
