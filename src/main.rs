// CardSeed - main.rs
// Command-line entry point: work out the settings, run once, report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cardseed::Config;

#[derive(Parser)]
#[command(name = "cardseed", about = "Create and seed a flashcard database from a UTF-16 CSV", version)]
struct Cli {
    /// JSON file with settings; command-line flags win over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database file to create, e.g. database.db
    #[arg(long)]
    db: Option<PathBuf>,

    /// CSV with columns popularity,front,back
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Keep card fronts as text instead of rendering them to images
    #[arg(long)]
    text_fronts: bool,

    /// TrueType font used for the front images
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in points for the front images
    #[arg(long)]
    font_size: Option<u16>,
}

impl Cli {
    fn into_config(self) -> cardseed::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::new(),
        };
        if let Some(db) = self.db {
            config.db_path = db;
        }
        if let Some(csv) = self.csv {
            config.csv_path = csv;
        }
        if self.text_fronts {
            config.render_images = false;
        }
        if let Some(font) = self.font {
            config.font_path = font;
        }
        if let Some(font_size) = self.font_size {
            config.font_size = font_size;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = Cli::parse().into_config().and_then(|config| {
        log::debug!("Running with {:?}", config);
        cardseed::run(&config)
    });

    match result {
        Ok(report) => {
            match &report.images {
                Some(images) => log::info!(
                    "Seeded {} cards with {} front images ({}x{})",
                    report.cards, images.count, images.width, images.height
                ),
                None => log::info!("Seeded {} cards", report.cards),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
