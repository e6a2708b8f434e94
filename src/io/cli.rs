//! Command-line interface for generating batches of portrait cards

use crate::algorithm::generate_portrait;
use crate::io::configuration::{
    CELLS_SUFFIX, DEFAULT_CARD_COUNT, OUTPUT_PREFIX, SEED_JITTER, SEED_STRIDE, SURFACE_SIZE,
};
use crate::io::error::{Result, ensure_finite_seed, invalid_parameter};
use crate::io::image::{export_cells_png, export_png};
use crate::io::progress::ProgressManager;
use crate::palette::{Rarity, named};
use crate::raster::CellGrid;
use clap::Parser;
use image::RgbaImage;
use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "pixelbobo")]
#[command(
    author,
    version,
    about = "Generate seeded pixel-art bear portrait cards"
)]
/// Command-line arguments for the card generator
// Separate verbosity and sprite switches read better than a mode enum on the command line
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Rarity tier of every card in the batch
    #[arg(short, long, value_enum, default_value_t = Rarity::Rare)]
    pub rarity: Rarity,

    /// Number of cards to generate
    #[arg(short, long, default_value_t = DEFAULT_CARD_COUNT)]
    pub count: usize,

    /// Seed of the first card; later cards add 1000 per card
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<f64>,

    /// Directory the PNG files are written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Also write the 100x100 logical sprite next to each card
    #[arg(long)]
    pub cells: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Report per-portrait trait details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seeds for every card, spaced by the card stride from `base`
    pub fn card_seeds(&self, base: f64) -> Vec<f64> {
        (0..self.count)
            .map(|index| (index as f64).mul_add(SEED_STRIDE, base))
            .collect()
    }
}

/// Base seed from wall-clock milliseconds plus uniform jitter
pub fn clock_seed() -> f64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |elapsed| elapsed.as_millis() as f64);
    rand::rng().random::<f64>().mul_add(SEED_JITTER, millis)
}

/// File name of the card for a rarity and seed
pub fn card_file_name(rarity: Rarity, seed: f64) -> String {
    format!("{OUTPUT_PREFIX}_{rarity}_{seed}.png")
}

/// File name of the logical sprite for a rarity and seed
pub fn cells_file_name(rarity: Rarity, seed: f64) -> String {
    format!("{OUTPUT_PREFIX}_{rarity}_{seed}{CELLS_SUFFIX}.png")
}

/// Generates and writes every card of one invocation
pub struct CardProcessor {
    cli: Cli,
    progress: ProgressManager,
}

impl CardProcessor {
    /// Create a processor for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new(cli.count)
        } else {
            ProgressManager::hidden(cli.count)
        };
        Self { cli, progress }
    }

    /// Generate all cards and return the written card paths in order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The card count is zero
    /// - The supplied seed is not finite
    /// - A portrait cannot be generated or written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one card is required",
            ));
        }

        let base = match self.cli.seed {
            Some(seed) => ensure_finite_seed(seed)?,
            None => clock_seed(),
        };
        debug!(base, count = self.cli.count, rarity = %self.cli.rarity, "Starting batch");

        let mut written = Vec::with_capacity(self.cli.count);
        for seed in self.cli.card_seeds(base) {
            written.push(self.process_card(seed)?);
        }

        self.progress.finish();
        info!(
            cards = written.len(),
            output = %self.cli.output.display(),
            "Batch complete"
        );
        Ok(written)
    }

    fn process_card(&mut self, seed: f64) -> Result<PathBuf> {
        let rarity = self.cli.rarity;
        let card_path = self.cli.output.join(card_file_name(rarity, seed));
        self.progress.start_card(&card_file_name(rarity, seed));

        let mut image = RgbaImage::new(SURFACE_SIZE, SURFACE_SIZE);
        let portrait = generate_portrait(&mut image, seed, rarity)?;
        export_png(&image, &card_path)?;

        if self.cli.cells {
            self.write_cells(seed, rarity, &self.cli.output)?;
        }

        self.progress.complete_card();
        self.progress.suspend(|| {
            info!(
                path = %card_path.display(),
                seed,
                body_color = %portrait.body_color,
                bling = ?portrait.bling,
                "Wrote card"
            );
        });
        Ok(card_path)
    }

    fn write_cells(&self, seed: f64, rarity: Rarity, output: &Path) -> Result<()> {
        let mut grid = CellGrid::new(named::CLEAR);
        generate_portrait(&mut grid, seed, rarity)?;
        let path = output.join(cells_file_name(rarity, seed));
        export_cells_png(&grid, &path)?;
        self.progress
            .suspend(|| debug!(path = %path.display(), "Wrote logical sprite"));
        Ok(())
    }
}
