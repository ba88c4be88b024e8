//! Command-line interface for sizing, shuffling and replaying puzzles

use crate::analysis::suggestion::suggest_for_screen;
use crate::io::configuration::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_SEED,
    GIF_FRAME_DELAY_MS, MAX_REPLAY_FRAMES, MIN_TILE_SIZE, OUTPUT_SUFFIX, REPLAY_FRAME_MS,
    REPLAY_SUFFIX, SHUFFLE_MOVES,
};
use crate::io::error::{PuzzleError, Result};
use crate::io::image::{export_png, fit_to_screen, load_image, render_grid};
use crate::io::progress::ReplayProgress;
use crate::io::visualization::ReplayCapture;
use crate::puzzle::{Grid, Replay};
use crate::spatial::layout::{Dimensions, fit_within};
use clap::{ArgAction, Args, Parser, Subcommand, value_parser};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slidetile")]
#[command(
    author,
    version,
    about = "Size, shuffle and replay sliding-tile puzzles cut from an image"
)]
/// Command-line arguments for the puzzle tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for the requested verbosity
    ///
    /// `RUST_LOG` still takes precedence when set.
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// List grid sizes that keep every tile large enough on the screen
    Suggest(SuggestArgs),
    /// Shuffle an image into a puzzle and save the arrangement as PNG
    Shuffle(PuzzleArgs),
    /// Shuffle an image, then record the puzzle solving itself as a GIF
    Replay(PuzzleArgs),
}

/// Screen the image is fitted into
#[derive(Args, Clone, Copy)]
pub struct ScreenArgs {
    /// Screen width in pixels
    #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH, value_parser = value_parser!(u32).range(1..))]
    pub screen_width: u32,

    /// Screen height in pixels
    #[arg(long, default_value_t = DEFAULT_SCREEN_HEIGHT, value_parser = value_parser!(u32).range(1..))]
    pub screen_height: u32,
}

impl ScreenArgs {
    /// Screen size as dimensions
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.screen_width, self.screen_height)
    }
}

/// Arguments for `suggest`
#[derive(Args)]
pub struct SuggestArgs {
    /// Source image
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Screen to fit the image into
    #[command(flatten)]
    pub screen: ScreenArgs,
}

/// Arguments for `shuffle` and `replay`
#[derive(Args)]
pub struct PuzzleArgs {
    /// Source image
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Number of tile columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Number of tile rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Random seed for reproducible shuffles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of random walk steps in the shuffle
    #[arg(short, long, default_value_t = SHUFFLE_MOVES)]
    pub moves: usize,

    /// Output path (defaults next to the input image)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Screen to fit the image into
    #[command(flatten)]
    pub screen: ScreenArgs,
}

/// Runs the parsed command
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the requested operation
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded, the grid cannot be
    /// built, no grid size suits the image, or an output cannot be written
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Suggest(args) => Self::suggest(args),
            Command::Shuffle(args) => Self::shuffle(args),
            Command::Replay(args) => self.replay(args),
        }
    }

    fn suggest(args: &SuggestArgs) -> Result<()> {
        let image = load_image(&args.image)?;
        let original = Dimensions::new(image.width(), image.height());
        let screen = args.screen.dimensions();
        let sizes = suggest_for_screen(original, screen);

        if sizes.is_empty() {
            let fitted = fit_within(original, screen);
            return Err(PuzzleError::NoSuggestion {
                scaled: (fitted.width, fitted.height),
                min_tile_size: MIN_TILE_SIZE,
            });
        }

        let lines: Vec<String> = sizes.iter().map(ToString::to_string).collect();
        report(&lines);
        Ok(())
    }

    fn shuffle(args: &PuzzleArgs) -> Result<()> {
        let grid = Self::build_grid(args)?;
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| sibling_path(&args.image, OUTPUT_SUFFIX, "png"));

        export_png(&render_grid(&grid), &output)?;
        info!("Wrote shuffled puzzle to {}", output.display());

        let moves: Vec<String> = grid
            .reverse_moves()
            .iter()
            .map(ToString::to_string)
            .collect();
        report(&[
            format!("{}", output.display()),
            format!("reverse moves: {}", moves.join(" ")),
        ]);
        Ok(())
    }

    fn replay(&self, args: &PuzzleArgs) -> Result<()> {
        let mut grid = Self::build_grid(args)?;
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| sibling_path(&args.image, REPLAY_SUFFIX, "gif"));

        let mut replay = Replay::new(&grid);
        let mut capture = ReplayCapture::new(MAX_REPLAY_FRAMES);
        let name = args
            .image
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let progress = ReplayProgress::new(&name, replay.total(), self.cli.should_show_progress());

        capture.record(&grid);
        while !replay.is_settled(&grid) {
            replay.tick(&mut grid, REPLAY_FRAME_MS);
            capture.record(&grid);
            progress.update(replay.issued(), capture.frame_count());
        }
        progress.finish();

        capture.export_gif(&output, GIF_FRAME_DELAY_MS)?;
        info!(
            "Wrote {} replay frames to {}",
            capture.frame_count(),
            output.display()
        );
        report(&[format!("{}", output.display())]);
        Ok(())
    }

    fn build_grid(args: &PuzzleArgs) -> Result<Grid> {
        let image = fit_to_screen(load_image(&args.image)?, args.screen.dimensions());
        let mut rng = StdRng::seed_from_u64(args.seed);
        Grid::shuffled_with_moves(&image, args.columns, args.rows, &mut rng, args.moves)
    }
}

/// Path next to `input` with `suffix` added to the file stem
pub fn sibling_path(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

// Command results go to stdout; diagnostics go through the logger
#[allow(clippy::print_stdout)]
fn report(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
