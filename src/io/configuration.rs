//! Engine constants and runtime configuration defaults

// Tile animation
/// Tile animation speed in pixels per millisecond, per axis
pub const ANIMATION_SPEED: f32 = 500.0 / 1000.0;

// Shuffling
/// Number of random walk steps taken by a shuffle
pub const SHUFFLE_MOVES: usize = 100;

// Grid size suggestions
/// Minimum tile edge in pixels for a suggested grid size
pub const MIN_TILE_SIZE: u32 = 100;
/// Smallest suggested column or row count
pub const MIN_SUGGESTED_DIVISIONS: usize = 3;
/// Largest suggested column or row count
pub const MAX_SUGGESTED_DIVISIONS: usize = 7;

// Default values for configurable parameters
/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;
/// Default column count for CLI puzzles
pub const DEFAULT_COLUMNS: usize = 4;
/// Default row count for CLI puzzles
pub const DEFAULT_ROWS: usize = 3;
/// Default screen width the source image is fitted into
pub const DEFAULT_SCREEN_WIDTH: u32 = 800;
/// Default screen height the source image is fitted into
pub const DEFAULT_SCREEN_HEIGHT: u32 = 600;

// Replay capture
/// Simulated clock step between replay frames (in milliseconds)
pub const REPLAY_FRAME_MS: u32 = 40;
/// Delay between GIF animation frames (in milliseconds)
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
// Bounds memory use for long replays on large grids
/// Maximum number of frames captured for a replay GIF
pub const MAX_REPLAY_FRAMES: usize = 2_000;
/// Color drawn in the empty slot of rendered snapshots
pub const EMPTY_SLOT_COLOR: [u8; 4] = [24, 24, 24, 255];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_shuffled";
/// Suffix added to replay animation filenames
pub const REPLAY_SUFFIX: &str = "_replay";
