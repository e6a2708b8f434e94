//! Geometry constants, gating thresholds and runtime defaults
//!
//! Every value the seed-to-image mapping depends on lives here. Changing any of
//! them changes the portrait produced for a stored seed.

// Grid geometry
/// Logical grid edge length in cells
pub const GRID_SIZE: usize = 100;
/// Physical pixels per logical cell edge
pub const CELL_SIZE: u32 = 9;
/// Physical surface edge length in pixels
pub const SURFACE_SIZE: u32 = GRID_SIZE as u32 * CELL_SIZE;
/// Horizontal centre line of the portrait in cells
pub const CENTER_X: f64 = 50.0;

// Background
/// Edge length of one background tile in cells
pub const BACKGROUND_TILE: usize = 10;
/// A tile is filled when the draw exceeds this value
pub const BACKGROUND_THRESHOLD: f64 = 0.7;
/// Accent stars scattered over epic and stronger backgrounds
pub const BACKGROUND_STAR_COUNT: usize = 20;

// Aura
/// Centre of the aura rings on both axes
pub const AURA_CENTER: f64 = 50.0;
/// Outermost aura ring radius
pub const AURA_OUTER_RADIUS: u32 = 45;
/// Rings stop before reaching this radius
pub const AURA_INNER_RADIUS: u32 = 30;
/// Distance between consecutive aura rings
pub const AURA_RADIUS_STEP: usize = 3;
/// Angular sampling step around each ring in radians
pub const AURA_ANGLE_STEP: f64 = 0.1;
/// A ring point is kept when the draw exceeds this value
pub const AURA_KEEP_THRESHOLD: f64 = 0.5;

// Head and body
/// Top edge of the head ellipse
pub const HEAD_Y: f64 = 18.0;
/// Narrowest head width
pub const HEAD_MIN_WIDTH: f64 = 65.0;
/// Number of distinct head widths above the minimum
pub const HEAD_WIDTH_SPAN: usize = 20;
/// Shortest head height
pub const HEAD_MIN_HEIGHT: f64 = 55.0;
/// Number of distinct head heights above the minimum
pub const HEAD_HEIGHT_SPAN: usize = 15;
/// Body is this much narrower than the head
pub const BODY_WIDTH_INSET: f64 = 5.0;
/// Fixed body ellipse height
pub const BODY_HEIGHT: f64 = 48.0;
/// Body starts this far above the bottom of the head
pub const BODY_OVERLAP: f64 = 10.0;

// Gating thresholds, tuned by eye; keep the literals
/// Body accessory appears when the draw exceeds this value
pub const BODY_ACCESSORY_THRESHOLD: f64 = 0.5;
/// Fur patches appear when the draw exceeds this value
pub const FUR_PATCH_THRESHOLD: f64 = 0.7;
/// Each fur pixel is kept when the draw exceeds this value
pub const FUR_PIXEL_THRESHOLD: f64 = 0.3;
/// Eye accessory appears when the draw exceeds this value
pub const EYE_ACCESSORY_THRESHOLD: f64 = 0.8;
/// Snout takes the second body colour when the draw exceeds this value
pub const SNOUT_ALT_COLOR_THRESHOLD: f64 = 0.8;
/// Secondary facial feature appears when the draw exceeds this value
pub const FACIAL_EXTRA_THRESHOLD: f64 = 0.6;
/// Head accessory appears when the draw exceeds this value
pub const HEAD_ACCESSORY_THRESHOLD: f64 = 0.3;
/// Unibrow gets a second pixel row where the draw exceeds this value
pub const UNIBROW_THICKEN_THRESHOLD: f64 = 0.7;
/// Mythic bling chain appears when the draw is below this value
pub const BLING_CHAIN_CHANCE: f64 = 0.2;

// CLI defaults
/// Cards generated per run when no count is given
pub const DEFAULT_CARD_COUNT: usize = 3;
/// Seed distance between consecutive cards of one run
pub const SEED_STRIDE: f64 = 1000.0;
/// Upper bound of the uniform jitter added to clock-derived seeds
pub const SEED_JITTER: f64 = 1_000_000.0;
/// Prefix of generated file names
pub const OUTPUT_PREFIX: &str = "bobo";
/// Suffix of the logical-resolution sprite file names
pub const CELLS_SUFFIX: &str = "_cells";
