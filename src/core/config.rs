/// Visual and behavioral constants, plus the runtime gallery configuration.

use std::path::PathBuf;

// --- Visual colors (hex) ---
pub const BG_COLOR: u32 = 0x0D1117;
pub const CARD_FRAME: u32 = 0xF5F3EE;
pub const CARD_BORDER: u32 = 0x30363D;
pub const BROKEN_IMAGE_BG: u32 = 0x21262D;
pub const BROKEN_IMAGE_MARK: u32 = 0xE94560;
pub const TEXT_PRIMARY: u32 = 0xE6EDF3;
pub const TEXT_SECONDARY: u32 = 0x8B949E;
pub const DOT_ACTIVE: u32 = 0xE6EDF3;
pub const DOT_IDLE: u32 = 0x484F58;

// --- Card sizes ---
pub const CARD_W: f64 = 160.0;
pub const CARD_H: f64 = 220.0;
pub const CARD_CORNER_RADIUS: f64 = 10.0;
pub const CARD_INSET: f64 = 8.0;
pub const CARD_SHADOW_BLUR: f64 = 10.0;

// --- Heading ---
pub const HEADING_FONT_SIZE: f64 = 56.0;
pub const HEADING_FADE_MS: f64 = 400.0;

// --- Section indicator ---
pub const DOT_RADIUS: f64 = 5.0;
pub const DOT_SPACING: f64 = 22.0;
pub const DOT_MARGIN: f64 = 32.0;

// --- Placement ---
pub const RANGE_MIN_FACTOR: f64 = 0.35;
pub const RANGE_MAX_FACTOR: f64 = 0.70;
pub const REST_ROTATION_DEG: f64 = 25.0;
pub const EDGE_OFFSET: f64 = 300.0;
pub const EDGE_JITTER: f64 = 200.0;
pub const FLIGHT_ROTATION_DEG: f64 = 90.0;

// --- Transition timing ---
pub const CARD_EXIT_MS: f64 = 1000.0;
pub const CARD_ENTER_MS: f64 = 1000.0;
/// Entry starts once this fraction of the exit duration has elapsed.
pub const ENTER_OVERLAP: f64 = 0.5;

// --- Sections ---
pub const SECTION_COUNT: usize = 4;
pub const CARDS_PER_SECTION: usize = 15;
pub const DEFAULT_HEADINGS: [&str; SECTION_COUNT] =
    ["Wild Places", "Quiet Cities", "Open Water", "Night Skies"];

// --- Scrolling ---
pub const PIN_MULTIPLIER: f64 = 6.0;
pub const WHEEL_STEP_PX: f64 = 100.0;
pub const ARROW_STEP_PX: f64 = 40.0;
pub const SMOOTH_LERP: f64 = 0.1;
pub const SMOOTH_SNAP_PX: f64 = 0.5;

// --- Window ---
pub const WINDOW_W: i32 = 1280;
pub const WINDOW_H: i32 = 720;
pub const FRAME_MS: u64 = 16;

/// Runtime configuration, fixed once the gallery starts.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub asset_root: PathBuf,
    pub cards_per_section: usize,
    pub headings: [String; SECTION_COUNT],
    pub seed: Option<u64>,
    pub window_width: i32,
    pub window_height: i32,
    pub smooth_lerp: f64,
}

impl GalleryConfig {
    pub fn heading(&self, section: usize) -> &str {
        &self.headings[section.min(SECTION_COUNT - 1)]
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            cards_per_section: CARDS_PER_SECTION,
            headings: DEFAULT_HEADINGS.map(String::from),
            seed: None,
            window_width: WINDOW_W,
            window_height: WINDOW_H,
            smooth_lerp: SMOOTH_LERP,
        }
    }
}
