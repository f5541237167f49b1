//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// START NUMBERS
// =============================================================================

/// First start number handed out when nothing else is configured
pub const DEFAULT_FIRST_START_NUMBER: u32 = 1;

/// Excluded runs longer than this are logged when skipped
pub const LONG_EXCLUDED_RUN: u32 = 10;

// =============================================================================
// GOALS
// =============================================================================

/// Goal labels participants choose from when registering
pub mod goals {
    pub const RELAXED: &str = "relaxed";
    pub const MODERATE: &str = "moderate";
    pub const AMBITIOUS: &str = "ambitious";

    /// All goal labels, slowest intent first
    pub const ALL: &[&str] = &[RELAXED, MODERATE, AMBITIOUS];
}

// =============================================================================
// STARTBLOCKS
// =============================================================================

/// Maximum startblock name length
pub const MAX_STARTBLOCK_NAME_LENGTH: u64 = 128;

// =============================================================================
// START NUMBER SHEET LAYOUT
// =============================================================================

/// Page layout of a start number sheet, in document units
pub mod sheet_layout {
    /// Vertical position of the start number
    pub const START_NUMBER_Y: f64 = 130.0;

    /// Vertical position of the first name
    pub const FIRSTNAME_Y: f64 = 300.0;

    /// Vertical position of the last name
    pub const LASTNAME_Y: f64 = 340.0;

    /// Vertical position of the startblock name
    pub const BLOCK_NAME_Y: f64 = 390.0;

    /// Font size of the start number
    pub const START_NUMBER_FONT_SIZE: f64 = 200.0;

    /// Font size of names and block label
    pub const NAME_FONT_SIZE: f64 = 30.0;

    /// How often the barcode is printed per page, for easier scanning
    pub const BARCODE_REPETITIONS: usize = 3;

    /// Barcode positions (x, y), one per repetition
    pub const BARCODE_POSITIONS: [(f64, f64); BARCODE_REPETITIONS] =
        [(20.0, 480.0), (220.0, 480.0), (420.0, 480.0)];

    /// Barcode width
    pub const BARCODE_WIDTH: f64 = 160.0;

    /// Decoration images drawn on every page (path, x, y, width)
    pub const DECORATIONS: [(&str, f64, f64, f64); 3] = [
        ("images/logo.png", 20.0, 20.0, 120.0),
        ("images/sponsor.png", 460.0, 20.0, 120.0),
        ("images/footer.png", 0.0, 740.0, 595.0),
    ];

    /// Checkmark drawn next to the name of confirmed participants (SVG path)
    pub const CHECKMARK_PATH: &str = "M 500,300 L 520,320 L 560,270";

    /// Stroke width of the checkmark
    pub const CHECKMARK_LINE_WIDTH: f64 = 5.0;
}
