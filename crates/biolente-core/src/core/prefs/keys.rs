//! Keys under which Biolente persists its preferences.

pub const FONT_SIZE: &str = "biolente-font-size";
/// Stored as the literal strings `"true"` or `"false"`.
pub const HIGH_CONTRAST: &str = "biolente-high-contrast";
pub const PALETTE: &str = "biolente-molecule-palette";
pub const MONOCHROMATIC_BASE: &str = "biolente-mono-base";

pub const ALL: [&str; 4] = [FONT_SIZE, HIGH_CONTRAST, PALETTE, MONOCHROMATIC_BASE];
