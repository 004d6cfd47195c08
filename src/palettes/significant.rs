use crate::core::Color;

// Highlight colors. Each one carries a fixed meaning across every RSS chart,
// so they are never reused as plain categorical fills.
pub const SIGNIF_RED: Color = Color::from_pixel(0xC8102E); // alert, statistically significant decrease
pub const SIGNIF_YELLOW: Color = Color::from_pixel(0xF2B705); // caution
pub const SIGNIF_BLUE: Color = Color::from_pixel(0x0072CE); // reference, focus series
pub const SIGNIF_ORANGE: Color = Color::from_pixel(0xE87722); // secondary alert
pub const SIGNIF_GREEN: Color = Color::from_pixel(0x2E8540); // positive, significant increase

/// Semantic color table, looked up by [`super::rss_col`].
pub static RSS_COLS: &[(&str, Color)] = &[
    ("dark_blue", Color::from_pixel(0x1F2A44)),
    ("blue", Color::from_pixel(0x0072CE)),
    ("light_blue", Color::from_pixel(0x9CC4E4)),
    ("teal", Color::from_pixel(0x00857C)),
    ("grey", Color::from_pixel(0x6E6E6E)),
    ("light_grey", Color::from_pixel(0xD9D9D9)),
    ("background", Color::from_pixel(0xF5F5F5)),
    ("text", Color::from_pixel(0x1A1A1A)),
    ("signif_red", SIGNIF_RED),
    ("signif_yellow", SIGNIF_YELLOW),
    ("signif_blue", SIGNIF_BLUE),
    ("signif_orange", SIGNIF_ORANGE),
    ("signif_green", SIGNIF_GREEN),
];
