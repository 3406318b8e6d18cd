//! Colors - Form Theme Colors

use gpui::{Rgba, rgb};

use crate::domain::field::Color;

/// Form color palette - All colors are accessed via associated functions
pub struct FormColors;

impl FormColors {
    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Card behind the form
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Labels above inputs
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Error message under an invalid input
    pub fn text_error() -> Rgba { rgb(0xef4444) }

    // Input colors
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }
    pub fn border_error() -> Rgba { rgb(0xef4444) }

    /// Convert a descriptor color
    pub fn of(color: Color) -> Rgba { rgb(color.0) }
}
