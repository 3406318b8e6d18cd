//! Typography - Font Sizes and Spacing

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_XL: f32 = 20.0;

    /// Vertical gap between form entries
    pub const FIELD_GAP: f32 = 12.0;
}
