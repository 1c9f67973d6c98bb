/// Fully transparent on the 8-bit opacity scale.
pub const OPACITY_TRANSPARENT: u8 = 0;

/// Fully opaque on the 8-bit opacity scale.
pub const OPACITY_OPAQUE: u8 = 255;

/// Opacity of a single airbrush dab (2% of opaque, integer division).
pub const AIRBRUSH_OPACITY: u8 = OPACITY_OPAQUE / 50;

/// Smallest scale an image brush is sampled at.
pub const MIN_IMAGE_SCALE: f32 = 1.0 / 16.0;

/// Largest scale an image brush is sampled at (pressure 1.0).
pub const MAX_IMAGE_SCALE: f32 = 2.0;

/// Lower bound on stroke spacing, as a fraction of brush diameter.
pub const MIN_SPACING: f32 = 0.01;
