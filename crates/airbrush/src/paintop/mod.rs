//! Paint operations
//!
//! A paint operation turns one pointer sample into paint on the painter's
//! device. Operations never fail: a sample that cannot be painted is
//! reported through [`DabOutcome`] and otherwise leaves no mark.

mod airbrush;
mod stroke;

use crate::geometry::Rect;
use crate::types::PointerSample;

pub use airbrush::AirbrushOp;
pub use stroke::{paint_stroke, StrokeInterpolator};

/// What a paint operation did with a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DabOutcome {
    /// The dab was blended in; the rect was added to the dirty region
    Composited(Rect),
    /// The operation has no painter
    SkippedNoPainter,
    /// The painter has no device
    SkippedNoDevice,
    /// The painter has no brush
    SkippedNoBrush,
    /// The dab lies entirely outside the canvas
    SkippedOffCanvas,
    /// The dab rectangle is null, empty or invalid
    SkippedDegenerateGeometry,
}

impl DabOutcome {
    /// Whether the sample changed the device
    pub fn is_composited(&self) -> bool {
        matches!(self, DabOutcome::Composited(_))
    }
}

/// An operation applied once per pointer sample
pub trait PaintOp {
    fn paint_at(&mut self, sample: PointerSample) -> DabOutcome;
}
