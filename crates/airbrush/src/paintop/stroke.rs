//! Stroke interpolation
//!
//! Pointer events arrive at irregular distances. The interpolator places
//! samples along the path at a spacing proportional to the brush diameter
//! and hands each one to a paint operation.

use tracing::debug;

use super::{DabOutcome, PaintOp};
use crate::brush::BrushPreset;
use crate::types::PointerSample;

/// Spaces samples evenly along a stroke
pub struct StrokeInterpolator {
    /// Preset providing diameter and spacing
    preset: BrushPreset,
    /// Last sample (None if stroke not started)
    last: Option<PointerSample>,
    /// Distance travelled since the last emitted sample
    distance_accumulator: f32,
}

impl StrokeInterpolator {
    pub fn new(preset: BrushPreset) -> Self {
        Self {
            preset,
            last: None,
            distance_accumulator: 0.0,
        }
    }

    pub fn preset(&self) -> &BrushPreset {
        &self.preset
    }

    /// Start a new stroke
    pub fn begin_stroke(&mut self) {
        self.last = None;
        self.distance_accumulator = 0.0;
    }

    /// Whether a stroke is in progress
    pub fn is_stroking(&self) -> bool {
        self.last.is_some()
    }

    /// Feed a pointer sample and return the samples to paint
    ///
    /// The first sample of a stroke is returned as-is. Later samples produce
    /// zero or more interpolated samples between the previous position and
    /// this one; position, pressure and tilt are interpolated linearly.
    pub fn stroke_to(&mut self, sample: PointerSample) -> Vec<PointerSample> {
        let mut out = Vec::new();

        // First point in stroke - paint it directly
        let Some(last) = self.last else {
            self.last = Some(sample);
            self.distance_accumulator = 0.0;
            out.push(sample);
            return out;
        };

        let delta = sample.position - last.position;
        let distance = delta.length();
        if !distance.is_finite() || distance < 0.001 {
            // No significant movement
            return out;
        }

        let avg_pressure = (last.pressure + sample.pressure) / 2.0;
        let spacing = self.preset.size_for_pressure(avg_pressure) * self.preset.spacing;

        if spacing < 0.001 {
            // Prevent an endless loop with zero spacing
            self.last = Some(sample);
            return out;
        }

        // Distance into this segment where the next sample falls
        let mut next = (spacing - self.distance_accumulator).max(0.0);
        let mut last_emitted = None;

        while next <= distance {
            let t = next / distance;
            out.push(PointerSample {
                position: last.position + delta * t,
                pressure: lerp(last.pressure, sample.pressure, t),
                tilt_x: lerp(last.tilt_x, sample.tilt_x, t),
                tilt_y: lerp(last.tilt_y, sample.tilt_y, t),
            });
            last_emitted = Some(next);
            next += spacing;
        }

        self.distance_accumulator = match last_emitted {
            Some(at) => distance - at,
            None => self.distance_accumulator + distance,
        };
        self.last = Some(sample);

        if !out.is_empty() {
            debug!(
                "StrokeInterpolator::stroke_to: {} samples from ({:.1}, {:.1}) to ({:.1}, {:.1})",
                out.len(),
                last.position.x,
                last.position.y,
                sample.position.x,
                sample.position.y
            );
        }

        out
    }

    /// End the current stroke
    pub fn end_stroke(&mut self) {
        self.last = None;
        self.distance_accumulator = 0.0;
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Paint a whole stroke: interpolate `samples` and apply `op` to each result
pub fn paint_stroke<O, I>(op: &mut O, interpolator: &mut StrokeInterpolator, samples: I) -> Vec<DabOutcome>
where
    O: PaintOp + ?Sized,
    I: IntoIterator<Item = PointerSample>,
{
    interpolator.begin_stroke();
    let mut outcomes = Vec::new();
    for sample in samples {
        for dab_sample in interpolator.stroke_to(sample) {
            outcomes.push(op.paint_at(dab_sample));
        }
    }
    interpolator.end_stroke();
    outcomes
}
