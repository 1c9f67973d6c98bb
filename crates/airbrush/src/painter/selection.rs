//! Selection masks limiting where painting lands

use crate::dab::AlphaMask;
use crate::geometry::Rect;

/// Per-pixel selection coverage in device coordinates
///
/// Pixels outside the mask are unselected.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    mask: AlphaMask,
}

impl Selection {
    pub fn new(mask: AlphaMask) -> Self {
        Self { mask }
    }

    /// A hard-edged selection of `rect` on a `width` x `height` device
    pub fn from_rect(width: u32, height: u32, rect: Rect) -> Self {
        let mut mask = AlphaMask::new(width, height);
        let extent = Rect::new(0, 0, width as i32, height as i32);
        if let Some(visible) = rect.intersection(&extent) {
            for y in visible.y..visible.bottom() {
                for x in visible.x..visible.right() {
                    mask.set_alpha(x as u32, y as u32, 1.0);
                }
            }
        }
        Self { mask }
    }

    /// Selection coverage at a device pixel, 0.0 outside the mask
    #[inline]
    pub fn coverage(&self, x: i32, y: i32) -> f32 {
        if x < 0 || y < 0 {
            return 0.0;
        }
        self.mask.alpha_at(x as u32, y as u32)
    }
}
