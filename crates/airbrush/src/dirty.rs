//! Dirty region tracking for incremental redraw

use std::collections::HashSet;

use tracing::debug;

use crate::geometry::Rect;

/// Tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

/// Accumulates the rectangles changed since the last redraw
#[derive(Debug, Clone, Default)]
pub struct DirtyRegion {
    rects: Vec<Rect>,
    bounds: Rect,
}

impl DirtyRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the region by `rect`. Empty rects are ignored.
    pub fn add(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        self.bounds = self.bounds.union(&rect);
        self.rects.push(rect);
    }

    /// Union of everything added, None if nothing was added
    pub fn bounding_rect(&self) -> Option<Rect> {
        if self.rects.is_empty() {
            None
        } else {
            Some(self.bounds)
        }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
        self.bounds = Rect::default();
    }

    /// Tiles touched by the region, clipped to `clip`
    ///
    /// Tile (0, 0) starts at the origin of `clip`'s coordinate space; parts
    /// of the region outside `clip` are dropped.
    pub fn tiles(&self, tile_size: u32, clip: Rect) -> Vec<TileCoord> {
        if tile_size == 0 {
            return Vec::new();
        }
        let tile = tile_size as i32;
        let mut tiles = HashSet::new();

        for rect in &self.rects {
            let Some(visible) = rect.intersection(&clip) else {
                continue;
            };
            if visible.x < 0 || visible.y < 0 {
                continue;
            }

            // Calculate tile range
            let tile_x_start = visible.x / tile;
            let tile_y_start = visible.y / tile;
            let tile_x_end = (visible.right() - 1) / tile;
            let tile_y_end = (visible.bottom() - 1) / tile;

            // Mark all tiles in the range
            for ty in tile_y_start..=tile_y_end {
                for tx in tile_x_start..=tile_x_end {
                    tiles.insert(TileCoord {
                        x: tx as u32,
                        y: ty as u32,
                    });
                }
            }
        }

        let mut tiles: Vec<TileCoord> = tiles.into_iter().collect();
        tiles.sort();
        debug!(
            "DirtyRegion::tiles: {} rects -> {} tiles (tile size {})",
            self.rects.len(),
            tiles.len(),
            tile_size
        );
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_region() {
        let region = DirtyRegion::new();
        assert!(region.is_empty());
        assert_eq!(region.bounding_rect(), None);
    }

    #[test]
    fn test_add_accumulates_union() {
        let mut region = DirtyRegion::new();
        region.add(Rect::new(10, 10, 5, 5));
        region.add(Rect::new(30, 0, 10, 20));

        assert_eq!(region.rects().len(), 2);
        assert_eq!(region.bounding_rect(), Some(Rect::new(10, 0, 30, 20)));
    }

    #[test]
    fn test_add_ignores_empty() {
        let mut region = DirtyRegion::new();
        region.add(Rect::new(10, 10, 0, 5));
        region.add(Rect::new(10, 10, -3, 5));
        assert!(region.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut region = DirtyRegion::new();
        region.add(Rect::new(0, 0, 4, 4));
        region.clear();
        assert!(region.is_empty());
        assert_eq!(region.bounding_rect(), None);
    }

    #[test]
    fn test_tiles_span() {
        let mut region = DirtyRegion::new();
        // Region that spans all 4 tiles
        region.add(Rect::new(100, 100, 56, 56));

        let tiles = region.tiles(128, Rect::new(0, 0, 256, 256));
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0], TileCoord { x: 0, y: 0 });
        assert_eq!(tiles[3], TileCoord { x: 1, y: 1 });
    }

    #[test]
    fn test_tiles_clipped() {
        let mut region = DirtyRegion::new();
        // Hangs off the top-left corner
        region.add(Rect::new(-10, -10, 20, 20));
        // Entirely outside
        region.add(Rect::new(300, 300, 10, 10));

        let tiles = region.tiles(128, Rect::new(0, 0, 256, 256));
        assert_eq!(tiles, vec![TileCoord { x: 0, y: 0 }]);
    }

    #[test]
    fn test_tiles_deduplicated() {
        let mut region = DirtyRegion::new();
        region.add(Rect::new(0, 0, 10, 10));
        region.add(Rect::new(5, 5, 10, 10));

        let tiles = region.tiles(64, Rect::new(0, 0, 128, 128));
        assert_eq!(tiles.len(), 1);
    }
}
