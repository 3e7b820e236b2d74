//! Playable area and cup confinement rectangle

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// The fixed-size playable grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if `cell` lies on the grid. Anything outside counts as a collision.
    #[inline]
    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }
}

/// Inclusive cell rectangle `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub min: IVec2,
    pub max: IVec2,
}

impl Region {
    pub const fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(self.min).all() && cell.cmple(self.max).all()
    }

    /// Width and height in cells
    pub fn size(&self) -> IVec2 {
        self.max - self.min + IVec2::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_edges() {
        let grid = Grid::new(9, 9);
        assert!(grid.in_bounds(IVec2::new(0, 0)));
        assert!(grid.in_bounds(IVec2::new(8, 8)));
        assert!(!grid.in_bounds(IVec2::new(-1, 0)));
        assert!(!grid.in_bounds(IVec2::new(0, -1)));
        assert!(!grid.in_bounds(IVec2::new(9, 0)));
        assert!(!grid.in_bounds(IVec2::new(0, 9)));
    }

    #[test]
    fn test_region_contains_is_inclusive() {
        let region = Region::new(IVec2::splat(2), IVec2::splat(6));
        assert!(region.contains(IVec2::new(2, 2)));
        assert!(region.contains(IVec2::new(6, 6)));
        assert!(region.contains(IVec2::new(4, 5)));
        assert!(!region.contains(IVec2::new(1, 4)));
        assert!(!region.contains(IVec2::new(4, 7)));
        assert_eq!(region.size(), IVec2::splat(5));
    }
}
