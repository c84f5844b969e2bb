//! Spatial Domain
//!
//! The toroidal continuous plane agents move on, and its mapping onto the
//! integer grid the fields are stored in.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// A continuous 2D coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unwrapped vector from `self` to `other`.
    pub fn vector_to(&self, other: &Position) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }
}

/// Integer coordinates of a grid cell, always inside the domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIndex {
    pub x: u32,
    pub y: u32,
}

impl CellIndex {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Toroidal `[0, width) x [0, height)` domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialDomain {
    width: u32,
    height: u32,
}

impl SpatialDomain {
    /// Both extents must be non-zero; `SimConfig::validate` enforces this.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "domain extents must be non-zero");
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of grid cells.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Geometric center of the domain.
    pub fn center(&self) -> Position {
        Position::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Reduce each axis into `[0, extent)`. Idempotent.
    pub fn wrap(&self, p: Position) -> Position {
        Position::new(
            wrap_axis(p.x, self.width as f64),
            wrap_axis(p.y, self.height as f64),
        )
    }

    /// Grid cell containing `p`: `floor` then Euclidean remainder on each axis.
    pub fn cell_index(&self, p: Position) -> CellIndex {
        CellIndex::new(
            wrap_cell(p.x, self.width),
            wrap_cell(p.y, self.height),
        )
    }

    /// Cell offset from `cell` by `(dx, dy)` with toroidal wrap.
    pub fn offset_cell(&self, cell: CellIndex, dx: i64, dy: i64) -> CellIndex {
        CellIndex::new(
            (cell.x as i64 + dx).rem_euclid(self.width as i64) as u32,
            (cell.y as i64 + dy).rem_euclid(self.height as i64) as u32,
        )
    }

    /// Position `distance` units from `from` along `angle`, wrapped.
    ///
    /// A displacement that overflows to a non-finite value leaves `from`
    /// unchanged.
    pub fn project(&self, from: Position, angle: f64, distance: f64) -> Position {
        let target = Position::new(
            from.x + distance * angle.cos(),
            from.y + distance * angle.sin(),
        );
        if !(target.x.is_finite() && target.y.is_finite()) {
            return from;
        }
        self.wrap(target)
    }

    /// Row-major offset of a cell in a field's backing storage.
    pub fn linear_index(&self, cell: CellIndex) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    /// Iterate every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| CellIndex::new(x, y)))
    }
}

fn wrap_axis(value: f64, extent: f64) -> f64 {
    let v = value.rem_euclid(extent);
    // rem_euclid of a tiny negative value can round up to `extent` itself
    if v >= extent {
        0.0
    } else {
        v
    }
}

fn wrap_cell(value: f64, extent: u32) -> u32 {
    (value.floor() as i64).rem_euclid(extent as i64) as u32
}

/// Normalize an angle into `(-pi, pi]`.
pub fn normalize_heading(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(domain: &SpatialDomain, p: Position) -> bool {
        p.x >= 0.0
            && p.x < domain.width() as f64
            && p.y >= 0.0
            && p.y < domain.height() as f64
    }

    #[test]
    fn test_wrap_into_bounds() {
        let domain = SpatialDomain::new(100, 50);

        let cases = [
            Position::new(0.0, 0.0),
            Position::new(100.0, 50.0),
            Position::new(-0.5, -0.5),
            Position::new(250.25, -125.75),
            Position::new(-1e-18, 49.999_999),
            Position::new(1e9, -1e9),
        ];

        for p in cases {
            let w = domain.wrap(p);
            assert!(in_bounds(&domain, w), "{:?} wrapped to {:?}", p, w);
        }

        assert_eq!(domain.wrap(Position::new(100.0, 50.0)), Position::new(0.0, 0.0));
        assert_eq!(domain.wrap(Position::new(-0.5, 51.0)), Position::new(99.5, 1.0));
    }

    #[test]
    fn test_wrap_idempotent() {
        let domain = SpatialDomain::new(101, 101);

        for i in -50..50 {
            let p = Position::new(i as f64 * 7.3, i as f64 * -13.1);
            let once = domain.wrap(p);
            assert_eq!(domain.wrap(once), once);
        }
    }

    #[test]
    fn test_tiny_negative_does_not_land_on_extent() {
        let domain = SpatialDomain::new(10, 10);
        let w = domain.wrap(Position::new(-1e-20, -1e-20));
        assert!(in_bounds(&domain, w));
        assert_eq!(domain.cell_index(w), CellIndex::new(0, 0));
    }

    #[test]
    fn test_cell_index_floor_and_wrap() {
        let domain = SpatialDomain::new(10, 20);

        assert_eq!(domain.cell_index(Position::new(3.9, 7.1)), CellIndex::new(3, 7));
        assert_eq!(domain.cell_index(Position::new(-0.5, 0.0)), CellIndex::new(9, 0));
        assert_eq!(domain.cell_index(Position::new(10.2, 20.0)), CellIndex::new(0, 0));
        assert_eq!(domain.cell_index(Position::new(-10.5, -1.0)), CellIndex::new(9, 19));
    }

    #[test]
    fn test_offset_cell_wraps_diagonals() {
        let domain = SpatialDomain::new(5, 5);
        let corner = CellIndex::new(0, 0);

        assert_eq!(domain.offset_cell(corner, -1, -1), CellIndex::new(4, 4));
        assert_eq!(domain.offset_cell(corner, 1, -1), CellIndex::new(1, 4));
        assert_eq!(domain.offset_cell(CellIndex::new(4, 2), 1, 0), CellIndex::new(0, 2));
    }

    #[test]
    fn test_project_wraps() {
        let domain = SpatialDomain::new(10, 10);
        let p = domain.project(Position::new(9.5, 5.0), 0.0, 1.0);

        assert!((p.x - 0.5).abs() < 1e-12);
        assert!((p.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_project_non_finite_distance_stays_put() {
        let domain = SpatialDomain::new(10, 10);
        let from = Position::new(3.5, 7.25);

        assert_eq!(domain.project(from, 0.4, f64::INFINITY), from);
        assert_eq!(domain.project(from, 2.0, f64::NAN), from);
        // Huge but finite displacements still wrap into bounds
        let far = domain.project(from, 0.0, 1e300);
        assert!(in_bounds(&domain, far), "{:?}", far);
    }

    #[test]
    fn test_center_and_cells() {
        let domain = SpatialDomain::new(101, 101);
        assert_eq!(domain.center(), Position::new(50.5, 50.5));
        assert_eq!(domain.area(), 101 * 101);

        let small = SpatialDomain::new(3, 2);
        let cells: Vec<_> = small.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[3], CellIndex::new(0, 1));
        assert_eq!(small.linear_index(CellIndex::new(2, 1)), 5);
    }

    #[test]
    fn test_normalize_heading_range() {
        assert!((normalize_heading(PI) - PI).abs() < 1e-12);
        assert!((normalize_heading(-PI) - PI).abs() < 1e-12);
        assert!((normalize_heading(3.0 * PI) - PI).abs() < 1e-9);
        assert!((normalize_heading(0.5 + TAU) - 0.5).abs() < 1e-12);
        assert!((normalize_heading(-0.5 - 4.0 * TAU) + 0.5).abs() < 1e-9);

        for i in -100..100 {
            let h = normalize_heading(i as f64 * 0.77);
            assert!(h > -PI && h <= PI, "heading {} out of range", h);
        }
    }
}
