//! Grid Fields
//!
//! Dense per-cell state shared by every agent: the pheromone concentration,
//! the food stock and the nest mask. All three are row-major over the
//! domain's cells.

use super::space::{CellIndex, Position, SpatialDomain};

/// Non-negative pheromone concentration per cell
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    domain: SpatialDomain,
    cells: Vec<f64>,
    /// Reused buffer for the diffusion pass
    scratch: Vec<f64>,
}

impl PheromoneField {
    pub fn new(domain: SpatialDomain) -> Self {
        Self {
            domain,
            cells: vec![0.0; domain.area()],
            scratch: vec![0.0; domain.area()],
        }
    }

    pub fn get(&self, cell: CellIndex) -> f64 {
        self.cells[self.domain.linear_index(cell)]
    }

    /// Concentration at the cell containing `p`.
    pub fn sample(&self, p: Position) -> f64 {
        self.get(self.domain.cell_index(p))
    }

    /// Overwrite one cell. Negative or non-finite values are clamped to zero.
    pub fn set(&mut self, cell: CellIndex, value: f64) {
        let idx = self.domain.linear_index(cell);
        self.cells[idx] = if value.is_finite() { value.max(0.0) } else { 0.0 };
    }

    /// Add `amount` to one cell.
    pub fn deposit(&mut self, cell: CellIndex, amount: f64) {
        debug_assert!(amount >= 0.0, "pheromone deposits must be non-negative");
        let idx = self.domain.linear_index(cell);
        self.cells[idx] += amount.max(0.0);
    }

    /// Total pheromone mass.
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Blend each cell with the mean of its 8 toroidal Moore neighbours:
    /// `new = old * (1 - rate) + mean * rate`. Conserves total mass.
    pub fn diffuse(&mut self, rate: f64) {
        if rate <= 0.0 {
            return;
        }
        let width = self.domain.width() as usize;
        let height = self.domain.height() as usize;
        let at = |x: usize, y: usize| y * width + x;

        for y in 0..height {
            let up = if y == 0 { height - 1 } else { y - 1 };
            let down = if y + 1 == height { 0 } else { y + 1 };
            for x in 0..width {
                let left = if x == 0 { width - 1 } else { x - 1 };
                let right = if x + 1 == width { 0 } else { x + 1 };

                let neighbour_sum = self.cells[at(left, y)]
                    + self.cells[at(right, y)]
                    + self.cells[at(x, up)]
                    + self.cells[at(x, down)]
                    + self.cells[at(left, up)]
                    + self.cells[at(right, up)]
                    + self.cells[at(left, down)]
                    + self.cells[at(right, down)];

                let old = self.cells[at(x, y)];
                self.scratch[at(x, y)] = old * (1.0 - rate) + (neighbour_sum / 8.0) * rate;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Scale every cell by `factor` in [0, 1].
    pub fn evaporate(&mut self, factor: f64) {
        for value in &mut self.cells {
            *value *= factor;
        }
    }

    /// One field update: diffusion strictly before evaporation.
    pub fn update(&mut self, diffusion_rate: f64, evaporation_factor: f64) {
        self.diffuse(diffusion_rate);
        self.evaporate(evaporation_factor);
    }
}

/// Integer food stock per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodField {
    domain: SpatialDomain,
    cells: Vec<u32>,
}

impl FoodField {
    pub fn new(domain: SpatialDomain) -> Self {
        Self {
            domain,
            cells: vec![0; domain.area()],
        }
    }

    pub fn get(&self, cell: CellIndex) -> u32 {
        self.cells[self.domain.linear_index(cell)]
    }

    pub fn set(&mut self, cell: CellIndex, amount: u32) {
        let idx = self.domain.linear_index(cell);
        self.cells[idx] = amount;
    }

    /// Remove one unit from `cell`. Returns false if the cell was empty.
    pub fn take_one(&mut self, cell: CellIndex) -> bool {
        let idx = self.domain.linear_index(cell);
        match self.cells[idx] {
            0 => false,
            n => {
                self.cells[idx] = n - 1;
                true
            }
        }
    }

    /// Total food units left on the grid.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|c| *c as u64).sum()
    }

    /// Number of cells holding any food.
    pub fn stocked_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c > 0).count()
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }
}

/// Boolean nest mask, fixed once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestField {
    domain: SpatialDomain,
    cells: Vec<bool>,
}

impl NestField {
    /// Mark every cell whose integer coordinates lie strictly within `radius`
    /// of `center` (plain Euclidean distance, no wrap).
    pub fn disk(domain: SpatialDomain, center: Position, radius: f64) -> Self {
        let cells = domain
            .cells()
            .map(|cell| within_radius(cell, center, radius))
            .collect();
        Self { domain, cells }
    }

    /// Build from an explicit row-major mask.
    pub fn from_mask(domain: SpatialDomain, cells: Vec<bool>) -> Option<Self> {
        (cells.len() == domain.area()).then_some(Self { domain, cells })
    }

    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells[self.domain.linear_index(cell)]
    }

    /// Number of nest cells.
    pub fn size(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

/// Whether the integer point of `cell` lies strictly inside the disk.
pub fn within_radius(cell: CellIndex, center: Position, radius: f64) -> bool {
    (cell.x as f64 - center.x).hypot(cell.y as f64 - center.y) < radius
}
