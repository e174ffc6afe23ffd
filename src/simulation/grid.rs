use std::ops::{Index, IndexMut};

use crate::config::SimulationParameters;

/// Grid geometry, fixed for the simulation's lifetime
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub nx: usize,
    pub ny: usize,
    pub dx: f64,
    pub dy: f64,
}

impl Grid {
    /// Derive cell spacing from the configured extents.
    /// Parameters are expected to be validated already.
    pub fn from_params(params: &SimulationParameters) -> Self {
        Self {
            nx: params.nx,
            ny: params.ny,
            dx: params.lx / params.nx as f64,
            dy: params.ly / params.ny as f64,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.nx * self.ny
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.nx && y < self.ny
    }

    /// Distance in cells to the nearest edge along each axis
    pub fn edge_distance(&self, x: usize, y: usize) -> (usize, usize) {
        (x.min(self.nx - 1 - x), y.min(self.ny - 1 - y))
    }
}

/// Wave heights over the grid, indexed `[(x, y)]`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    nx: usize,
    ny: usize,
    data: Vec<f64>,
}

impl HeightField {
    pub fn zeros(nx: usize, ny: usize) -> Self {
        Self::filled(nx, ny, 0.0)
    }

    pub fn filled(nx: usize, ny: usize, value: f64) -> Self {
        Self {
            nx,
            ny,
            data: vec![value; nx * ny],
        }
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x < self.nx && y < self.ny {
            Some(self.data[self.offset(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut f64> {
        if x < self.nx && y < self.ny {
            let offset = self.offset(x, y);
            Some(&mut self.data[offset])
        } else {
            None
        }
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Raw storage, x-major
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Sum of squared heights
    pub fn energy(&self) -> f64 {
        self.data.iter().map(|h| h * h).sum()
    }

    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, h| acc.max(h.abs()))
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        x * self.ny + y
    }
}

impl Index<(usize, usize)> for HeightField {
    type Output = f64;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &f64 {
        &self.data[self.offset(x, y)]
    }
}

impl IndexMut<(usize, usize)> for HeightField {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut f64 {
        let offset = self.offset(x, y);
        &mut self.data[offset]
    }
}

/// The three generations of the leapfrog scheme.
///
/// Rotation swaps ownership between the slots; no field is reallocated or
/// copied after construction.
#[derive(Clone, Debug)]
pub struct FieldBuffers {
    pub previous: HeightField,
    pub current: HeightField,
    pub next: HeightField,
}

impl FieldBuffers {
    pub fn new(grid: &Grid) -> Self {
        Self {
            previous: HeightField::zeros(grid.nx, grid.ny),
            current: HeightField::zeros(grid.nx, grid.ny),
            next: HeightField::zeros(grid.nx, grid.ny),
        }
    }

    /// `previous <- current`, `current <- next`. The old `previous` storage
    /// becomes the scratch `next` for the following step.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current);
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Flatten all three generations back to rest
    pub fn clear(&mut self) {
        self.previous.fill(0.0);
        self.current.fill(0.0);
        self.next.fill(0.0);
    }
}
