//! Absorbing boundary approximation.
//!
//! Cells inside the damping band are attenuated by
//! `factor^(rx + ry)`, where `rx`/`ry` are the proximity ratios to the nearest
//! edge along each axis. Corners get both ratios and therefore the strongest
//! attenuation. This is not a perfectly matched layer.

use crate::simulation::grid::Grid;

/// Attenuation multiplier for cell `(x, y)`, in `(0, 1]`.
pub fn damping(grid: &Grid, factor: f64, zone_width: usize, x: usize, y: usize) -> f64 {
    let (dist_x, dist_y) = grid.edge_distance(x, y);
    if dist_x >= zone_width && dist_y >= zone_width {
        return 1.0;
    }

    let width = zone_width as f64;
    let ratio_x = ((width - dist_x as f64) / width).max(0.0);
    let ratio_y = ((width - dist_y as f64) / width).max(0.0);
    factor.powf(ratio_x + ratio_y)
}

/// Precomputed [`damping`] values for every cell of a grid.
#[derive(Clone, Debug)]
pub struct DampingProfile {
    ny: usize,
    factors: Vec<f64>,
}

impl DampingProfile {
    pub fn new(grid: &Grid, factor: f64, zone_width: usize) -> Self {
        let mut factors = Vec::with_capacity(grid.cell_count());
        for x in 0..grid.nx {
            for y in 0..grid.ny {
                factors.push(damping(grid, factor, zone_width, x, y));
            }
        }
        Self {
            ny: grid.ny,
            factors,
        }
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f64 {
        self.factors[x * self.ny + y]
    }

    /// Number of cells attenuated each step
    pub fn damped_cells(&self) -> usize {
        self.factors.iter().filter(|f| **f < 1.0).count()
    }
}
