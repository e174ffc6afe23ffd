//! Explicit leapfrog integrator for the 2D wave equation.
//!
//! ```text
//! next = c² dt² ∇²current + 2 current - previous
//! ```
//!
//! Interior cells follow the update; the boundary ring of `next` is held at
//! zero (fixed edge). Stability is conditional on the CFL number and is left to the
//! caller.

use crate::simulation::damping::DampingProfile;
use crate::simulation::grid::{FieldBuffers, Grid, HeightField};

/// Constant coefficients of the update
#[derive(Clone, Copy, Debug)]
pub struct WaveStepper {
    /// c² dt²
    courant_sq: f64,
    inv_dx_sq: f64,
    inv_dy_sq: f64,
}

impl WaveStepper {
    pub fn new(grid: &Grid, wave_speed: f64, time_step: f64) -> Self {
        Self {
            courant_sq: wave_speed * wave_speed * time_step * time_step,
            inv_dx_sq: 1.0 / (grid.dx * grid.dx),
            inv_dy_sq: 1.0 / (grid.dy * grid.dy),
        }
    }

    /// Populate `buffers.next` from `previous` and `current`, then attenuate all
    /// three generations by the damping profile.
    ///
    /// Damping runs as a second pass so no cell reads an already-damped
    /// neighbor while `next` is being computed. Fields without an interior
    /// cell are left untouched.
    pub fn step(&self, buffers: &mut FieldBuffers, damping: &DampingProfile) {
        let FieldBuffers {
            previous,
            current,
            next,
        } = buffers;
        let nx = current.nx();
        let ny = current.ny();
        if nx < 3 || ny < 3 {
            return;
        }

        // `next` is recycled storage from two generations back
        clear_boundary(next);

        for x in 1..nx - 1 {
            for y in 1..ny - 1 {
                next[(x, y)] = self.leapfrog(previous, current, x, y);
            }
        }

        for x in 1..nx - 1 {
            for y in 1..ny - 1 {
                let factor = damping.at(x, y);
                if factor < 1.0 {
                    next[(x, y)] *= factor;
                    current[(x, y)] *= factor;
                    previous[(x, y)] *= factor;
                }
            }
        }
    }

    #[inline]
    fn leapfrog(&self, previous: &HeightField, current: &HeightField, x: usize, y: usize) -> f64 {
        let center = current[(x, y)];
        let laplacian = (current[(x + 1, y)] - 2.0 * center + current[(x - 1, y)]) * self.inv_dx_sq
            + (current[(x, y + 1)] - 2.0 * center + current[(x, y - 1)]) * self.inv_dy_sq;
        self.courant_sq * laplacian + 2.0 * center - previous[(x, y)]
    }
}

fn clear_boundary(field: &mut HeightField) {
    let (nx, ny) = (field.nx(), field.ny());
    for x in 0..nx {
        field[(x, 0)] = 0.0;
        field[(x, ny - 1)] = 0.0;
    }
    for y in 0..ny {
        field[(0, y)] = 0.0;
        field[(nx - 1, y)] = 0.0;
    }
}
