use crate::error::ConfigError;

/// Grid resolution (cells along each axis)
pub const GRID_NX: usize = 90;
pub const GRID_NY: usize = 90;

/// Physical extent of the pool along each axis
pub const POOL_LX: f64 = 9.0;
pub const POOL_LY: f64 = 9.0;

/// Display pixels per grid cell
pub const RENDER_SCALE: u32 = 5;

// ============================================
// Wave Equation Parameters
// ============================================

/// Base time step (CFL: c*dt/min(dx,dy) must stay below 1/sqrt(2))
pub const TIME_STEP: f64 = 0.025;

/// Wave propagation speed
pub const WAVE_SPEED: f64 = 1.0;

/// Number of iterations before the loop stops (0 = run until quit)
pub const MAX_ITERATIONS: u64 = 4000;

// ============================================
// Absorbing Boundary
// ============================================

/// Attenuation base applied near the edges, raised to the proximity ratio
pub const DAMPING_FACTOR: f64 = 0.930;

/// Width of the damping band in cells
pub const DAMPING_ZONE_WIDTH: usize = 12;

// ============================================
// Sources
// ============================================

/// Column holding the two continuous emitters
pub const SOURCE_COLUMN: usize = 20;

/// Peak height added by each emitter per step
pub const SOURCE_AMPLITUDE: f64 = 0.4;

/// Step counter divisor inside the emitter's sine
pub const SOURCE_PERIOD_DIVISOR: f64 = 5.0;

/// Initial half-distance between the emitters, in cells
pub const DEFAULT_SOURCE_SEPARATION: usize = 15;

/// Height added under a pressed pointer per frame
pub const POINTER_INCREMENT: f64 = 0.4;

/// Leapfrog stability limit for the 2D five-point stencil
pub const CFL_LIMIT: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Everything needed to build a simulation. Fixed for the simulation's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParameters {
    pub nx: usize,
    pub ny: usize,
    pub lx: f64,
    pub ly: f64,
    pub wave_speed: f64,
    pub time_step: f64,
    pub damping_factor: f64,
    pub damping_zone_width: usize,
    /// 0 means unbounded
    pub max_iterations: u64,
    pub source_separation: usize,
    pub render_scale: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            nx: GRID_NX,
            ny: GRID_NY,
            lx: POOL_LX,
            ly: POOL_LY,
            wave_speed: WAVE_SPEED,
            time_step: TIME_STEP,
            damping_factor: DAMPING_FACTOR,
            damping_zone_width: DAMPING_ZONE_WIDTH,
            max_iterations: MAX_ITERATIONS,
            source_separation: DEFAULT_SOURCE_SEPARATION,
            render_scale: RENDER_SCALE,
        }
    }
}

impl SimulationParameters {
    /// Reject configurations the integrator cannot run with.
    ///
    /// Stability is not checked here; see [`SimulationParameters::cfl_number`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nx < 3 || self.ny < 3 {
            return Err(ConfigError::GridTooSmall {
                nx: self.nx,
                ny: self.ny,
            });
        }
        if !is_positive(self.lx) || !is_positive(self.ly) {
            return Err(ConfigError::NonPositiveExtent {
                lx: self.lx,
                ly: self.ly,
            });
        }
        if !is_positive(self.wave_speed) {
            return Err(ConfigError::NonPositiveWaveSpeed(self.wave_speed));
        }
        if !is_positive(self.time_step) {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(ConfigError::DampingFactorOutOfRange(self.damping_factor));
        }
        if self.render_scale == 0 {
            return Err(ConfigError::ZeroRenderScale);
        }
        Ok(())
    }

    /// Courant number `c * dt / min(dx, dy)`.
    pub fn cfl_number(&self) -> f64 {
        let dx = self.lx / self.nx as f64;
        let dy = self.ly / self.ny as f64;
        self.wave_speed * self.time_step / dx.min(dy)
    }

    /// Window size in physical pixels
    pub fn display_size(&self) -> (u32, u32) {
        (
            self.nx as u32 * self.render_scale,
            self.ny as u32 * self.render_scale,
        )
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
