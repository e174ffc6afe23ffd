use crate::config::{SimulationParameters, CFL_LIMIT};
use crate::error::ConfigError;
use crate::simulation::damping::DampingProfile;
use crate::simulation::disturbance::{self, InputEvent, InteractionState};
use crate::simulation::grid::{FieldBuffers, Grid, HeightField};
use crate::simulation::stepper::WaveStepper;

/// Consumer of one rendered generation per frame
pub trait FrameSink {
    fn present(&mut self, field: &HeightField);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Simulation context: geometry, fields and interaction state.
pub struct Simulation {
    params: SimulationParameters,
    grid: Grid,
    buffers: FieldBuffers,
    damping: DampingProfile,
    stepper: WaveStepper,
    interaction: InteractionState,
    /// Current display size in pixels, used to map pointer positions
    display: (u32, u32),
    state: RunState,
}

impl Simulation {
    pub fn new(params: SimulationParameters) -> Result<Self, ConfigError> {
        params.validate()?;

        let cfl = params.cfl_number();
        if cfl > CFL_LIMIT {
            log::warn!(
                "CFL number {:.3} exceeds {:.3}, the field will diverge",
                cfl,
                CFL_LIMIT
            );
        }

        let grid = Grid::from_params(&params);
        let damping = DampingProfile::new(&grid, params.damping_factor, params.damping_zone_width);
        log::info!(
            "Grid {}x{} (dx={:.4}, dy={:.4}), {} damped cells, CFL {:.3}",
            grid.nx,
            grid.ny,
            grid.dx,
            grid.dy,
            damping.damped_cells(),
            cfl
        );

        Ok(Self {
            buffers: FieldBuffers::new(&grid),
            stepper: WaveStepper::new(&grid, params.wave_speed, params.time_step),
            interaction: InteractionState::new(&grid, params.source_separation),
            display: params.display_size(),
            state: RunState::Running,
            damping,
            grid,
            params,
        })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn buffers(&self) -> &FieldBuffers {
        &self.buffers
    }

    /// Direct field access for seeding initial conditions
    pub fn buffers_mut(&mut self) -> &mut FieldBuffers {
        &mut self.buffers
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn step_count(&self) -> u64 {
        self.interaction.t
    }

    pub fn set_display_size(&mut self, width: u32, height: u32) {
        self.display = (width, height);
    }

    /// Run one frame: apply input, inject, step, present, rotate, advance time.
    ///
    /// The presented field is the post-injection `current`, one generation
    /// behind the freshly computed `next`. Nothing happens once stopped.
    pub fn advance<I, S>(&mut self, events: I, sink: &mut S) -> RunState
    where
        I: IntoIterator<Item = InputEvent>,
        S: FrameSink + ?Sized,
    {
        if self.state == RunState::Stopped {
            return self.state;
        }

        for event in events {
            self.apply(event);
        }
        if self.state == RunState::Stopped {
            return self.state;
        }

        disturbance::inject(&mut self.buffers.current, &self.interaction);
        self.stepper.step(&mut self.buffers, &self.damping);
        sink.present(&self.buffers.current);
        self.buffers.rotate();
        self.interaction.t += 1;

        let limit = self.params.max_iterations;
        if limit > 0 && self.interaction.t > limit {
            log::info!(
                "Iteration limit {} reached, stopping (peak height {:.3})",
                limit,
                self.buffers.current.max_abs()
            );
            self.state = RunState::Stopped;
        }
        self.state
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                log::info!("Quit requested at step {}", self.interaction.t);
                self.state = RunState::Stopped;
            }
            InputEvent::PointerMoved { x, y } => {
                self.interaction.pointer_cell =
                    disturbance::pointer_to_cell(x, y, self.display, &self.grid);
                log::trace!("Pointer at ({:.0}, {:.0}) -> {:?}", x, y, self.interaction.pointer_cell);
            }
            InputEvent::PointerPressed(pressed) => {
                self.interaction.pointer_pressed = pressed;
            }
            InputEvent::SeparationIncrease => self.interaction.increase_separation(&self.grid),
            InputEvent::SeparationDecrease => self.interaction.decrease_separation(),
            InputEvent::Reset => {
                self.buffers.clear();
                log::debug!("Fields reset at step {}", self.interaction.t);
            }
        }
    }
}
