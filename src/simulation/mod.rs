pub mod damping;
pub mod disturbance;
pub mod grid;
pub mod runner;
pub mod stepper;

pub use damping::{damping, DampingProfile};
pub use disturbance::{inject, pointer_to_cell, InputEvent, InteractionState};
pub use grid::{FieldBuffers, Grid, HeightField};
pub use runner::{FrameSink, RunState, Simulation};
pub use stepper::WaveStepper;
