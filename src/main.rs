mod app;

use winit::event_loop::{ControlFlow, EventLoop};

use pool_ripples::config::SimulationParameters;
use pool_ripples::simulation::Simulation;

use crate::app::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let simulation = Simulation::new(SimulationParameters::default())?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(simulation);
    event_loop.run_app(&mut app)?;
    Ok(())
}
