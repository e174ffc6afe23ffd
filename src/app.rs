use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use pool_ripples::gpu::GpuRenderer;
use pool_ripples::simulation::{InputEvent, RunState, Simulation};

/// Application state
pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<GpuRenderer>,
    simulation: Simulation,
    /// Input collected since the last frame, drained at the start of the next one
    pending: Vec<InputEvent>,
    fps_counter: FpsCounter,
}

impl App {
    pub fn new(simulation: Simulation) -> Self {
        Self {
            window: None,
            renderer: None,
            simulation,
            pending: Vec::new(),
            fps_counter: FpsCounter::new(),
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let events = std::mem::take(&mut self.pending);
        if self.simulation.advance(events, renderer) == RunState::Stopped {
            log::info!("Simulation stopped after {} steps", self.simulation.step_count());
            event_loop.exit();
            return;
        }

        if let Some(fps) = self.fps_counter.tick() {
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "Pool Ripples - {:.0} FPS - step {} - separation {}",
                    fps,
                    self.simulation.step_count(),
                    self.simulation.interaction().source_separation
                ));
            }
        }
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        let event = match key_code {
            KeyCode::Escape => InputEvent::Quit,
            KeyCode::ArrowUp => InputEvent::SeparationIncrease,
            KeyCode::ArrowDown => InputEvent::SeparationDecrease,
            KeyCode::KeyR => InputEvent::Reset,
            _ => return,
        };
        self.pending.push(event);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Initializing Pool Ripples...");
        let (width, height) = self.simulation.params().display_size();

        let window_attrs = Window::default_attributes()
            .with_title("Pool Ripples - Initializing...")
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        self.simulation.set_display_size(size.width, size.height);

        let grid = self.simulation.grid();
        let renderer = GpuRenderer::new(window.clone(), grid.nx as u32, grid.ny as u32);

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  Left mouse: Disturb the surface");
        log::info!("  Wheel/Up/Down: Adjust source separation");
        log::info!("  R: Reset the surface");
        log::info!("  Escape: Quit");

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                self.pending.push(InputEvent::Quit);
                self.frame(event_loop);
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        self.handle_key(key_code);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pending.push(InputEvent::PointerMoved {
                    x: position.x,
                    y: position.y,
                });
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.pending
                    .push(InputEvent::PointerPressed(state == ElementState::Pressed));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(y),
                    MouseScrollDelta::PixelDelta(pos) => pos.y,
                };
                if dy > 0.0 {
                    self.pending.push(InputEvent::SeparationIncrease);
                } else if dy < 0.0 {
                    self.pending.push(InputEvent::SeparationDecrease);
                }
            }
            WindowEvent::Resized(new_size) => {
                log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                self.simulation
                    .set_display_size(new_size.width, new_size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Simple FPS counter
struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
