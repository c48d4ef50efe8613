//! Window, keyboard input, and the fixed-timestep game loop
//!
//! The winit event loop owns all state; the simulation advances in whole
//! 60 Hz ticks from an accumulator, decoupled from the render rate.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use crate::consts::*;
use crate::renderer::{RenderState, build_frame};
use crate::sim::{GameState, TickInput, tick};

pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    state: GameState,
    input: TickInput,
    last_frame: Option<Instant>,
    accumulator: f32,
}

impl App {
    pub fn new(seed: u64) -> Self {
        Self {
            window: None,
            renderer: None,
            state: GameState::new(seed),
            input: TickInput::default(),
            last_frame: None,
            accumulator: 0.0,
        }
    }

    /// Update held-key state from a keyboard event. Unrecognized keys are
    /// ignored; Escape quits.
    fn handle_key(&mut self, event: &KeyEvent, event_loop: &ActiveEventLoop) {
        let held = event.state == ElementState::Pressed;
        match &event.logical_key {
            Key::Character(c) => match c.as_str() {
                "w" | "W" => self.input.left.up = held,
                "s" | "S" => self.input.left.down = held,
                _ => {}
            },
            Key::Named(NamedKey::ArrowUp) => self.input.right.up = held,
            Key::Named(NamedKey::ArrowDown) => self.input.right.down = held,
            Key::Named(NamedKey::Escape) => {
                if held {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    /// Run the simulation ticks owed since the last frame
    fn update(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_frame {
            // Cap the debt so a long stall can't trigger a tick avalanche
            self.accumulator += now.duration_since(last).as_secs_f32().min(0.1);
        }
        self.last_frame = Some(now);

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            let events = tick(&mut self.state, &self.input);
            self.accumulator -= TICK_DT;
            substeps += 1;

            if let Some(side) = events.scorer {
                log::info!(
                    "point to {:?} - score {}:{}",
                    side,
                    self.state.score.left,
                    self.state.score.right
                );
            }
        }
        if substeps == MAX_SUBSTEPS {
            // Still behind after the cap; drop the remainder
            self.accumulator = self.accumulator.min(TICK_DT);
        }
    }

    /// Render the current frame
    fn render(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(renderer) = &mut self.renderer {
            let vertices = build_frame(&self.state);
            match renderer.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = renderer.size;
                    renderer.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("retro-pong")
            .with_inner_size(LogicalSize::new(PLAYFIELD_W as f64, PLAYFIELD_H as f64))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let renderer = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width.max(1),
            size.height.max(1),
        ));

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.last_frame = Some(Instant::now());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if !event.repeat {
                    self.handle_key(&event, event_loop);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.update();
                self.render(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
