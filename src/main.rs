//! Retro Pong entry point

use std::time::{SystemTime, UNIX_EPOCH};

use winit::error::EventLoopError;
use winit::event_loop::{ControlFlow, EventLoop};

use retro_pong::app::App;

fn main() -> Result<(), EventLoopError> {
    env_logger::init();

    // Seed only controls serve directions; logged so a run can be replayed
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Retro Pong starting with seed {}", seed);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(seed);
    event_loop.run_app(&mut app)
}
