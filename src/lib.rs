//! Retro Pong - the classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `app`: Window, keyboard input, and the fixed-timestep game loop

pub mod app;
pub mod renderer;
pub mod sim;

/// Game configuration constants
///
/// All speeds are in pixels per tick; the simulation advances one tick per
/// frame at a fixed 60 Hz and takes no delta-time.
pub mod consts {
    /// Simulation/render tick rate
    pub const TICK_RATE: u32 = 60;
    /// Fixed tick duration in seconds (frame pacing only, never fed to the sim)
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions in pixels
    pub const PLAYFIELD_W: f32 = 800.0;
    pub const PLAYFIELD_H: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_W: f32 = 12.0;
    pub const PADDLE_H: f32 = 100.0;
    /// Gap between each playfield edge and its paddle
    pub const PADDLE_INSET: f32 = 30.0;
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball defaults - the ball is an axis-aligned square
    pub const BALL_SIZE: f32 = 12.0;
    pub const BALL_SERVE_SPEED_X: f32 = 6.0;
    pub const BALL_SERVE_SPEED_Y: f32 = 4.0;
    /// Spin clamp: vertical ball speed never exceeds this magnitude
    pub const BALL_MAX_SPEED_Y: f32 = 8.0;
}
