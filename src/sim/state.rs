//! Game state and core simulation types
//!
//! Everything is a plain value struct, created once at startup and mutated
//! in place each tick.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Which half of the playfield a paddle or player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposing side
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal unit direction pointing toward this side
    pub fn toward(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// A player paddle. The x position is fixed for the process lifetime,
/// only y changes.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    /// Create a paddle vertically centered on its side of the playfield
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => PLAYFIELD_W - PADDLE_INSET - PADDLE_W,
        };
        Self {
            side,
            x,
            y: (PLAYFIELD_H - PADDLE_H) / 2.0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_H / 2.0
    }

    /// Move by `axis` (-1 up, 0 hold, +1 down) at paddle speed, clamped so
    /// the paddle stays fully inside the playfield
    pub fn advance(&mut self, axis: i32) {
        self.y = (self.y + axis as f32 * PADDLE_SPEED).clamp(0.0, PLAYFIELD_H - PADDLE_H);
    }
}

/// The ball - an axis-aligned square. `pos` is the top-left corner,
/// matching the edge accessors below.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + BALL_SIZE
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + BALL_SIZE
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BALL_SIZE / 2.0)
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - BALL_SIZE;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - BALL_SIZE;
    }

    /// Axis-aligned overlap test against a paddle
    pub fn overlaps(&self, paddle: &Paddle) -> bool {
        self.left() < paddle.x + PADDLE_W
            && self.right() > paddle.x
            && self.top() < paddle.y + PADDLE_H
            && self.bottom() > paddle.y
    }
}

/// Match score. Counts only ever go up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn point_to(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Complete game state, owned by the event loop and stepped synchronously
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Serve-direction RNG (only source of randomness in the simulation)
    pub rng: Pcg32,
    /// Simulation tick counter
    pub tick_count: u64,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Create a fresh game. The opening serve travels toward the right
    /// player with a randomized vertical direction.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick_count: 0,
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
            score: Score::default(),
        };
        state.serve(Side::Right);
        state
    }

    /// Re-center the ball and send it toward `receiver` (after a point,
    /// the player who was just scored against). Horizontal speed is fixed;
    /// the vertical direction is drawn from the seeded RNG so rallies stay
    /// deterministic while serves vary.
    pub fn serve(&mut self, receiver: Side) {
        self.ball.pos = Vec2::new(
            (PLAYFIELD_W - BALL_SIZE) / 2.0,
            (PLAYFIELD_H - BALL_SIZE) / 2.0,
        );
        let vy_dir = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vel = Vec2::new(
            BALL_SERVE_SPEED_X * receiver.toward(),
            BALL_SERVE_SPEED_Y * vy_dir,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddles_start_centered() {
        let state = GameState::new(1);
        assert_eq!(state.left_paddle.x, PADDLE_INSET);
        assert_eq!(state.right_paddle.x, PLAYFIELD_W - PADDLE_INSET - PADDLE_W);
        assert_eq!(state.left_paddle.center_y(), PLAYFIELD_H / 2.0);
        assert_eq!(state.right_paddle.center_y(), PLAYFIELD_H / 2.0);
    }

    #[test]
    fn test_opening_serve_goes_right() {
        let state = GameState::new(42);
        assert_eq!(state.ball.center(), Vec2::new(400.0, 250.0));
        assert_eq!(state.ball.vel.x, BALL_SERVE_SPEED_X);
        assert_eq!(state.ball.vel.y.abs(), BALL_SERVE_SPEED_Y);
    }

    #[test]
    fn test_serve_direction_toward_receiver() {
        let mut state = GameState::new(7);
        state.serve(Side::Left);
        assert!(state.ball.vel.x < 0.0);
        state.serve(Side::Right);
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_serve_is_deterministic_per_seed() {
        let a = GameState::new(99999);
        let b = GameState::new(99999);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_paddle_advance_clamps() {
        let mut paddle = Paddle::new(Side::Left);
        for _ in 0..1000 {
            paddle.advance(-1);
        }
        assert_eq!(paddle.y, 0.0);
        for _ in 0..1000 {
            paddle.advance(1);
        }
        assert_eq!(paddle.y, PLAYFIELD_H - PADDLE_H);
    }
}
