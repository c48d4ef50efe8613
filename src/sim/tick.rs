//! Fixed timestep simulation tick
//!
//! The entire per-frame step lives here: paddle movement, ball integration,
//! wall and paddle collision response, scoring, and reset. One call advances
//! exactly one 60 Hz tick; velocities are in pixels per tick.

use crate::consts::*;

use super::state::{Ball, GameState, Paddle, Side};

/// Held-key state for one paddle.
///
/// Movement is continuous key-state polling: the paddle moves only while a
/// key is held. Opposite keys held together cancel to zero, holding the
/// paddle still.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    /// Movement axis for this tick: -1 up, 0 hold, +1 down
    pub fn axis(&self) -> i32 {
        self.down as i32 - self.up as i32
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

/// What happened during one tick, for logging and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    /// Ball reflected off the top or bottom wall
    pub wall_bounce: bool,
    /// Ball reflected off this side's paddle
    pub paddle_hit: Option<Side>,
    /// This side won the point (at most one per tick)
    pub scorer: Option<Side>,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    state.tick_count += 1;
    let mut events = TickEvents::default();

    // Paddles: clamped move from the held-key axes
    state.left_paddle.advance(input.left.axis());
    state.right_paddle.advance(input.right.axis());

    // Ball: fixed-step Euler integration
    state.ball.pos += state.ball.vel;

    // Top/bottom walls: clamp flush and reflect. Clamping keeps the ball
    // from creeping through the wall over consecutive ticks.
    if state.ball.top() <= 0.0 {
        state.ball.set_top(0.0);
        state.ball.vel.y = -state.ball.vel.y;
        events.wall_bounce = true;
    } else if state.ball.bottom() >= PLAYFIELD_H {
        state.ball.set_bottom(PLAYFIELD_H);
        state.ball.vel.y = -state.ball.vel.y;
        events.wall_bounce = true;
    }

    // Paddles: tested only when the ball is moving toward the paddle, so a
    // single approach reflects exactly once even if overlap persists.
    if state.ball.vel.x < 0.0 && state.ball.overlaps(&state.left_paddle) {
        let face = state.left_paddle.x + PADDLE_W;
        state.ball.set_left(face);
        paddle_bounce(&mut state.ball, &state.left_paddle);
        events.paddle_hit = Some(Side::Left);
    } else if state.ball.vel.x > 0.0 && state.ball.overlaps(&state.right_paddle) {
        state.ball.set_right(state.right_paddle.x);
        paddle_bounce(&mut state.ball, &state.right_paddle);
        events.paddle_hit = Some(Side::Right);
    }

    // Scoring: crossing a side boundary awards the opposite player and
    // serves toward the loser. Exclusive per tick.
    if state.ball.left() <= 0.0 {
        state.score.point_to(Side::Right);
        state.serve(Side::Left);
        events.scorer = Some(Side::Right);
    } else if state.ball.right() >= PLAYFIELD_W {
        state.score.point_to(Side::Left);
        state.serve(Side::Right);
        events.scorer = Some(Side::Left);
    }

    events
}

/// Reflect the ball off a paddle face and apply spin.
///
/// The horizontal velocity flips; the vertical velocity is set from the
/// contact offset between ball center and paddle center, normalized by half
/// the paddle height and clamped to the maximum vertical speed. Center
/// contact kills all spin, edge contact imparts the maximum.
fn paddle_bounce(ball: &mut Ball, paddle: &Paddle) {
    ball.vel.x = -ball.vel.x;
    let offset = (ball.center().y - paddle.center_y()) / (PADDLE_H / 2.0);
    ball.vel.y = (offset * BALL_MAX_SPEED_Y).clamp(-BALL_MAX_SPEED_Y, BALL_MAX_SPEED_Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// State with the ball parked center-field and motionless, so each test
    /// positions it explicitly.
    fn quiet_state() -> GameState {
        let mut state = GameState::new(12345);
        state.ball.vel = Vec2::ZERO;
        state
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let held = PaddleInput {
            up: true,
            down: true,
        };
        assert_eq!(held.axis(), 0);

        let mut state = quiet_state();
        let y_before = state.left_paddle.y;
        let input = TickInput {
            left: held,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.left_paddle.y, y_before);
    }

    #[test]
    fn test_top_wall_reflects_and_clamps() {
        let mut state = quiet_state();
        state.ball.set_top(3.0);
        state.ball.vel = Vec2::new(0.0, -5.0);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.wall_bounce);
        assert_eq!(state.ball.top(), 0.0);
        assert_eq!(state.ball.vel.y, 5.0);
    }

    #[test]
    fn test_bottom_wall_reflects_and_clamps() {
        let mut state = quiet_state();
        state.ball.set_bottom(PLAYFIELD_H - 2.0);
        state.ball.vel = Vec2::new(0.0, 6.0);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.wall_bounce);
        assert_eq!(state.ball.bottom(), PLAYFIELD_H);
        assert_eq!(state.ball.vel.y, -6.0);
    }

    #[test]
    fn test_center_contact_gives_no_spin() {
        let mut state = quiet_state();
        // Approaching the left paddle, centers vertically aligned
        state.ball.set_left(state.left_paddle.x + PADDLE_W + 2.0);
        state.ball.set_top(state.left_paddle.center_y() - BALL_SIZE / 2.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert_eq!(state.ball.vel.x, 6.0);
        assert_eq!(state.ball.vel.y, 0.0);
        // Leading edge flush against the paddle face
        assert_eq!(state.ball.left(), state.left_paddle.x + PADDLE_W);
    }

    #[test]
    fn test_edge_contact_gives_max_spin() {
        let mut state = quiet_state();
        // Ball center lands exactly on the paddle's bottom edge
        let paddle_bottom = state.left_paddle.y + PADDLE_H;
        state.ball.set_left(state.left_paddle.x + PADDLE_W + 2.0);
        state.ball.set_top(paddle_bottom - BALL_SIZE / 2.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.y, BALL_MAX_SPEED_Y);
    }

    #[test]
    fn test_one_flip_per_approach() {
        let mut state = quiet_state();
        state.ball.set_left(state.left_paddle.x + PADDLE_W + 2.0);
        state.ball.set_top(state.left_paddle.center_y() - BALL_SIZE / 2.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);

        let first = tick(&mut state, &TickInput::default());
        assert_eq!(first.paddle_hit, Some(Side::Left));
        assert!(state.ball.vel.x > 0.0);

        // Following ticks move away from the paddle; no second flip
        for _ in 0..5 {
            let events = tick(&mut state, &TickInput::default());
            assert_eq!(events.paddle_hit, None);
            assert!(state.ball.vel.x > 0.0);
        }
    }

    #[test]
    fn test_left_exit_scores_right_and_serves_toward_loser() {
        let mut state = quiet_state();
        state.ball.pos = Vec2::new(0.0, 250.0 - BALL_SIZE / 2.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);
        // Keep the left paddle out of the ball's path
        state.left_paddle.y = 0.0;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.scorer, Some(Side::Right));
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.ball.center(), Vec2::new(400.0, 250.0));
        // Serve travels toward the side that just lost the point
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_right_exit_scores_left() {
        let mut state = quiet_state();
        state.ball.set_right(PLAYFIELD_W - 3.0);
        state.ball.set_top(10.0);
        state.ball.vel = Vec2::new(6.0, 0.0);
        state.right_paddle.y = PLAYFIELD_H - PADDLE_H;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.scorer, Some(Side::Left));
        assert_eq!(state.score.left, 1);
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_scoring_exclusive_per_tick() {
        let mut state = quiet_state();
        state.ball.pos = Vec2::new(-20.0, 100.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);
        state.left_paddle.y = PLAYFIELD_H - PADDLE_H;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score.left + state.score.right, 1);
    }

    #[test]
    fn test_rally_is_deterministic_per_seed() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        let input = TickInput {
            left: PaddleInput {
                up: true,
                down: false,
            },
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a.tick_count, b.tick_count);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert_eq!(a.score.left, b.score.left);
        assert_eq!(a.score.right, b.score.right);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_paddle_input() -> impl Strategy<Value = PaddleInput> {
            (any::<bool>(), any::<bool>()).prop_map(|(up, down)| PaddleInput { up, down })
        }

        proptest! {
            /// Paddle y never leaves [0, PLAYFIELD_H - PADDLE_H], whatever
            /// the key sequence
            #[test]
            fn paddle_stays_in_bounds(
                seed in any::<u64>(),
                inputs in proptest::collection::vec(arb_paddle_input(), 1..300),
            ) {
                let mut state = GameState::new(seed);
                for held in inputs {
                    let input = TickInput { left: held, right: held };
                    tick(&mut state, &input);
                    prop_assert!(state.left_paddle.y >= 0.0);
                    prop_assert!(state.left_paddle.y <= PLAYFIELD_H - PADDLE_H);
                    prop_assert!(state.right_paddle.y >= 0.0);
                    prop_assert!(state.right_paddle.y <= PLAYFIELD_H - PADDLE_H);
                }
            }

            /// After wall handling the ball is always fully inside vertical
            /// bounds, and its vertical speed never exceeds the spin clamp
            #[test]
            fn ball_stays_in_vertical_bounds(seed in any::<u64>(), ticks in 1usize..2000) {
                let mut state = GameState::new(seed);
                for _ in 0..ticks {
                    tick(&mut state, &TickInput::default());
                    prop_assert!(state.ball.top() >= 0.0);
                    prop_assert!(state.ball.bottom() <= PLAYFIELD_H);
                    prop_assert!(state.ball.vel.y.abs() <= BALL_MAX_SPEED_Y);
                }
            }

            /// Scores only ever go up, by at most one point per tick
            #[test]
            fn score_is_monotonic(seed in any::<u64>(), ticks in 1usize..2000) {
                let mut state = GameState::new(seed);
                let mut prev = state.score;
                for _ in 0..ticks {
                    tick(&mut state, &TickInput::default());
                    prop_assert!(state.score.left >= prev.left);
                    prop_assert!(state.score.right >= prev.right);
                    let gained =
                        (state.score.left - prev.left) + (state.score.right - prev.right);
                    prop_assert!(gained <= 1);
                    prev = state.score;
                }
            }
        }
    }
}
