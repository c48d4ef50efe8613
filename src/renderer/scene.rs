//! Frame assembly
//!
//! Turns a `GameState` into the vertex list for one frame.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::GameState;

/// Vertical position of the score readouts
const SCORE_TOP: f32 = 30.0;

/// Build the complete vertex list for the current frame
pub fn build_frame(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(256);

    vertices.extend(shapes::center_line(colors::CENTER_LINE));

    for paddle in [&state.left_paddle, &state.right_paddle] {
        vertices.extend(shapes::rect(
            Vec2::new(paddle.x, paddle.y),
            Vec2::new(PADDLE_W, PADDLE_H),
            colors::PADDLE,
        ));
    }

    vertices.extend(shapes::rect(
        state.ball.pos,
        Vec2::splat(BALL_SIZE),
        colors::BALL,
    ));

    vertices.extend(shapes::number(
        state.score.left,
        PLAYFIELD_W / 4.0,
        SCORE_TOP,
        colors::SCORE,
    ));
    vertices.extend(shapes::number(
        state.score.right,
        PLAYFIELD_W * 3.0 / 4.0,
        SCORE_TOP,
        colors::SCORE,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_has_all_elements() {
        let state = GameState::new(1);
        let vertices = build_frame(&state);
        // 2 paddles + ball + at least one dash and two digits
        assert!(vertices.len() > 3 * 6 + 6 + 2 * 6);
        // Everything inside the playfield
        for v in &vertices {
            assert!(v.position[0] >= 0.0 && v.position[0] <= PLAYFIELD_W);
            assert!(v.position[1] >= 0.0 && v.position[1] <= PLAYFIELD_H);
        }
    }
}
