//! Shape generation for 2D primitives
//!
//! Everything on screen is built from filled rectangles: paddles, ball,
//! the dashed center line, and seven-segment score digits.

use glam::Vec2;

use super::vertex::Vertex;
use crate::consts::{PLAYFIELD_H, PLAYFIELD_W};

/// Generate vertices for a filled axis-aligned rectangle (two triangles).
/// `pos` is the top-left corner in playfield coordinates.
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

const DASH_H: f32 = 14.0;
const DASH_GAP: f32 = 12.0;
const DASH_W: f32 = 4.0;

/// Generate vertices for the dashed vertical center line
pub fn center_line(color: [f32; 4]) -> Vec<Vertex> {
    let x = PLAYFIELD_W / 2.0 - DASH_W / 2.0;
    let mut vertices = Vec::new();
    let mut y = 0.0;
    while y < PLAYFIELD_H {
        let dash_h = DASH_H.min(PLAYFIELD_H - y);
        vertices.extend(rect(Vec2::new(x, y), Vec2::new(DASH_W, dash_h), color));
        y += DASH_H + DASH_GAP;
    }
    vertices
}

// Seven-segment bitmasks, bits a..g = top, top-right, bottom-right,
// bottom, bottom-left, top-left, middle
const SEGMENTS: [u8; 10] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
];

pub const DIGIT_W: f32 = 28.0;
pub const DIGIT_H: f32 = 48.0;
pub const DIGIT_GAP: f32 = 10.0;
const SEG_T: f32 = 6.0;

/// Generate vertices for a single seven-segment digit with its top-left
/// corner at `pos`
pub fn digit(value: u8, pos: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mask = SEGMENTS[(value % 10) as usize];
    let half_h = DIGIT_H / 2.0;
    let mut vertices = Vec::new();

    // (bit, top-left offset, size)
    let segments = [
        (0, Vec2::ZERO, Vec2::new(DIGIT_W, SEG_T)), // a: top
        (1, Vec2::new(DIGIT_W - SEG_T, 0.0), Vec2::new(SEG_T, half_h)), // b: top-right
        (2, Vec2::new(DIGIT_W - SEG_T, half_h), Vec2::new(SEG_T, half_h)), // c: bottom-right
        (3, Vec2::new(0.0, DIGIT_H - SEG_T), Vec2::new(DIGIT_W, SEG_T)), // d: bottom
        (4, Vec2::new(0.0, half_h), Vec2::new(SEG_T, half_h)), // e: bottom-left
        (5, Vec2::ZERO, Vec2::new(SEG_T, half_h)),  // f: top-left
        (6, Vec2::new(0.0, half_h - SEG_T / 2.0), Vec2::new(DIGIT_W, SEG_T)), // g: middle
    ];

    for (bit, offset, size) in segments {
        if mask & (1 << bit) != 0 {
            vertices.extend(rect(pos + offset, size, color));
        }
    }

    vertices
}

/// Generate vertices for a whole number, horizontally centered on
/// `center_x` with its top edge at `top`
pub fn number(value: u32, center_x: f32, top: f32, color: [f32; 4]) -> Vec<Vertex> {
    let digits: Vec<u8> = value
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect();

    let total_w = digits.len() as f32 * DIGIT_W + (digits.len() - 1) as f32 * DIGIT_GAP;
    let mut x = center_x - total_w / 2.0;

    let mut vertices = Vec::new();
    for d in digits {
        vertices.extend(digit(d, Vec2::new(x, top), color));
        x += DIGIT_W + DIGIT_GAP;
    }
    vertices
}
