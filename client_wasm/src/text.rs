//! Seven-segment digits built from rectangles, so no font has to be loaded

use game_core::Rect;
use glam::Vec2;

/// Glyph proportions relative to the glyph height
const WIDTH: f32 = 0.55;
const STROKE: f32 = 0.12;
const GAP: f32 = 0.2;

// Segment bits: a (top), b (upper right), c (lower right), d (bottom),
// e (lower left), f (upper left), g (middle)
const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

const DIGITS: [u8; 10] = [
    A | B | C | D | E | F,
    B | C,
    A | B | D | E | G,
    A | B | C | D | G,
    B | C | F | G,
    A | C | D | F | G,
    A | C | D | E | F | G,
    A | B | C,
    A | B | C | D | E | F | G,
    A | B | C | D | F | G,
];

/// Horizontal distance from one glyph's left edge to the next
pub fn advance(height: f32) -> f32 {
    (WIDTH + GAP) * height
}

/// Rectangles for one segment mask, in a glyph whose top-left is `origin`
fn segments(mask: u8, origin: Vec2, height: f32) -> impl Iterator<Item = Rect> {
    let w = WIDTH * height;
    let t = STROKE * height;
    let half = (height - t) / 2.0;

    let all = [
        (A, Rect::new(0.0, 0.0, w, t)),
        (B, Rect::new(w - t, 0.0, t, half + t)),
        (C, Rect::new(w - t, half, t, half + t)),
        (D, Rect::new(0.0, height - t, w, t)),
        (E, Rect::new(0.0, half, t, half + t)),
        (F, Rect::new(0.0, 0.0, t, half + t)),
        (G, Rect::new(0.0, half, w, t)),
    ];

    all.into_iter()
        .filter(move |(bit, _)| mask & bit != 0)
        .map(move |(_, mut rect)| {
            rect.translate(origin);
            rect
        })
}

/// Lay out `text` as rectangles. Characters other than digits leave a blank.
pub fn layout(text: &str, top_left: Vec2, height: f32) -> Vec<Rect> {
    let mut rects = Vec::new();
    let mut origin = top_left;

    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            rects.extend(segments(DIGITS[digit as usize], origin, height));
        }
        origin.x += advance(height);
    }
    rects
}
