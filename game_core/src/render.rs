//! Rendering boundary: the `Canvas` trait and the scene layout drawn onto it

use glam::Vec2;

use crate::error::RenderError;
use crate::map::Rect;
use crate::resources::Team;
use crate::state::GameState;

/// Linear RGBA
pub type Color = [f32; 4];

pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
pub const FOREGROUND: Color = [225.0 / 255.0, 225.0 / 255.0, 225.0 / 255.0, 1.0];

/// Layout numbers below are given for this arena size and scaled from it
const LAYOUT_SIDE: f32 = 1024.0;
const DASH_STEP: f32 = 45.0;
const DASH_WIDTH: f32 = 16.0;
const SCORE_HEIGHT: f32 = 100.0;
const WASD_SCORE_AT: Vec2 = Vec2::new(300.0, 300.0);
const ARROWS_SCORE_AT: Vec2 = Vec2::new(630.0, 630.0);

/// Drawing surface of a fixed size, in arena coordinates
pub trait Canvas {
    fn fill(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    /// Draw `text` with its top-left corner at `top_left`
    fn draw_text(&mut self, text: &str, top_left: Vec2, glyph_height: f32, color: Color);
    /// Show everything drawn since the last present
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Dashes of the diagonal running from bottom-left to top-right
pub fn centre_line_dashes(side: f32) -> Vec<(Vec2, Vec2)> {
    let scale = side / LAYOUT_SIDE;
    let step = DASH_STEP * scale;
    let half_width = DASH_WIDTH * scale / 2.0;

    let mut dashes = Vec::new();
    let mut x = 0.0;
    while x < side {
        let x0 = x - half_width;
        dashes.push((
            Vec2::new(x0, side - x0),
            Vec2::new(x0 + step, side - x0 - step),
        ));
        x += 2.0 * step;
    }
    dashes
}

pub fn dash_width(side: f32) -> f32 {
    DASH_WIDTH * side / LAYOUT_SIDE
}

/// Where a team's score is drawn: inside the half of the arena it defends
pub fn score_anchor(team: Team, side: f32) -> Vec2 {
    let scale = side / LAYOUT_SIDE;
    match team {
        Team::Wasd => WASD_SCORE_AT * scale,
        Team::Arrows => ARROWS_SCORE_AT * scale,
    }
}

/// Draw one complete frame of `state`, without presenting it
pub fn render_scene<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    let side = state.arena.side;

    canvas.fill(BACKGROUND);

    let glyph_height = SCORE_HEIGHT * side / LAYOUT_SIDE;
    for team in [Team::Wasd, Team::Arrows] {
        canvas.draw_text(
            &state.score.display(team),
            score_anchor(team, side),
            glyph_height,
            FOREGROUND,
        );
    }

    let width = dash_width(side);
    for (from, to) in centre_line_dashes(side) {
        canvas.draw_line(from, to, width, FOREGROUND);
    }

    if let Some(ball) = state.ball() {
        canvas.fill_circle(ball.center(), ball.radius(), FOREGROUND);
    }
    for paddle in state.paddles() {
        canvas.fill_rect(paddle.rect, FOREGROUND);
    }
}
