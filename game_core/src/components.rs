use glam::Vec2;
use rand::Rng;

use crate::input::{InputState, KeyBinding};
use crate::map::{Arena, Axis, Rect, Side};
use crate::resources::GameRng;

/// Whether the ball was re-served this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeState {
    InPlay,
    JustServed,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,       // Units per tick
    pub base_speed: f32, // Magnitude of each serve component
    pub growth: f32,     // Per-tick velocity multiplier
    pub state: ServeState,
}

impl Ball {
    /// Stationary ball at the arena centre; call `reset` to serve it
    pub fn new(radius: f32, base_speed: f32, growth: f32, arena: &Arena) -> Self {
        Self {
            rect: Rect::from_center_size(arena.center(), Vec2::splat(2.0 * radius)),
            vel: Vec2::ZERO,
            base_speed,
            growth,
            state: ServeState::JustServed,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn radius(&self) -> f32 {
        self.rect.size.x / 2.0
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Re-centre and serve along one of the four diagonals
    pub fn reset(&mut self, arena: &Arena, rng: &mut GameRng) {
        self.rect = Rect::from_center_size(arena.center(), self.rect.size);

        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let mut vel = Vec2::new(sx, sy) * self.base_speed;
        if rng.0.gen_bool(0.5) {
            vel = Vec2::new(vel.y, vel.x);
        }

        self.vel = vel;
        self.state = ServeState::JustServed;
        tracing::debug!(vx = vel.x, vy = vel.y, "serve");
    }

    /// Move one tick, bounce off solid walls, then grow the velocity.
    /// Returns true if a wall bounce happened.
    pub fn advance(&mut self, arena: &Arena) -> bool {
        self.state = ServeState::InPlay;
        self.rect.translate(self.vel);

        let side = arena.side;
        let mut bounced = false;

        if self.rect.left() < 0.0 && arena.is_solid(Side::Left) {
            self.vel.x = -self.vel.x;
            self.rect.pos.x = 0.0;
            bounced = true;
        } else if self.rect.right() > side && arena.is_solid(Side::Right) {
            self.vel.x = -self.vel.x;
            self.rect.pos.x = side - self.rect.size.x;
            bounced = true;
        }

        if self.rect.top() < 0.0 && arena.is_solid(Side::Top) {
            self.vel.y = -self.vel.y;
            self.rect.pos.y = 0.0;
            bounced = true;
        } else if self.rect.bottom() > side && arena.is_solid(Side::Bottom) {
            self.vel.y = -self.vel.y;
            self.rect.pos.y = side - self.rect.size.y;
            bounced = true;
        }

        self.vel *= self.growth;
        bounced
    }
}

/// Paddle component - one per wall
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
    pub thickness: f32,
    pub length: f32,
    pub speed: f32,
    pub keys: KeyBinding,
}

impl Paddle {
    /// Paddle centred along its wall, one thickness in from it
    pub fn new(
        thickness: f32,
        length: f32,
        side: Side,
        speed: f32,
        keys: KeyBinding,
        arena: &Arena,
    ) -> Self {
        let s = arena.side;
        let along = (s - length) / 2.0;
        let rect = match side {
            Side::Top => Rect::new(along, thickness, length, thickness),
            Side::Bottom => Rect::new(along, s - 2.0 * thickness, length, thickness),
            Side::Left => Rect::new(thickness, along, thickness, length),
            Side::Right => Rect::new(s - 2.0 * thickness, along, thickness, length),
        };
        Self {
            side,
            rect,
            thickness,
            length,
            speed,
            keys,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Dead zone kept clear at both ends of the wall
    pub fn margin(&self) -> f32 {
        2.0 * self.thickness
    }

    /// Edges along the movement axis: (leading, trailing)
    fn extent(&self) -> (f32, f32) {
        match self.side.axis() {
            Axis::X => (self.rect.left(), self.rect.right()),
            Axis::Y => (self.rect.top(), self.rect.bottom()),
        }
    }

    /// Slide along the wall according to the held keys
    pub fn move_with(&mut self, input: &InputState, arena: &Arena) {
        let (start, end) = self.extent();
        let margin = self.margin();
        let limit = arena.side - margin;

        let mut delta = 0.0;
        if input.is_held(self.keys.decrease) && start > margin {
            delta -= self.speed.min(start - margin);
        }
        if input.is_held(self.keys.increase) && end < limit {
            delta += self.speed.min(limit - end);
        }

        if delta != 0.0 {
            self.rect.translate(self.side.axis().vector(delta));
        }
    }

    /// True if the ball is travelling toward this paddle's wall
    pub fn is_approached_by(&self, ball: &Ball) -> bool {
        ball.vel.dot(self.side.outward()) > 0.0
    }

    /// Send the ball away at an angle set by where it hit.
    ///
    /// The offset from the paddle centre along the long axis is divided by
    /// the full paddle length, so contact within the paddle maps to angles
    /// between 60° and 120° and only the ball overhanging an end goes
    /// shallower. The cosine argument is clamped to keep `acos` defined.
    /// Speed is kept, direction is replaced.
    pub fn reflect(&self, ball: &mut Ball) {
        let vabs = ball.speed();
        let offset = self.side.axis().of(ball.center() - self.center());
        let angle = (offset / self.length).clamp(-1.0, 1.0).acos();

        let along = vabs * angle.cos();
        let away = vabs * angle.sin();

        ball.vel = match self.side {
            Side::Top => Vec2::new(along, away),
            Side::Bottom => Vec2::new(along, -away),
            Side::Left => Vec2::new(away, along),
            Side::Right => Vec2::new(-away, along),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::map::WallKind;
    use std::f32::consts::FRAC_PI_2;

    fn arena() -> Arena {
        Arena::new(1024.0)
    }

    fn paddle(side: Side) -> Paddle {
        Paddle::new(16.0, 128.0, side, 10.0, KeyBinding::for_side(side), &arena())
    }

    fn ball_at(center: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(16.0, 5.0, 1.0005, &arena());
        ball.rect = Rect::from_center_size(center, ball.rect.size);
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_paddle_spawn_positions() {
        assert_eq!(paddle(Side::Top).rect, Rect::new(448.0, 16.0, 128.0, 16.0));
        assert_eq!(
            paddle(Side::Bottom).rect,
            Rect::new(448.0, 992.0, 128.0, 16.0)
        );
        assert_eq!(paddle(Side::Left).rect, Rect::new(16.0, 448.0, 16.0, 128.0));
        assert_eq!(
            paddle(Side::Right).rect,
            Rect::new(992.0, 448.0, 16.0, 128.0)
        );
    }

    #[test]
    fn test_ball_reset_centers_and_serves_diagonally() {
        let mut rng = GameRng::new(7);
        let mut ball = ball_at(Vec2::new(3.0, 900.0), Vec2::ZERO);

        ball.reset(&arena(), &mut rng);

        assert_eq!(ball.center(), Vec2::new(512.0, 512.0));
        assert_eq!(ball.vel.x.abs(), 5.0);
        assert_eq!(ball.vel.y.abs(), 5.0);
        assert_eq!(ball.state, ServeState::JustServed);
    }

    #[test]
    fn test_ball_advance_moves_and_grows() {
        let mut ball = ball_at(Vec2::new(500.0, 500.0), Vec2::new(5.0, -5.0));

        let bounced = ball.advance(&arena());

        assert!(!bounced);
        assert_eq!(ball.center(), Vec2::new(505.0, 495.0));
        assert!((ball.vel.x - 5.0 * 1.0005).abs() < 1e-5);
        assert!((ball.vel.y + 5.0 * 1.0005).abs() < 1e-5);
        assert_eq!(ball.state, ServeState::InPlay);
    }

    #[test]
    fn test_ball_passes_through_goal_walls() {
        let mut ball = ball_at(Vec2::new(10.0, 500.0), Vec2::new(-20.0, 0.0));

        let bounced = ball.advance(&arena());

        assert!(!bounced);
        assert!(ball.vel.x < 0.0);
        assert!(ball.center().x < 0.0);
    }

    #[test]
    fn test_ball_bounces_off_solid_wall() {
        let arena = arena().with_wall(Side::Left, WallKind::Solid);
        let mut ball = ball_at(Vec2::new(18.0, 500.0), Vec2::new(-5.0, 3.0));

        let bounced = ball.advance(&arena);

        assert!(bounced);
        assert!(ball.vel.x > 0.0);
        assert_eq!(ball.rect.left(), 0.0, "Ball pushed back inside");
    }

    #[test]
    fn test_top_paddle_moves_with_keys() {
        let arena = arena();
        let mut top = paddle(Side::Top);
        let start = top.rect.left();

        let right: InputState = [Key::D].into_iter().collect();
        top.move_with(&right, &arena);
        assert_eq!(top.rect.left(), start + 10.0);

        let left: InputState = [Key::A].into_iter().collect();
        top.move_with(&left, &arena);
        top.move_with(&left, &arena);
        assert_eq!(top.rect.left(), start - 10.0);
    }

    #[test]
    fn test_side_paddles_move_vertically() {
        let arena = arena();
        let mut left = paddle(Side::Left);
        let mut right = paddle(Side::Right);

        let input: InputState = [Key::W, Key::Down].into_iter().collect();
        left.move_with(&input, &arena);
        right.move_with(&input, &arena);

        assert_eq!(left.rect.top(), 438.0, "W moves the left paddle up");
        assert_eq!(right.rect.top(), 458.0, "Down moves the right paddle down");
        assert_eq!(left.rect.left(), 16.0, "No horizontal drift");
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let arena = arena();
        let mut bottom = paddle(Side::Bottom);
        let before = bottom.rect;
        let input: InputState = [Key::Left, Key::Right].into_iter().collect();
        bottom.move_with(&input, &arena);
        assert_eq!(bottom.rect, before);
    }

    #[test]
    fn test_approach_direction() {
        let top = paddle(Side::Top);
        let right = paddle(Side::Right);
        let up = ball_at(Vec2::new(500.0, 100.0), Vec2::new(1.0, -4.0));
        let down = ball_at(Vec2::new(500.0, 100.0), Vec2::new(1.0, 4.0));
        assert!(top.is_approached_by(&up));
        assert!(!top.is_approached_by(&down));
        assert!(right.is_approached_by(&ball_at(Vec2::ZERO, Vec2::new(3.0, 0.0))));
        assert!(!right.is_approached_by(&ball_at(Vec2::ZERO, Vec2::new(-3.0, 0.0))));
    }

    #[test]
    fn test_reflect_center_hit_is_perpendicular() {
        let top = paddle(Side::Top);
        let mut ball = ball_at(Vec2::new(top.center().x, 40.0), Vec2::new(3.0, -4.0));

        top.reflect(&mut ball);

        assert!(ball.vel.x.abs() < 1e-5);
        assert!((ball.vel.y - 5.0).abs() < 1e-5);
        let angle = ball.vel.y.atan2(ball.vel.x);
        assert!((angle - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_reflect_sends_ball_away_from_each_wall() {
        for side in Side::ALL {
            let p = paddle(side);
            let mut ball = ball_at(p.center() - side.outward() * 20.0, side.outward() * 6.0);
            assert!(p.is_approached_by(&ball));

            p.reflect(&mut ball);

            assert!(
                ball.vel.dot(side.outward()) < 0.0,
                "{:?} paddle should send the ball back into the arena",
                side
            );
            assert!((ball.speed() - 6.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_reflect_angle_follows_contact_offset() {
        let bottom = paddle(Side::Bottom);
        let offset = 32.0;
        let mut ball = ball_at(
            bottom.center() + Vec2::new(offset, -20.0),
            Vec2::new(0.0, 8.0),
        );

        bottom.reflect(&mut ball);

        let expected = (offset / 128.0).acos();
        assert!((ball.vel.x - 8.0 * expected.cos()).abs() < 1e-4);
        assert!((ball.vel.y + 8.0 * expected.sin()).abs() < 1e-4);
        assert!(ball.vel.x > 0.0, "Right-of-centre hit goes right");
    }

    #[test]
    fn test_reflect_clamps_far_offset() {
        let left = paddle(Side::Left);
        let mut ball = ball_at(left.center() + Vec2::new(20.0, 500.0), Vec2::new(-4.0, 0.0));

        left.reflect(&mut ball);

        assert!(ball.vel.is_finite());
        assert!((ball.vel.y - 4.0).abs() < 1e-4, "acos(1) sends it along the wall");
        assert!(ball.vel.x.abs() < 1e-4);
    }
}
