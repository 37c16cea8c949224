use glam::Vec2;

use crate::resources::Team;

/// Axis-aligned rectangle in arena coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Move by `delta` in place
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Strict overlap: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Movement axis of a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component of `v` along this axis
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// Vector of length `amount` along this axis
    pub fn vector(self, amount: f32) -> Vec2 {
        match self {
            Axis::X => Vec2::new(amount, 0.0),
            Axis::Y => Vec2::new(0.0, amount),
        }
    }
}

/// One of the four arena walls, and the paddle guarding it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Fixed order used for spawning and collision dispatch
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }

    /// Axis a paddle on this wall slides along
    pub fn axis(self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::X,
            Side::Left | Side::Right => Axis::Y,
        }
    }

    /// Unit vector pointing out of the arena through this wall
    pub fn outward(self) -> Vec2 {
        match self {
            Side::Top => Vec2::new(0.0, -1.0),
            Side::Bottom => Vec2::new(0.0, 1.0),
            Side::Left => Vec2::new(-1.0, 0.0),
            Side::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// WASD keys guard top and left, the arrow keys bottom and right
    pub fn defending_team(self) -> Team {
        match self {
            Side::Top | Side::Left => Team::Wasd,
            Side::Bottom | Side::Right => Team::Arrows,
        }
    }
}

/// What happens when the ball reaches a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    /// Ball leaving through this wall scores for the other team
    Goal,
    /// Ball bounces back
    Solid,
}

/// Square playing field
#[derive(Debug, Clone)]
pub struct Arena {
    pub side: f32,
    walls: [WallKind; 4],
}

impl Arena {
    /// Arena with a goal behind every paddle
    pub fn new(side: f32) -> Self {
        Self {
            side,
            walls: [WallKind::Goal; 4],
        }
    }

    pub fn with_wall(mut self, side: Side, kind: WallKind) -> Self {
        self.walls[side.index()] = kind;
        self
    }

    pub fn wall(&self, side: Side) -> WallKind {
        self.walls[side.index()]
    }

    pub fn is_solid(&self, side: Side) -> bool {
        self.wall(side) == WallKind::Solid
    }

    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.side / 2.0)
    }

    /// Goal line crossed by `point`, checking left and top first
    pub fn goal_crossed(&self, point: Vec2) -> Option<Side> {
        let crossed = if point.x < 0.0 {
            Some(Side::Left)
        } else if point.y < 0.0 {
            Some(Side::Top)
        } else if point.x > self.side {
            Some(Side::Right)
        } else if point.y > self.side {
            Some(Side::Bottom)
        } else {
            None
        };
        crossed.filter(|side| self.wall(*side) == WallKind::Goal)
    }
}
