use crate::map::Side;

/// Simulation clock, counted in fixed ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub tick: u64,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// The two keyboard teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// Top and left paddles
    Wasd,
    /// Bottom and right paddles
    Arrows,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Wasd => Team::Arrows,
            Team::Arrows => Team::Wasd,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub wasd: u32,
    pub arrows: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::Wasd => self.wasd,
            Team::Arrows => self.arrows,
        }
    }

    pub fn increment(&mut self, team: Team) {
        match team {
            Team::Wasd => self.wasd += 1,
            Team::Arrows => self.arrows += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zero-padded two-digit score text
    pub fn display(&self, team: Team) -> String {
        format!("{:02}", self.get(team))
    }
}

/// Random number generator, seeded once per game
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// A goal: which wall the ball left through and who gets the point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub wall: Side,
    pub scorer: Team,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub paddle_hit: Option<Side>,
    pub wall_bounce: bool,
    pub goal: Option<Goal>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.paddle_hit = None;
        self.wall_bounce = false;
        self.goal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Team::Wasd);
        score.increment(Team::Wasd);
        score.increment(Team::Arrows);
        assert_eq!(score.get(Team::Wasd), 2);
        assert_eq!(score.get(Team::Arrows), 1);
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { wasd: 4, arrows: 7 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_score_display_is_zero_padded() {
        let score = Score { wasd: 3, arrows: 12 };
        assert_eq!(score.display(Team::Wasd), "03");
        assert_eq!(score.display(Team::Arrows), "12");
    }

    #[test]
    fn test_team_opponent() {
        assert_eq!(Team::Wasd.opponent(), Team::Arrows);
        assert_eq!(Team::Arrows.opponent(), Team::Wasd);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.paddle_hit = Some(Side::Left);
        events.wall_bounce = true;
        events.goal = Some(Goal {
            wall: Side::Top,
            scorer: Team::Arrows,
        });

        events.clear();

        assert!(events.paddle_hit.is_none());
        assert!(!events.wall_bounce);
        assert!(events.goal.is_none());
    }

    #[test]
    fn test_time_advance() {
        let mut time = Time::new();
        time.advance();
        time.advance();
        assert_eq!(time.tick, 2);
    }
}
