use hecs::World;

use crate::error::{ConfigResult, RenderError};
use crate::input::{Command, InputEvent, InputState, KeyPulses};
use crate::render::{render_scene, Canvas};
use crate::{
    create_paddle, step, Arena, Ball, Config, Events, GameRng, Paddle, Score, Side, Time,
};

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Everything one game owns: entities, arena, score and randomness
pub struct GameState {
    pub world: World,
    pub arena: Arena,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub time: Time,
    pub rng: GameRng,
    pulses: KeyPulses,
}

impl GameState {
    /// Spawn four paddles and serve the ball
    pub fn new(config: Config, mut rng: GameRng) -> ConfigResult<Self> {
        config.validate()?;
        let arena = config.arena();

        let mut world = World::new();
        for side in Side::ALL {
            create_paddle(&mut world, &config, &arena, side);
        }

        let mut ball = Ball::new(
            config.ball_radius,
            config.ball_speed,
            config.ball_growth_factor,
            &arena,
        );
        ball.reset(&arena, &mut rng);
        world.spawn((ball,));

        tracing::info!(arena = arena.side, "new game");

        Ok(Self {
            world,
            pulses: KeyPulses::new(config.key_repeat_interval),
            arena,
            config,
            score: Score::new(),
            events: Events::new(),
            time: Time::new(),
            rng,
        })
    }

    /// Run one physics tick
    pub fn step(&mut self, input: &InputState) {
        step(
            &mut self.world,
            &mut self.time,
            &self.arena,
            input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    /// Apply a discrete input event, returning the command it triggered
    pub fn handle_event(&mut self, event: InputEvent, now_ms: f64) -> Option<Command> {
        let command = match event {
            InputEvent::Quit => Some(Command::Quit),
            InputEvent::KeyDown(key) => {
                Command::from_key(key).filter(|_| self.pulses.accept(key, now_ms))
            }
        };

        if command == Some(Command::ResetScore) {
            self.reset_score();
        }
        command
    }

    pub fn reset_score(&mut self) {
        self.score.reset();
        tracing::info!(tick = self.time.tick, "score reset");
    }

    /// Drain events, run `ticks` physics ticks, then draw and present.
    /// A quit request returns before anything is drawn.
    pub fn run_frame<C, I>(
        &mut self,
        events: I,
        input: &InputState,
        ticks: u32,
        now_ms: f64,
        canvas: &mut C,
    ) -> Result<Control, RenderError>
    where
        C: Canvas + ?Sized,
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle_event(event, now_ms) == Some(Command::Quit) {
                tracing::info!(tick = self.time.tick, "quit requested");
                return Ok(Control::Quit);
            }
        }

        for _ in 0..ticks {
            self.step(input);
        }

        render_scene(self, canvas);
        canvas.present()?;
        Ok(Control::Continue)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// All paddles, in `Side::ALL` order
    pub fn paddles(&self) -> Vec<Paddle> {
        let mut paddles: Vec<Paddle> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .collect();
        paddles.sort_by_key(|paddle| paddle.side);
        paddles
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }
}
