pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Run one deterministic tick of the four-paddle simulation
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles from the held keys
    move_paddles(world, input, arena);

    // 2. Move ball (solid-wall bounces, speed growth)
    move_ball(world, arena, events);

    // 3. Ball vs paddles
    check_collisions(world, events);

    // 4. Ball left through a goal
    check_scoring(world, arena, score, events, rng);

    time.advance();
}

/// Helper to create the paddle guarding `side`, with its default keys
pub fn create_paddle(world: &mut World, config: &Config, arena: &Arena, side: Side) -> hecs::Entity {
    world.spawn((Paddle::new(
        config.paddle_thickness,
        config.paddle_length,
        side,
        config.paddle_speed,
        KeyBinding::for_side(side),
        arena,
    ),))
}

/// Helper to create a ball centred on `center`
pub fn create_ball(
    world: &mut World,
    config: &Config,
    arena: &Arena,
    center: glam::Vec2,
    vel: glam::Vec2,
) -> hecs::Entity {
    let mut ball = Ball::new(
        config.ball_radius,
        config.ball_speed,
        config.ball_growth_factor,
        arena,
    );
    ball.rect = Rect::from_center_size(center, ball.rect.size);
    ball.vel = vel;
    world.spawn((ball,))
}
