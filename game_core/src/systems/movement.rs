use crate::{Arena, Ball, Events, InputState, Paddle};
use hecs::World;

/// Apply held keys to every paddle
pub fn move_paddles(world: &mut World, input: &InputState, arena: &Arena) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.move_with(input, arena);
    }
}

/// Advance the ball one tick, recording solid-wall bounces
pub fn move_ball(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(arena) {
            events.wall_bounce = true;
        }
    }
}
