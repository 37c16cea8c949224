use crate::{Ball, Events, Paddle};
use hecs::World;

/// Reflect the ball off the first paddle it overlaps and is heading toward.
///
/// Paddles are tested in `Side::ALL` order and at most one reflects per
/// tick. An overlapping paddle the ball is already leaving is skipped, so
/// in a corner the next paddle still gets its turn.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddles first, deterministic order by side
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let Some(paddle) = paddles
            .iter()
            .find(|p| p.rect.intersects(&ball.rect) && p.is_approached_by(ball))
        else {
            continue;
        };

        paddle.reflect(ball);
        events.paddle_hit = Some(paddle.side);
        tracing::debug!(side = ?paddle.side, speed = ball.speed(), "paddle hit");
    }
}
