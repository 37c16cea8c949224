use crate::{Arena, Ball, Events, GameRng, Goal, Score};
use hecs::World;

/// Check if the ball centre left the arena through a goal wall
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let Some(wall) = arena.goal_crossed(ball.center()) else {
            continue;
        };

        // The defending team conceded, the other one scores
        let scorer = wall.defending_team().opponent();
        score.increment(scorer);
        events.goal = Some(Goal { wall, scorer });

        tracing::info!(
            wall = ?wall,
            scorer = ?scorer,
            wasd = score.wasd,
            arrows = score.arrows,
            "goal"
        );

        ball.reset(arena, rng);
    }
}
