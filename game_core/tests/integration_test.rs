use game_core::*;
use glam::Vec2;
use hecs::World;

fn new_game(seed: u64) -> GameState {
    GameState::new(Config::new(), GameRng::new(seed)).expect("default config is valid")
}

fn place_ball(state: &mut GameState, center: Vec2, vel: Vec2) {
    for (_e, ball) in state.world.query_mut::<&mut Ball>() {
        ball.rect = Rect::from_center_size(center, ball.rect.size);
        ball.vel = vel;
    }
}

fn boxed_arena(side: f32) -> Arena {
    Side::ALL
        .into_iter()
        .fold(Arena::new(side), |arena, wall| arena.with_wall(wall, WallKind::Solid))
}

#[test]
fn test_wall_bounce_conserves_speed() {
    let arena = boxed_arena(1024.0);
    let growth = 1.0005;
    let cases = [
        (Vec2::new(20.0, 500.0), Vec2::new(-7.0, 3.0)),
        (Vec2::new(1010.0, 500.0), Vec2::new(9.0, -2.5)),
        (Vec2::new(500.0, 18.0), Vec2::new(1.5, -4.0)),
        (Vec2::new(500.0, 1010.0), Vec2::new(-6.0, 8.0)),
        (Vec2::new(18.0, 18.0), Vec2::new(-5.0, -5.0)),
    ];

    for (center, vel) in cases {
        let mut ball = Ball::new(16.0, 5.0, growth, &arena);
        ball.rect = Rect::from_center_size(center, ball.rect.size);
        ball.vel = vel;
        let before = ball.speed();

        assert!(ball.advance(&arena), "Ball at {:?} should bounce", center);

        let after = ball.speed() / growth;
        assert!(
            (after - before).abs() < 1e-4,
            "Bounce changed speed from {} to {}",
            before,
            after
        );
    }
}

#[test]
fn test_speed_grows_every_tick() {
    let arena = boxed_arena(1024.0);
    let mut ball = Ball::new(16.0, 5.0, 1.0005, &arena);
    ball.reset(&arena, &mut GameRng::new(3));

    let mut last = ball.speed();
    for tick in 0..2_000 {
        ball.advance(&arena);
        let speed = ball.speed();
        assert!(speed > last, "Speed did not grow on tick {}", tick);
        last = speed;
    }
}

#[test]
fn test_reflection_preserves_magnitude_through_step() {
    let mut state = new_game(1);
    // Just above the bottom paddle (y 992..1008), heading down
    let vel = Vec2::new(2.0, 7.0);
    place_ball(&mut state, Vec2::new(540.0, 970.0), vel);

    state.step(&InputState::new());

    assert_eq!(state.events.paddle_hit, Some(Side::Bottom));
    let ball = state.ball().expect("ball");
    assert!(ball.vel.y < 0.0, "Ball heads back up");
    // Magnitude after growth, then reflection keeps it
    let expected = vel.length() * state.config.ball_growth_factor;
    assert!((ball.speed() - expected).abs() < 1e-4);
}

#[test]
fn test_step_moves_paddles_before_collisions() {
    let mut world = World::new();
    let mut time = Time::new();
    let config = Config::new();
    let arena = config.arena();
    let mut rng = GameRng::new(12345);
    let mut score = Score::new();
    let mut events = Events::new();

    for side in Side::ALL {
        create_paddle(&mut world, &config, &arena, side);
    }
    // Just right of the top paddle (x 448..576), drifting up
    create_ball(
        &mut world,
        &config,
        &arena,
        Vec2::new(600.0, 45.0),
        Vec2::new(0.0, -1.0),
    );

    // D slides the top paddle under the ball in the same tick
    let input: InputState = [Key::D].into_iter().collect();
    step(
        &mut world,
        &mut time,
        &arena,
        &input,
        &mut score,
        &mut events,
        &mut rng,
    );

    assert_eq!(events.paddle_hit, Some(Side::Top));
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, b)| *b)
        .expect("ball");
    assert!(ball.vel.y > 0.0, "Ball sent back down");
    assert!(ball.vel.x > 0.0, "Right-of-centre hit goes right");
    assert_eq!(score, Score::new());
    assert_eq!(time.tick, 1);
}

#[test]
fn test_centre_hit_on_top_paddle_goes_straight_down() {
    let config = Config::new();
    let arena = config.arena();
    let mut world = World::new();
    create_paddle(&mut world, &config, &arena, Side::Top);
    let paddle = world
        .query::<&Paddle>()
        .iter()
        .next()
        .map(|(_e, p)| *p)
        .expect("paddle");

    let mut ball = Ball::new(16.0, 5.0, 1.0, &arena);
    ball.rect = Rect::from_center_size(Vec2::new(paddle.center().x, 45.0), ball.rect.size);
    ball.vel = Vec2::new(-3.0, -4.0);

    paddle.reflect(&mut ball);

    assert!(ball.vel.x.abs() < 1e-5);
    assert!((ball.vel.y - 5.0).abs() < 1e-5);
}

#[test]
fn test_paddle_clamps_at_both_ends() {
    let config = Config::new();
    let arena = config.arena();
    let mut top = Paddle::new(
        config.paddle_thickness,
        config.paddle_length,
        Side::Top,
        config.paddle_speed,
        KeyBinding::for_side(Side::Top),
        &arena,
    );
    let left: InputState = [Key::A].into_iter().collect();
    let right: InputState = [Key::D].into_iter().collect();
    let margin = config.paddle_margin();

    for _ in 0..200 {
        top.move_with(&left, &arena);
    }
    assert_eq!(top.rect.left(), margin, "Paddle stops exactly on the margin");

    let parked = top.rect;
    top.move_with(&left, &arena);
    top.move_with(&left, &arena);
    assert_eq!(top.rect, parked, "Idempotent at the clamp");

    let far = arena.side - margin;
    let mut last = top.rect.left();
    while top.rect.right() < far {
        top.move_with(&right, &arena);
        assert!(top.rect.left() > last, "Moving right must make progress");
        last = top.rect.left();
    }
    assert_eq!(top.rect.right(), far);

    top.move_with(&right, &arena);
    assert_eq!(top.rect.right(), far, "Idempotent at the far clamp");
}

#[test]
fn test_side_paddles_respect_margin() {
    let mut state = new_game(5);
    let down: InputState = [Key::S, Key::Down].into_iter().collect();

    for _ in 0..200 {
        state.step(&down);
    }

    let limit = state.arena.side - state.config.paddle_margin();
    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle(side).expect("paddle");
        assert_eq!(paddle.rect.bottom(), limit, "{:?} paddle", side);
    }
}

#[test]
fn test_ball_exiting_left_scores_for_arrows_and_reserves() {
    let mut state = new_game(8);
    place_ball(&mut state, Vec2::new(2.0, 100.0), Vec2::new(-5.0, 0.0));

    state.step(&InputState::new());

    assert_eq!(state.score, Score { wasd: 0, arrows: 1 });
    assert_eq!(
        state.events.goal,
        Some(Goal {
            wall: Side::Left,
            scorer: Team::Arrows
        })
    );
    let ball = state.ball().expect("ball");
    assert_eq!(ball.center(), Vec2::new(512.0, 512.0));
    assert_eq!(ball.state, ServeState::JustServed);

    state.step(&InputState::new());
    assert_eq!(state.ball().expect("ball").state, ServeState::InPlay);
}

#[test]
fn test_serve_directions_are_uniform() {
    let arena = Arena::new(1024.0);
    let mut rng = GameRng::new(2024);
    let mut ball = Ball::new(16.0, 5.0, 1.0, &arena);
    let mut counts = [0u32; 4];
    let trials = 8_000;

    for _ in 0..trials {
        ball.reset(&arena, &mut rng);
        assert_eq!(ball.vel.abs(), Vec2::splat(5.0), "Serve is always 45°");
        let idx = (ball.vel.x > 0.0) as usize * 2 + (ball.vel.y > 0.0) as usize;
        counts[idx] += 1;
    }

    let expected = trials as f64 / 4.0;
    let chi_square: f64 = counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    // 3 degrees of freedom, p = 0.001
    assert!(chi_square < 16.27, "chi² = {} for {:?}", chi_square, counts);
}

#[test]
fn test_long_unattended_game_keeps_scoring() {
    let mut state = new_game(42);
    let idle = InputState::new();

    for _ in 0..20_000 {
        state.step(&idle);
        let ball = state.ball().expect("ball");
        assert!(ball.vel.is_finite());
        assert!(ball.center().x.abs() < 2_000.0 && ball.center().y.abs() < 2_000.0);
    }

    let total = state.score.wasd + state.score.arrows;
    assert!(total > 0, "Nobody defends, so goals must happen");
    assert_eq!(state.time.tick, 20_000);
}

#[test]
fn test_reset_score_through_events() {
    let mut state = new_game(11);
    place_ball(&mut state, Vec2::new(1022.0, 300.0), Vec2::new(5.0, 0.0));
    state.step(&InputState::new());
    assert_eq!(state.score.wasd, 1);

    assert_eq!(
        state.handle_event(InputEvent::KeyDown(Key::R), 0.0),
        Some(Command::ResetScore)
    );
    assert_eq!(state.score, Score::new());
}
