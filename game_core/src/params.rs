/// Game tuning parameters for four-paddle Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_SIDE: f32 = 1024.0;

    // Ball (speeds are per tick)
    pub const BALL_SPEED: f32 = 5.0;
    pub const BALL_RADIUS: f32 = 16.0;
    pub const BALL_GROWTH_FACTOR: f32 = 1.0005; // Applied every tick

    // Paddle
    pub const PADDLE_THICKNESS: f32 = 16.0;
    pub const PADDLE_LENGTH: f32 = 128.0;
    pub const PADDLE_SPEED: f32 = 10.0;

    // Input
    pub const KEY_REPEAT_INTERVAL: f64 = 200.0; // ms between accepted command pulses

    // Loop
    pub const TICK_RATE: f64 = 60.0;
    pub const MAX_TICKS_PER_FRAME: u32 = 4; // Catch-up limit after a stall
}
