/// Game tuning parameters for the timed match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 750.0;
    pub const FPS: u32 = 30;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 10.0; // px per frame (human side)
    pub const PADDLE_MARGIN_LEFT: f32 = 20.0;
    pub const PADDLE_MARGIN_RIGHT: f32 = 40.0; // measured from the right edge to the paddle's left side

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED_INITIAL: f32 = 8.0;
    pub const BALL_SPEED_MAX: f32 = 15.0;
    pub const BALL_SPEED_INCREASE: f32 = 0.5; // added on every paddle contact
    pub const BALL_SPAWN_MARGIN: f32 = 200.0;

    // Score
    pub const SCORE_VALUE: u32 = 5;

    // Match timer (seconds)
    pub const MATCH_SECONDS: u32 = 60;
    pub const RESTART_SECONDS: u32 = 30;

    // AI
    pub const AI_DEADZONE: f32 = 10.0;
    pub const AI_RECENTER_DEADZONE: f32 = 5.0;
}
