use std::f32::consts::PI;

/// Fixed tuning values for the simulation and the pixel geometry it
/// prescribes to renderers. Sizes are in pixels unless noted otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: i32 = 640;
    pub const COURT_HEIGHT: i32 = 480;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = Self::PADDLE_WIDTH * 3.0;
    pub const PADDLE_SPEED: f32 = 450.0; // pixels per second

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 11.0 * (Self::PADDLE_SPEED / 10.0); // pixels per second

    /// Steepest rebound off a paddle's edge, in radians (85 degrees).
    pub const MAX_REBOUND_ANGLE: f32 = 85.0 * PI / 180.0;

    /// Half-width of the serve window around the horizontal, in radians
    /// (50 degrees).
    pub const LAUNCH_HALF_ANGLE: f32 = 50.0 * PI / 180.0;

    /// Vertical dead zone within which the enemy waits instead of chasing.
    pub const WAIT_TOLERANCE: f32 = Self::PADDLE_HEIGHT / 5.0;

    // Score
    pub const WIN_SCORE: u32 = 10;

    // Midline dots
    pub const MIDLINE_POINT_WIDTH: i32 = 3;
    pub const MIDLINE_POINT_HEIGHT: i32 = 2 * Self::MIDLINE_POINT_WIDTH;
    pub const MIDLINE_POINT_MARGIN: i32 = 3;
    pub const MIDLINE_PADDING: i32 = 20;

    // Score digits; margins are in piece units
    pub const DIGIT_PIECE_SIZE: i32 = 7;
    pub const DIGIT_INNER_MARGIN: i32 = 1;
    pub const DIGIT_OUTER_MARGIN: i32 = 2;
}
