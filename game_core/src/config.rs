use crate::components::PaddleSide;
use crate::court::Court;
use crate::params::Params;

/// Runtime copy of the tuning parameters. Tests tweak individual fields;
/// the game itself runs on the defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle speed in pixels per second.
    pub paddle_speed: f32,
    pub ball_size: f32,
    /// Ball speed in pixels per second.
    pub ball_speed: f32,
    pub max_rebound_angle: f32,
    pub launch_half_angle: f32,
    pub wait_tolerance: f32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            max_rebound_angle: Params::MAX_REBOUND_ANGLE,
            launch_half_angle: Params::LAUNCH_HALF_ANGLE,
            wait_tolerance: Params::WAIT_TOLERANCE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paddle speed in pixels per millisecond.
    pub fn paddle_speed_per_ms(&self) -> f32 {
        self.paddle_speed / 1000.0
    }

    /// Ball speed in pixels per millisecond.
    pub fn ball_speed_per_ms(&self) -> f32 {
        self.ball_speed / 1000.0
    }

    /// Largest possible center-to-center offset between ball and paddle at
    /// the moment of contact.
    pub fn max_hit_distance(&self) -> f32 {
        self.paddle_height / 2.0 + self.ball_size / 2.0
    }

    /// X position of a paddle's left edge.
    pub fn paddle_x(&self, side: PaddleSide, court: &Court) -> f32 {
        match side {
            PaddleSide::Player => 0.0,
            PaddleSide::Enemy => court.width_f() - self.paddle_width,
        }
    }
}
