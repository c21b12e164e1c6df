use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::court::Court;
use crate::resources::GameRng;

/// Which edge of the court a paddle defends. The player guards the left
/// edge, the computer enemy the right one. Score digits are placed on the
/// matching half of the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Player,
    Enemy,
}

/// Vertical movement direction of a paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleDir {
    Up,
    #[default]
    Still,
    Down,
}

impl PaddleDir {
    /// Sign of the direction in Y-down screen coordinates.
    pub fn signum(self) -> f32 {
        match self {
            PaddleDir::Up => -1.0,
            PaddleDir::Still => 0.0,
            PaddleDir::Down => 1.0,
        }
    }
}

/// Paddle component. `y` is the top edge in pixels, kept inside
/// `[0, court.height - paddle_height]` by integration.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: PaddleSide,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: PaddleSide, y: f32) -> Self {
        Self { side, y }
    }
}

/// Movement intent for a paddle, written by input ingestion (player) or the
/// enemy controller, consumed by motion integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: PaddleDir,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component. `pos` is the top-left corner of the bounding box; `dir`
/// is a unit direction vector, the speed itself lives in `Config`.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, dir: Vec2) -> Self {
        Self { pos, dir }
    }

    /// Serve again: draw a fresh angle inside the launch window and flip the
    /// horizontal direction. A just-spawned ball (zero direction) serves
    /// toward the player.
    pub fn relaunch(&mut self, config: &Config, rng: &mut GameRng) {
        let angle = rng
            .0
            .gen_range(-config.launch_half_angle..=config.launch_half_angle);
        self.dir.y = angle.sin();
        self.dir.x = if self.dir.x < 0.0 {
            angle.cos()
        } else {
            -angle.cos()
        };
        log::debug!("ball relaunched at {:.3} rad", angle);
    }

    /// Re-center on the court and serve.
    pub fn reset(&mut self, court: &Court, config: &Config, rng: &mut GameRng) {
        self.pos = court.ball_spawn(config.ball_size);
        self.relaunch(config, rng);
    }
}
