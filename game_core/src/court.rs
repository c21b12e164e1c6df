use glam::Vec2;

/// Court dimensions in pixels. Fixed for the lifetime of a match and passed
/// by reference into every spatial computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Court {
    pub width: i32,
    pub height: i32,
}

impl Court {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f(&self) -> f32 {
        self.height as f32
    }

    /// Center point of the court.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Largest valid top edge for a paddle of the given height.
    pub fn paddle_max_y(&self, paddle_height: f32) -> f32 {
        self.height as f32 - paddle_height
    }

    /// Largest valid top edge for the ball.
    pub fn ball_max_y(&self, ball_size: f32) -> f32 {
        self.height as f32 - ball_size
    }

    /// Top-left corner that centers the ball on the court.
    pub fn ball_spawn(&self, ball_size: f32) -> Vec2 {
        self.center() - Vec2::splat(ball_size / 2.0)
    }

    /// Top edge that centers a paddle vertically.
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        self.height as f32 / 2.0 - paddle_height / 2.0
    }
}

impl Default for Court {
    fn default() -> Self {
        Self {
            width: crate::params::Params::COURT_WIDTH,
            height: crate::params::Params::COURT_HEIGHT,
        }
    }
}

/// Clamps `x` into `[0, max]`: values above `max` become `max`, values below
/// zero become `0`, everything else passes through. NaN fails both
/// comparisons and comes back unchanged.
pub fn clamp0(x: f32, max: f32) -> f32 {
    if x > max {
        max
    } else if x < 0.0 {
        0.0
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp0_passes_through_in_range() {
        assert_eq!(clamp0(3.5, 10.0), 3.5);
        assert_eq!(clamp0(0.0, 10.0), 0.0);
        assert_eq!(clamp0(10.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp0_clamps_above_max() {
        assert_eq!(clamp0(11.0, 10.0), 10.0);
        assert_eq!(clamp0(1e9, 10.0), 10.0);
    }

    #[test]
    fn test_clamp0_clamps_below_zero() {
        assert_eq!(clamp0(-0.1, 10.0), 0.0);
        assert_eq!(clamp0(-1e9, 10.0), 0.0);
    }

    #[test]
    fn test_court_center() {
        let court = Court::new(640, 480);
        assert_eq!(court.center(), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_ball_spawn_centers_bounding_box() {
        let court = Court::new(640, 480);
        let spawn = court.ball_spawn(20.0);
        assert_eq!(spawn, Vec2::new(310.0, 230.0), "spawn is the top-left corner");
    }

    #[test]
    fn test_paddle_spawn_centers_paddle() {
        let court = Court::new(640, 480);
        assert_eq!(court.paddle_spawn_y(60.0), 210.0);
    }

    #[test]
    fn test_max_edges() {
        let court = Court::new(640, 480);
        assert_eq!(court.paddle_max_y(60.0), 420.0);
        assert_eq!(court.ball_max_y(20.0), 460.0);
    }
}
