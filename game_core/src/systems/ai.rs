use hecs::World;

use crate::components::{Ball, Paddle, PaddleDir, PaddleIntent, PaddleSide};
use crate::config::Config;

/// Pick the enemy paddle's direction for this tick.
///
/// The enemy chases the ball's vertical center but tolerates a dead zone
/// around its own center, so the match stays winnable. The decision has no
/// memory: each tick looks only at the current positions.
pub fn decide_enemy_direction(paddle_y: f32, ball_y: f32, config: &Config) -> PaddleDir {
    let paddle_mid = paddle_y + config.paddle_height / 2.0;
    let ball_mid = ball_y + config.ball_size / 2.0;
    let diff = paddle_mid - ball_mid;
    if diff.abs() <= config.wait_tolerance {
        PaddleDir::Still
    } else if diff > 0.0 {
        // Y grows downward, so a positive diff means the ball is above.
        PaddleDir::Up
    } else {
        PaddleDir::Down
    }
}

/// Write the enemy paddle's intent from the current ball position.
pub fn drive_enemy(world: &mut World, config: &Config) {
    let ball_y = {
        let mut q = world.query::<&Ball>();
        match q.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return, // no ball in world
        }
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == PaddleSide::Enemy {
            intent.dir = decide_enemy_direction(paddle.y, ball_y, config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_waits_inside_dead_zone() {
        let config = Config::new();
        // Paddle center at 240, ball center offset by less than the tolerance.
        let paddle_y = 210.0;
        let ball_y = 230.0 + config.wait_tolerance / 2.0;
        assert_eq!(
            decide_enemy_direction(paddle_y, ball_y, &config),
            PaddleDir::Still
        );
    }

    #[test]
    fn test_waits_exactly_at_tolerance() {
        let config = Config::new();
        let paddle_y = 210.0;
        let ball_y = 230.0 - config.wait_tolerance;
        assert_eq!(
            decide_enemy_direction(paddle_y, ball_y, &config),
            PaddleDir::Still,
            "the boundary itself still counts as waiting"
        );
    }

    #[test]
    fn test_chases_ball_above() {
        let config = Config::new();
        let paddle_y = 210.0;
        let ball_y = 230.0 - config.wait_tolerance - 1.0;
        assert_eq!(
            decide_enemy_direction(paddle_y, ball_y, &config),
            PaddleDir::Up
        );
    }

    #[test]
    fn test_chases_ball_below() {
        let config = Config::new();
        let paddle_y = 210.0;
        let ball_y = 230.0 + config.wait_tolerance + 1.0;
        assert_eq!(
            decide_enemy_direction(paddle_y, ball_y, &config),
            PaddleDir::Down
        );
    }

    #[test]
    fn test_drive_enemy_leaves_player_intent_alone() {
        let mut world = hecs::World::new();
        let config = Config::new();
        create_paddle(&mut world, PaddleSide::Player, 210.0);
        create_paddle(&mut world, PaddleSide::Enemy, 210.0);
        create_ball(&mut world, Vec2::new(320.0, 0.0), Vec2::new(1.0, 0.0));

        drive_enemy(&mut world, &config);

        for (_e, (paddle, intent)) in world.query::<(&Paddle, &PaddleIntent)>().iter() {
            match paddle.side {
                PaddleSide::Enemy => assert_eq!(intent.dir, PaddleDir::Up),
                PaddleSide::Player => assert_eq!(intent.dir, PaddleDir::Still),
            }
        }
    }
}
