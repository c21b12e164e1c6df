use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::court::{clamp0, Court};

/// Advance both paddles by the elapsed time and clamp them to the court.
pub fn move_paddles(world: &mut World, court: &Court, config: &Config, elapsed_ms: f32) {
    let max_y = court.paddle_max_y(config.paddle_height);
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        let delta = elapsed_ms * config.paddle_speed_per_ms() * intent.dir.signum();
        paddle.y = clamp0(paddle.y + delta, max_y);
    }
}

/// Advance the ball along its direction vector. The clamp here is only a
/// safety net; bounces and misses were already resolved by the collision
/// pass earlier in the tick.
pub fn move_ball(world: &mut World, court: &Court, config: &Config, elapsed_ms: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.dir * config.ball_speed_per_ms() * elapsed_ms;
        ball.pos.x = clamp0(ball.pos.x, court.width_f());
        ball.pos.y = clamp0(ball.pos.y, court.ball_max_y(config.ball_size));
    }
}
