use hecs::World;

use crate::components::{Ball, Paddle, PaddleSide};
use crate::config::Config;
use crate::court::Court;
use crate::resources::{Events, GameRng, Score};

/// Resolve wall bounces, paddle rebounds, and missed-paddle scoring for this
/// tick.
///
/// All checks run against the ball's *predicted* next position, one
/// integration step ahead, so a fast ball cannot tunnel through a wall or a
/// paddle boundary between two ticks. Within one paddle region the outcome
/// is exclusive: the paddle either returns the volley or concedes the point.
pub fn run_collisions(
    world: &mut World,
    court: &Court,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    elapsed_ms: f32,
) {
    // Paddle tops, collected up front so the ball can be borrowed mutably.
    let paddles: Vec<(PaddleSide, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    let paddle_top = |side: PaddleSide| {
        paddles
            .iter()
            .find(|(s, _y)| *s == side)
            .map(|(_s, y)| *y)
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let step = config.ball_speed_per_ms() * elapsed_ms;
        let predicted = ball.pos + ball.dir * step;

        // Top/bottom wall: flip the vertical component. dx is untouched, so
        // the direction stays a unit vector.
        if predicted.y > court.ball_max_y(config.ball_size) || predicted.y < 0.0 {
            ball.dir.y = -ball.dir.y;
            events.ball_hit_wall = true;
        }

        // Entering a paddle region either rebounds the ball or scores for
        // the opposite side.
        if predicted.x < config.paddle_width {
            if let Some(top) = paddle_top(PaddleSide::Player) {
                if rebound(ball, top, config) {
                    events.ball_hit_paddle = true;
                } else {
                    award_point(ball, PaddleSide::Enemy, court, config, score, events, rng);
                }
            }
        } else if predicted.x > court.width_f() - config.paddle_width - config.ball_size {
            if let Some(top) = paddle_top(PaddleSide::Enemy) {
                if rebound(ball, top, config) {
                    events.ball_hit_paddle = true;
                } else {
                    award_point(ball, PaddleSide::Player, court, config, score, events, rng);
                }
            }
        }
    }
}

/// Overlap test between the ball's vertical span and a paddle's, applying
/// the angled hitback on contact. Returns whether the paddle connected.
///
/// The rebound angle runs from the maximum at the paddle's topmost contact
/// point through zero at its center to the negated maximum at the bottom,
/// proportional to the center-to-center offset.
fn rebound(ball: &mut Ball, paddle_top: f32, config: &Config) -> bool {
    let by0 = ball.pos.y;
    let by1 = by0 + config.ball_size;
    let ry0 = paddle_top;
    let ry1 = paddle_top + config.paddle_height;

    let overlaps = (ry0 < by0 && by0 < ry1) || (ry0 < by1 && by1 < ry1);
    if !overlaps {
        return false;
    }

    let ball_mid = by0 + config.ball_size / 2.0;
    let paddle_mid = ry0 + config.paddle_height / 2.0;
    let mid_distance = paddle_mid - ball_mid;
    let angle = config.max_rebound_angle * (mid_distance / config.max_hit_distance());

    // Y grows downward on screen, hence the inverted sine.
    ball.dir.y = -angle.sin();
    ball.dir.x = if ball.dir.x < 0.0 {
        angle.cos()
    } else {
        -angle.cos()
    };

    true
}

fn award_point(
    ball: &mut Ball,
    to: PaddleSide,
    court: &Court,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    score.increment(to);
    match to {
        PaddleSide::Player => events.player_scored = true,
        PaddleSide::Enemy => events.enemy_scored = true,
    }
    log::info!("point for {:?}: {} - {}", to, score.player, score.enemy);
    ball.reset(court, config, rng);
}
