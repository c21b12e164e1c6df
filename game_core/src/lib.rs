pub mod components;
pub mod config;
pub mod court;
pub mod glyphs;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Advance the simulation by one tick of `elapsed_ms` wall-clock time.
///
/// The ordering is load-bearing: collisions are resolved against the
/// predicted ball position before anything moves, so a rebound takes effect
/// in the frame it was detected and the ball cannot slip through a paddle
/// between two ticks.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    court: &Court,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    inputs: &mut InputQueue,
    rng: &mut GameRng,
    elapsed_ms: f32,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply queued player input to the player paddle's intent
    ingest_inputs(world, inputs);

    // 2. Resolve collisions and scoring against the predicted ball position
    run_collisions(world, court, config, score, events, rng, elapsed_ms);

    // 3. Let the enemy pick its direction for this tick
    drive_enemy(world, config);

    // 4. Integrate paddle and ball motion
    move_paddles(world, court, config, elapsed_ms);
    move_ball(world, court, config, elapsed_ms);
}

/// Helper to create a paddle entity at the given top edge.
pub fn create_paddle(world: &mut World, side: PaddleSide, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity.
pub fn create_ball(world: &mut World, pos: glam::Vec2, dir: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, dir),))
}
