use hecs::World;

use crate::components::{Paddle, PaddleIntent, PaddleSide};
use crate::resources::InputQueue;

/// Apply queued player input to the player paddle's intent. The queue may
/// hold several directions from one polling pass; the most recent wins. An
/// empty queue leaves the previous intent in place.
pub fn ingest_inputs(world: &mut World, inputs: &mut InputQueue) {
    let dir = match inputs.take_latest() {
        Some(dir) => dir,
        None => return,
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == PaddleSide::Player {
            intent.dir = dir;
        }
    }
}
