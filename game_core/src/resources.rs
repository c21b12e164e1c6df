use crate::components::{PaddleDir, PaddleSide};

/// Match score. Counters only ever move up; zeroing happens through a full
/// match reset, never on a single point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub enemy: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: PaddleSide) {
        match side {
            PaddleSide::Player => self.player += 1,
            PaddleSide::Enemy => self.enemy += 1,
        }
    }

    /// The side that has reached `target`, if any.
    pub fn winner(&self, target: u32) -> Option<PaddleSide> {
        if self.player >= target {
            Some(PaddleSide::Player)
        } else if self.enemy >= target {
            Some(PaddleSide::Enemy)
        } else {
            None
        }
    }
}

/// Seedable random number generator driving ball serves. A fixed seed makes
/// a whole match reproducible.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// What happened during the last tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub player_scored: bool,
    pub enemy_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> bool {
        self.player_scored || self.enemy_scored
    }
}

/// Player directions queued by the input collaborator, one per polled event.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<PaddleDir>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, dir: PaddleDir) {
        self.inputs.push(dir);
    }

    /// Latest queued direction wins; the queue drains either way.
    pub fn take_latest(&mut self) -> Option<PaddleDir> {
        let latest = self.inputs.last().copied();
        self.inputs.clear();
        latest
    }
}
