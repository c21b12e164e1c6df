use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, PaddleDir, PaddleIntent, PaddleSide};
use crate::config::Config;
use crate::court::Court;
use crate::resources::{Events, GameRng, InputQueue, Score};
use crate::{create_ball, create_paddle, step};

/// The full mutable simulation state, advanced once per tick.
///
/// Owns the entity world and the per-match resources. The surrounding frame
/// loop owns this alongside its (non-core) presentation resources; nothing
/// here ever touches a display, so the whole state runs headless.
pub struct PlayState {
    pub world: World,
    pub score: Score,
    pub events: Events,
    pub inputs: InputQueue,
    pub rng: GameRng,
    /// Timestamp of the previous tick, in milliseconds.
    pub last_update: u64,
}

impl PlayState {
    /// Build a match-start state: paddles centered, ball centered and served.
    pub fn new(court: &Court, config: &Config, seed: u64, now_ms: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let paddle_y = court.paddle_spawn_y(config.paddle_height);
        create_paddle(&mut world, PaddleSide::Player, paddle_y);
        create_paddle(&mut world, PaddleSide::Enemy, paddle_y);

        // A zero direction makes the opening serve travel toward the player.
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(court, config, &mut rng);
        create_ball(&mut world, ball.pos, ball.dir);

        Self {
            world,
            score: Score::new(),
            events: Events::new(),
            inputs: InputQueue::new(),
            rng,
            last_update: now_ms,
        }
    }

    /// Advance one tick from the collaborator's monotonic clock. A timestamp
    /// earlier than the previous one yields a zero-length tick.
    pub fn tick(&mut self, court: &Court, config: &Config, now_ms: u64) {
        let elapsed_ms = now_ms.saturating_sub(self.last_update) as f32;
        step(
            &mut self.world,
            court,
            config,
            &mut self.score,
            &mut self.events,
            &mut self.inputs,
            &mut self.rng,
            elapsed_ms,
        );
        self.last_update = now_ms;
    }

    /// Queue a player direction. The input collaborator calls this once per
    /// polled event; the direction takes effect at the next tick.
    pub fn set_player_direction(&mut self, dir: PaddleDir) {
        self.inputs.push_input(dir);
    }

    /// True once either side has reached the match target.
    pub fn check_match_end(&self, config: &Config) -> bool {
        self.score.winner(config.win_score).is_some()
    }

    /// Full reset after a finished match: paddles re-centered, ball
    /// re-centered and served, score zeroed, clock refreshed. A point-scored
    /// reset only re-serves the ball and happens inside the collision pass.
    pub fn reset_match(&mut self, court: &Court, config: &Config, now_ms: u64) {
        log::info!(
            "match over at {} - {}, resetting",
            self.score.player,
            self.score.enemy
        );

        let paddle_y = court.paddle_spawn_y(config.paddle_height);
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = paddle_y;
        }
        for (_e, intent) in self.world.query_mut::<&mut PaddleIntent>() {
            intent.dir = PaddleDir::Still;
        }
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            // Zero the direction first so the fresh match serves toward the
            // player again.
            ball.dir = Vec2::ZERO;
            ball.reset(court, config, &mut self.rng);
        }

        self.score = Score::new();
        self.events.clear();
        self.inputs = InputQueue::new();
        self.last_update = now_ms;
    }

    // Read-only accessors for the rendering collaborator. Paddles and ball
    // exist from construction on, so a missing entity only means the state
    // was built by hand in a test.

    pub fn paddle_y(&self, side: PaddleSide) -> f32 {
        let mut q = self.world.query::<&Paddle>();
        q.iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap_or(0.0)
    }

    pub fn ball_pos(&self) -> Vec2 {
        let mut q = self.world.query::<&Ball>();
        q.iter().next().map(|(_e, b)| b.pos).unwrap_or(Vec2::ZERO)
    }

    pub fn ball_dir(&self) -> Vec2 {
        let mut q = self.world.query::<&Ball>();
        q.iter().next().map(|(_e, b)| b.dir).unwrap_or(Vec2::ZERO)
    }

    pub fn score(&self) -> Score {
        self.score
    }
}
