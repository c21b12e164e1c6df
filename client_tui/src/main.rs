//! Terminal front end: the frame loop, input polling, and rectangle
//! rendering around the simulation core. The core never sees any of this;
//! it only receives timestamps and queued directions.

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use game_core::{Config, Court, PaddleDir, PaddleSide, PlayState};
use tracing_subscriber::EnvFilter;

mod input;
mod render;
mod screen;

use input::Action;
use screen::Screen;

/// Classic Pong against a computer opponent.
#[derive(Parser)]
#[command(name = "pong", version, about)]
struct Cli {
    /// Court width in pixels
    #[arg(long, default_value_t = 640)]
    width: i32,
    /// Court height in pixels
    #[arg(long, default_value_t = 480)]
    height: i32,
    /// Seed for the serve randomizer; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Target frame rate
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..=240))]
    fps: u64,
}

fn main() -> anyhow::Result<()> {
    // Keep the alternate screen clean: log to stderr, and only when asked.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let court = Court::new(cli.width, cli.height);
    screen::check_court(&court)?;

    let seed = cli.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::debug!("starting match on {}x{} with seed {}", court.width, court.height, seed);

    let mut screen = Screen::init().context("terminal setup failed")?;
    let outcome = run(&mut screen, &court, seed, cli.fps);
    drop(screen); // restore the terminal before printing anything

    match outcome? {
        Some(PaddleSide::Player) => println!("you won"),
        Some(PaddleSide::Enemy) => println!("you lost"),
        None => {}
    }
    Ok(())
}

fn run(
    screen: &mut Screen,
    court: &Court,
    seed: u64,
    fps: u64,
) -> anyhow::Result<Option<PaddleSide>> {
    let config = Config::new();
    let start = Instant::now();
    let mut state = PlayState::new(court, &config, seed, 0);
    let frame_budget = Duration::from_millis(1000 / fps);

    loop {
        let frame_start = Instant::now();

        // Input: the last direction key this frame wins; no key means stop,
        // key auto-repeat keeps a held paddle moving.
        let mut dir = PaddleDir::Still;
        for action in input::poll_actions()? {
            match action {
                Action::Quit => return Ok(None),
                Action::Move(d) => dir = d,
            }
        }
        state.set_player_direction(dir);

        state.tick(court, &config, start.elapsed().as_millis() as u64);
        render::draw_frame(screen, &state, court, &config)?;

        if state.check_match_end(&config) {
            let winner = state.score().winner(config.win_score);
            render::draw_banner(screen, winner)?;
            if input::wait_for_key()? == Action::Quit {
                return Ok(winner);
            }
            state.reset_match(court, &config, start.elapsed().as_millis() as u64);
        }

        // Throttle to the frame budget; a slow frame just runs long and the
        // next tick integrates the real elapsed time.
        let spent = frame_start.elapsed();
        if spent < frame_budget {
            std::thread::sleep(frame_budget - spent);
        }
    }
}
