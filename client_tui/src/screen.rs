use std::io::{self, Stdout};

use crossterm::{cursor, execute, terminal};
use game_core::Court;
use thiserror::Error;

/// Smallest court the fixed pixel geometry (paddles, digits, midline) still
/// fits into.
pub const MIN_WIDTH: i32 = 320;
pub const MIN_HEIGHT: i32 = 240;

/// Errors surfaced while preparing the terminal for play.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("court {width}x{height} is too small; need at least {min_width}x{min_height}")]
    CourtTooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reject court sizes the fixed geometry cannot fit.
pub fn check_court(court: &Court) -> Result<(), SetupError> {
    if court.width < MIN_WIDTH || court.height < MIN_HEIGHT {
        return Err(SetupError::CourtTooSmall {
            width: court.width,
            height: court.height,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        });
    }
    Ok(())
}

/// RAII guard around raw mode and the alternate screen; dropping it restores
/// the caller's terminal.
pub struct Screen {
    pub out: Stdout,
    pub cols: u16,
    pub rows: u16,
}

impl Screen {
    pub fn init() -> Result<Self, SetupError> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        let (cols, rows) = terminal::size()?;
        Ok(Self { out, cols, rows })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}
