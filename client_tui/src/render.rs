use std::io::{self, Write};

use crossterm::{cursor, queue, style, terminal};
use game_core::glyphs::{self, PixelRect};
use game_core::{Config, Court, PaddleSide, PlayState};

use crate::screen::Screen;

/// Mapping from court pixels to terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct CellMap {
    px_per_col: f32,
    px_per_row: f32,
}

impl CellMap {
    pub fn new(court: &Court, cols: u16, rows: u16) -> Self {
        Self {
            px_per_col: court.width as f32 / cols as f32,
            px_per_row: court.height as f32 / rows as f32,
        }
    }

    /// Convert a court-pixel rectangle into (col, row, width, height) cells.
    /// Nonempty rectangles keep at least one cell so thin shapes such as the
    /// midline dots stay visible.
    pub fn to_cells(&self, rect: PixelRect) -> (u16, u16, u16, u16) {
        let col = (rect.x as f32 / self.px_per_col) as u16;
        let row = (rect.y as f32 / self.px_per_row) as u16;
        let w = ((rect.w as f32 / self.px_per_col).round() as u16).max(1);
        let h = ((rect.h as f32 / self.px_per_row).round() as u16).max(1);
        (col, row, w, h)
    }
}

/// Draw one frame of play from the read-only state accessors.
pub fn draw_frame(
    screen: &mut Screen,
    state: &PlayState,
    court: &Court,
    config: &Config,
) -> io::Result<()> {
    let map = CellMap::new(court, screen.cols, screen.rows);
    queue!(screen.out, terminal::Clear(terminal::ClearType::All))?;

    for rect in glyphs::midline_rects(court) {
        fill(screen, &map, rect, '·')?;
    }
    for side in [PaddleSide::Player, PaddleSide::Enemy] {
        let rect = glyphs::paddle_rect(side, state.paddle_y(side), config, court);
        fill(screen, &map, rect, '█')?;
    }
    fill(screen, &map, glyphs::ball_rect(state.ball_pos(), config), '█')?;

    let score = state.score();
    for (side, value) in [
        (PaddleSide::Player, score.player),
        (PaddleSide::Enemy, score.enemy),
    ] {
        for rect in glyphs::score_rects(value, side, court) {
            fill(screen, &map, rect, '█')?;
        }
    }

    screen.out.flush()
}

/// Center the end-of-match message over the last frame.
pub fn draw_banner(screen: &mut Screen, winner: Option<PaddleSide>) -> io::Result<()> {
    let msg = match winner {
        Some(PaddleSide::Player) => "You won! Go another round.",
        _ => "You lost. Try again.",
    };
    let hint = "press any key to continue, q to quit";

    let row = screen.rows / 2;
    let col = screen.cols.saturating_sub(msg.len() as u16) / 2;
    queue!(screen.out, cursor::MoveTo(col, row), style::Print(msg))?;
    let col = screen.cols.saturating_sub(hint.len() as u16) / 2;
    queue!(screen.out, cursor::MoveTo(col, row + 1), style::Print(hint))?;
    screen.out.flush()
}

fn fill(screen: &mut Screen, map: &CellMap, rect: PixelRect, ch: char) -> io::Result<()> {
    let (col, row, w, h) = map.to_cells(rect);
    let line: String = std::iter::repeat(ch).take(w as usize).collect();
    let bottom = row.saturating_add(h).min(screen.rows);
    for r in row..bottom {
        queue!(screen.out, cursor::MoveTo(col, r), style::Print(&line))?;
    }
    Ok(())
}
