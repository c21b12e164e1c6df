//! Pixel geometry the core prescribes to its rendering collaborator: score
//! digits as 5x5 bitmaps plus the dotted midline, emitted as plain
//! filled-rectangle requests in court pixels. Nothing here touches a drawing
//! surface.

use glam::Vec2;

use crate::components::PaddleSide;
use crate::config::Config;
use crate::court::Court;
use crate::params::Params;

pub const DIGIT_ROWS: usize = 5;
pub const DIGIT_COLS: usize = 5;

/// A filled rectangle in court pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Digit glyphs 0-9; `*` marks a filled cell.
const DIGITS: [[&str; DIGIT_ROWS]; 10] = [
    [" ****", "*   *", "* * *", "*   *", "*****"],
    ["  *  ", " **  ", "  *  ", "  *  ", "*****"],
    [" ****", "    *", "*****", "*    ", "*****"],
    ["*****", "    *", " ****", "    *", "*****"],
    ["*   *", "*   *", "*****", "    *", "    *"],
    ["**** ", "*    ", "*****", "    *", "*****"],
    ["**** ", "*    ", "*****", "*   *", "*****"],
    ["*****", "*   *", "    *", "    *", "    *"],
    ["*****", "*   *", "*****", "*   *", "*****"],
    ["*****", "*   *", "*****", "    *", "    *"],
];

/// Whether the glyph cell at (row, col) is filled, columns left to right.
pub fn digit_cell(digit: u32, row: usize, col: usize) -> bool {
    DIGITS[digit as usize][row].as_bytes()[col] == b'*'
}

/// Rectangles for one side's score: right-aligned against the midline on
/// the player half, mirrored on the enemy half. A score of 10 renders as
/// two digits, ordered so both sides read left to right.
pub fn score_rects(score: u32, side: PaddleSide, court: &Court) -> Vec<PixelRect> {
    let piece = Params::DIGIT_PIECE_SIZE;
    let sign = match side {
        PaddleSide::Player => -1,
        PaddleSide::Enemy => 1,
    };
    let mut first = sign * Params::DIGIT_OUTER_MARGIN * piece;
    let mut second = sign
        * piece
        * (Params::DIGIT_OUTER_MARGIN + Params::DIGIT_INNER_MARGIN + DIGIT_COLS as i32);
    if side == PaddleSide::Enemy && score == 10 {
        std::mem::swap(&mut first, &mut second);
    }

    let mut rects = digit_rects(score % 10, first, side, court);
    if score == 10 {
        rects.extend(digit_rects(1, second, side, court));
    }
    rects
}

/// Rectangles for a single digit whose anchor sits `x_offset` pixels from
/// the midline. The digit box is right-aligned at the anchor on the player
/// half and left-aligned on the enemy half.
fn digit_rects(digit: u32, x_offset: i32, side: PaddleSide, court: &Court) -> Vec<PixelRect> {
    let piece = Params::DIGIT_PIECE_SIZE;
    let span = DIGIT_COLS as i32 * piece;
    let side_offset = match side {
        PaddleSide::Player => 0,
        PaddleSide::Enemy => span,
    };
    let right_edge = court.width / 2 + x_offset + side_offset;

    let mut rects = Vec::new();
    for row in 0..DIGIT_ROWS {
        for col in 0..DIGIT_COLS {
            if digit_cell(digit, row, col) {
                rects.push(PixelRect {
                    x: right_edge - (DIGIT_COLS as i32 - col as i32) * piece,
                    y: (Params::DIGIT_OUTER_MARGIN + row as i32) * piece,
                    w: piece,
                    h: piece,
                });
            }
        }
    }
    rects
}

/// Number of dots the midline holds for this court height.
pub fn midline_points(court: &Court) -> i32 {
    1 + (court.height - Params::MIDLINE_PADDING * 2 - Params::MIDLINE_POINT_HEIGHT)
        / (Params::MIDLINE_POINT_MARGIN + Params::MIDLINE_POINT_HEIGHT)
}

/// Dotted midline rectangles, top to bottom.
pub fn midline_rects(court: &Court) -> Vec<PixelRect> {
    let mut rects = Vec::new();
    let mut y = Params::MIDLINE_PADDING;
    for _ in 0..midline_points(court) {
        rects.push(PixelRect {
            x: court.width / 2 - Params::MIDLINE_POINT_WIDTH / 2,
            y,
            w: Params::MIDLINE_POINT_WIDTH,
            h: Params::MIDLINE_POINT_HEIGHT,
        });
        y += Params::MIDLINE_POINT_HEIGHT + Params::MIDLINE_POINT_MARGIN;
    }
    rects
}

/// Rectangle for a paddle at the given top edge.
pub fn paddle_rect(side: PaddleSide, y: f32, config: &Config, court: &Court) -> PixelRect {
    PixelRect {
        x: config.paddle_x(side, court) as i32,
        y: y as i32,
        w: config.paddle_width as i32,
        h: config.paddle_height as i32,
    }
}

/// Rectangle for the ball at the given top-left corner.
pub fn ball_rect(pos: Vec2, config: &Config) -> PixelRect {
    PixelRect {
        x: pos.x as i32,
        y: pos.y as i32,
        w: config.ball_size as i32,
        h: config.ball_size as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_glyphs_are_5x5() {
        for digit in &DIGITS {
            assert_eq!(digit.len(), DIGIT_ROWS);
            for row in digit {
                assert_eq!(row.len(), DIGIT_COLS);
            }
        }
    }

    #[test]
    fn test_digit_cell_reads_glyph() {
        // Zero has a hollow interior with a dot in the middle.
        assert!(!digit_cell(0, 0, 0));
        assert!(digit_cell(0, 0, 1));
        assert!(digit_cell(0, 2, 2));
        assert!(!digit_cell(0, 2, 1));
    }

    #[test]
    fn test_single_digit_rect_count() {
        let court = Court::new(640, 480);
        // "1" fills 10 cells, "0" fills 16.
        assert_eq!(score_rects(1, PaddleSide::Player, &court).len(), 10);
        assert_eq!(score_rects(0, PaddleSide::Enemy, &court).len(), 16);
    }

    #[test]
    fn test_score_ten_renders_two_digits() {
        let court = Court::new(640, 480);
        let rects = score_rects(10, PaddleSide::Player, &court);
        assert_eq!(rects.len(), 16 + 10, "a one and a zero");
    }

    #[test]
    fn test_player_score_sits_left_of_midline() {
        let court = Court::new(640, 480);
        for rect in score_rects(8, PaddleSide::Player, &court) {
            assert!(rect.x + rect.w <= court.width / 2);
        }
    }

    #[test]
    fn test_enemy_score_sits_right_of_midline() {
        let court = Court::new(640, 480);
        for rect in score_rects(8, PaddleSide::Enemy, &court) {
            assert!(rect.x >= court.width / 2);
        }
    }

    #[test]
    fn test_score_ten_reads_left_to_right_on_both_sides() {
        let court = Court::new(640, 480);
        // The leading "1" must sit left of the trailing "0" on either half.
        for side in [PaddleSide::Player, PaddleSide::Enemy] {
            let zero_rects = score_rects(10, side, &court);
            let (zero, one) = zero_rects.split_at(16);
            let zero_min = zero.iter().map(|r| r.x).min().unwrap();
            let one_min = one.iter().map(|r| r.x).min().unwrap();
            assert!(
                one_min < zero_min,
                "the tens digit leads on the {:?} side",
                side
            );
        }
    }

    #[test]
    fn test_midline_point_count() {
        let court = Court::new(640, 480);
        // 1 + (480 - 40 - 6) / (3 + 6)
        assert_eq!(midline_points(&court), 49);
        assert_eq!(midline_rects(&court).len(), 49);
    }

    #[test]
    fn test_midline_stays_inside_court() {
        let court = Court::new(640, 480);
        for rect in midline_rects(&court) {
            assert!(rect.y >= 0 && rect.y + rect.h <= court.height);
            assert_eq!(rect.x, court.width / 2 - 1);
        }
    }

    #[test]
    fn test_paddle_and_ball_rects() {
        let court = Court::new(640, 480);
        let config = Config::new();
        assert_eq!(
            paddle_rect(PaddleSide::Player, 210.0, &config, &court),
            PixelRect { x: 0, y: 210, w: 20, h: 60 }
        );
        assert_eq!(
            paddle_rect(PaddleSide::Enemy, 210.0, &config, &court).x,
            620
        );
        let ball = ball_rect(Vec2::new(310.0, 230.0), &config);
        assert_eq!((ball.w, ball.h), (20, 20));
    }
}
