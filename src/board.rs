//! Board configuration and peg lattice
//!
//! The lattice is computed once per board configuration and shared read-only
//! between the physics integrator and the rendering collaborator. Recomputing
//! it separately for display would let physics and visuals diverge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ValidationError;
use crate::prize::{MAX_PRIZES, MIN_PRIZES};

/// Board dimensions and lattice shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: f32,
    pub height: f32,
    pub peg_rows: usize,
    pub slot_count: usize,
}

impl BoardConfig {
    pub fn new(
        width: f32,
        height: f32,
        peg_rows: usize,
        slot_count: usize,
    ) -> Result<Self, ValidationError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ValidationError::Board("dimensions must be positive"));
        }
        if peg_rows == 0 {
            return Err(ValidationError::Board("at least one peg row required"));
        }
        if !(MIN_PRIZES..=MAX_PRIZES).contains(&slot_count) {
            return Err(ValidationError::Board("slot count must be within 3 to 8"));
        }
        Ok(Self {
            width,
            height,
            peg_rows,
            slot_count,
        })
    }

    /// Width of one landing slot
    pub fn slot_width(&self) -> f32 {
        self.width / self.slot_count as f32
    }

    /// Vertical position at which the ball is considered settled
    pub fn rest_line(&self) -> f32 {
        self.height - REST_LINE_INSET
    }

    /// Leftmost ball-center position inside the walls
    pub fn min_ball_x(&self) -> f32 {
        BORDER_WIDTH + BALL_RADIUS
    }

    /// Rightmost ball-center position inside the walls
    pub fn max_ball_x(&self) -> f32 {
        self.width - BORDER_WIDTH - BALL_RADIUS
    }

    /// Map a horizontal position to its landing slot, clamped to valid range
    pub fn slot_for_x(&self, x: f32) -> usize {
        let slot = (x / self.slot_width()).floor() as isize;
        slot.clamp(0, self.slot_count as isize - 1) as usize
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 375.0,
            height: 500.0,
            peg_rows: 10,
            slot_count: 6,
        }
    }
}

/// One peg of the lattice, immutable once computed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peg {
    pub row: usize,
    pub col: usize,
    pub pos: Vec2,
}

/// Generate the triangular peg lattice for a board
///
/// Even rows carry `slot_count` pegs; odd rows are offset half a spacing and
/// carry one fewer, forming a funnel converging toward the slots. Every peg
/// is inset from the side walls by at least border + peg radius + padding.
pub fn generate_pegs(board: &BoardConfig) -> Vec<Peg> {
    let playable_width = board.width - 2.0 * BORDER_WIDTH;
    let playable_height = board.height - TOP_MARGIN - SLOT_ZONE_HEIGHT;
    let h_spacing = playable_width / board.slot_count as f32;
    let v_spacing = playable_height / (board.peg_rows + 1) as f32;

    let min_x = BORDER_WIDTH + PEG_RADIUS + PEG_WALL_PADDING;
    let max_x = board.width - min_x;

    let mut pegs = Vec::new();
    for row in 0..board.peg_rows {
        let y = TOP_MARGIN + (row + 1) as f32 * v_spacing;
        let odd = row % 2 == 1;
        let count = if odd {
            board.slot_count - 1
        } else {
            board.slot_count
        };
        let offset = if odd { h_spacing } else { h_spacing / 2.0 };
        for col in 0..count {
            let x = (BORDER_WIDTH + offset + col as f32 * h_spacing).clamp(min_x, max_x);
            pegs.push(Peg {
                row,
                col,
                pos: Vec2::new(x, y),
            });
        }
    }
    pegs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_valid() {
        let board = BoardConfig::default();
        assert!(BoardConfig::new(board.width, board.height, board.peg_rows, board.slot_count).is_ok());
    }

    #[test]
    fn rejects_degenerate_boards() {
        assert!(BoardConfig::new(0.0, 500.0, 10, 6).is_err());
        assert!(BoardConfig::new(375.0, 500.0, 0, 6).is_err());
        assert!(BoardConfig::new(375.0, 500.0, 10, 2).is_err());
        assert!(BoardConfig::new(375.0, 500.0, 10, 9).is_err());
    }

    #[test]
    fn row_counts_alternate() {
        let board = BoardConfig::default();
        let pegs = generate_pegs(&board);
        for row in 0..board.peg_rows {
            let count = pegs.iter().filter(|p| p.row == row).count();
            let expected = if row % 2 == 1 {
                board.slot_count - 1
            } else {
                board.slot_count
            };
            assert_eq!(count, expected, "row {row}");
        }
    }

    #[test]
    fn odd_rows_offset_by_half_spacing() {
        let board = BoardConfig::default();
        let pegs = generate_pegs(&board);
        let first_even = pegs.iter().find(|p| p.row == 0 && p.col == 0).unwrap();
        let first_odd = pegs.iter().find(|p| p.row == 1 && p.col == 0).unwrap();
        let h_spacing = (board.width - 2.0 * BORDER_WIDTH) / board.slot_count as f32;
        assert!((first_odd.pos.x - first_even.pos.x - h_spacing / 2.0).abs() < 1e-4);
    }

    #[test]
    fn pegs_stay_clear_of_walls() {
        for slots in MIN_PRIZES..=MAX_PRIZES {
            let board = BoardConfig::new(375.0, 500.0, 12, slots).unwrap();
            let min_x = BORDER_WIDTH + PEG_RADIUS + PEG_WALL_PADDING;
            for peg in generate_pegs(&board) {
                assert!(peg.pos.x >= min_x - 1e-4);
                assert!(peg.pos.x <= board.width - min_x + 1e-4);
            }
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let board = BoardConfig::default();
        assert_eq!(generate_pegs(&board), generate_pegs(&board));
    }

    #[test]
    fn slot_mapping_clamps() {
        let board = BoardConfig::default();
        assert_eq!(board.slot_for_x(-50.0), 0);
        assert_eq!(board.slot_for_x(board.width + 50.0), board.slot_count - 1);
        assert_eq!(board.slot_for_x(board.slot_width() * 2.5), 2);
    }
}
