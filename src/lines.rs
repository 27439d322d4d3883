//! Winning line bitmasks and line analysis

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};

/// Bitmasks for the eight winning lines, expressed as X marks; shift left
/// once to get the O mask for the same line. Fixed order: rows top to
/// bottom, columns left to right, then the two diagonals.
pub const LINE_MASKS: [u32; 8] = [
    0b000000000000010101, // [0, 1, 2]
    0b000000010101000000, // [3, 4, 5]
    0b010101000000000000, // [6, 7, 8]
    0b000001000001000001, // [0, 3, 6]
    0b000100000100000100, // [1, 4, 7]
    0b010000010000010000, // [2, 5, 8]
    0b010000000100000001, // [0, 4, 8]
    0b000001000100010000, // [2, 4, 6]
];

/// A completed line and the player holding it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub player: Player,
    /// Square indices of the winning line, ascending
    pub line: [usize; 3],
}

/// Shift a base line mask to target one player's marks
fn mask_for(base: u32, player: Player) -> u32 {
    match player {
        Player::X => base,
        Player::O => base << 1,
    }
}

/// Find the first completed line on the board.
///
/// Players are checked X before O and lines in `LINE_MASKS` order. At most
/// one player can hold a line in a legal game, so the order only matters
/// for deterministic output.
pub fn winner(board: Board) -> Option<Winner> {
    for player in [Player::X, Player::O] {
        for base in LINE_MASKS {
            let mask = mask_for(base, player);
            if board.bits() & mask == mask {
                return Some(Winner {
                    player,
                    line: line_indices(mask),
                });
            }
        }
    }
    None
}

/// Recover the square indices of a line mask, scanning from the low bit up
fn line_indices(mask: u32) -> [usize; 3] {
    let mut line = [0usize; 3];
    let mut found = 0;
    let mut m = mask;
    let mut index = 0;
    while m > 0 && found < 3 {
        if m & 0b11 != 0 {
            line[found] = index;
            found += 1;
        }
        m >>= 2;
        index += 1;
    }
    line
}

/// Count how many winning lines remain open for the player about to move
/// through the square at `index`: lines that pass through the square and
/// contain no opposing mark yet. The mover's own marks do not disqualify a
/// line. This is the heuristic signal used for move ordering.
pub fn count_possible_wins_by_index(board: Board, index: usize) -> usize {
    let opponent = board.next_player().opponent();
    let square_mask = 0b11u32 << (2 * index);
    LINE_MASKS
        .iter()
        .filter(|&&base| {
            let opponent_mask = mask_for(base, opponent);
            square_mask & opponent_mask != 0 && board.bits() & opponent_mask == 0
        })
        .count()
}

/// [`count_possible_wins_by_index`] addressed by coordinate
pub fn count_possible_wins(board: Board, coord: crate::board::Coord) -> usize {
    count_possible_wins_by_index(board, coord.index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(winner(Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let result = winner(Board::from_text("XXX\n...\n...")).unwrap();
        assert_eq!(result.player, Player::X);
        assert_eq!(result.line, [0, 1, 2]);
    }

    #[test]
    fn test_winner_middle_column() {
        let result = winner(Board::from_text(".O.\n.O.\n.O.")).unwrap();
        assert_eq!(result.player, Player::O);
        assert_eq!(result.line, [1, 4, 7]);
    }

    #[test]
    fn test_winner_main_diagonal() {
        let result = winner(Board::from_text("X..\n.X.\n..X")).unwrap();
        assert_eq!(result.player, Player::X);
        assert_eq!(result.line, [0, 4, 8]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let result = winner(Board::from_text("..O\n.O.\nO..")).unwrap();
        assert_eq!(result.player, Player::O);
        assert_eq!(result.line, [2, 4, 6]);
    }

    #[test]
    fn test_winner_checks_x_before_o() {
        // Not reachable in a legal game, but the iteration order is fixed
        let result = winner(Board::from_text("OOO\nXXX\n...")).unwrap();
        assert_eq!(result.player, Player::X);
        assert_eq!(result.line, [3, 4, 5]);
    }

    #[test]
    fn test_no_winner_with_mixed_lines() {
        assert_eq!(winner(Board::from_text("XOX\nXOO\nOXX")), None);
    }

    #[test]
    fn test_possible_wins_on_empty_board() {
        let counts: Vec<usize> = (0..9)
            .map(|i| count_possible_wins_by_index(Board::new(), i))
            .collect();
        // Center crosses 4 lines, corners 3, edges 2
        assert_eq!(counts, vec![3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_possible_wins_by_coordinate() {
        let center = crate::board::Coord::new(1, 1).unwrap();
        assert_eq!(count_possible_wins(Board::new(), center), 4);
    }

    #[test]
    fn test_possible_wins_excludes_blocked_lines() {
        // X at index 0; O to move. The diagonal through 0 and 8 is blocked
        // for O, leaving the bottom row and right column open at 8.
        let board = Board::from_text("X..\n...\n...");
        assert_eq!(board.next_player(), Player::O);
        assert_eq!(count_possible_wins_by_index(board, 8), 2);
    }

    #[test]
    fn test_possible_wins_own_marks_keep_lines_open() {
        // X at 0 and 1, O at 4 and 5; X to move. Through index 2: the top
        // row holds only X marks and stays open, while O blocks both the
        // right column and the anti-diagonal.
        let board = Board::from_text("XX.\n.OO\n...");
        assert_eq!(board.next_player(), Player::X);
        assert_eq!(count_possible_wins_by_index(board, 2), 1);
    }
}
