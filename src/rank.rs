//! Move enumeration and heuristic ranking
//!
//! A rank function maps `(board, square index)` to a real number; higher is
//! more desirable for the player about to move. The default ranker combines
//! the winning-line-potential count with a uniform random jitter strictly
//! below 1, so that integer ties break differently on each analysis of the
//! same position. Every consumer also accepts an injected rank function,
//! which is how tests substitute a deterministic ordering.

use rand::{Rng, distr::StandardUniform};
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Coord, SquareState},
    lines,
};

/// An empty square annotated with its heuristic rank.
///
/// Transient move-ordering data; ranks are not part of persistent state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedMove {
    pub coord: Coord,
    pub rank: f64,
}

/// Default rank: open winning lines through the square, plus a jitter in
/// `[0, 1)` that breaks integer-count ties pseudo-randomly
pub fn default_rank(board: Board, index: usize) -> f64 {
    let jitter: f64 = rand::rng().sample(StandardUniform);
    lines::count_possible_wins_by_index(board, index) as f64 + jitter
}

/// Enumerate the empty squares in index order, ranked by the default ranker
pub fn available_moves(board: Board) -> Vec<RankedMove> {
    available_moves_with(board, default_rank)
}

/// Enumerate the empty squares in index order, ranked by `rank_fn`
pub fn available_moves_with<F>(board: Board, rank_fn: F) -> Vec<RankedMove>
where
    F: Fn(Board, usize) -> f64,
{
    (0..9)
        .filter(|&i| board.get_index(i) == SquareState::Empty)
        .map(|i| RankedMove {
            coord: Coord::from_index_unchecked(i),
            rank: rank_fn(board, i),
        })
        .collect()
}

/// Enumerate the empty squares sorted descending by default rank
pub fn available_moves_ranked(board: Board) -> Vec<RankedMove> {
    available_moves_ranked_with(board, default_rank)
}

/// Enumerate the empty squares sorted descending by `rank_fn`. Equal ranks
/// may appear in any order; callers must not rely on tie placement.
pub fn available_moves_ranked_with<F>(board: Board, rank_fn: F) -> Vec<RankedMove>
where
    F: Fn(Board, usize) -> f64,
{
    let mut moves = available_moves_with(board, rank_fn);
    moves.sort_by(|a, b| b.rank.total_cmp(&a.rank));
    moves
}
