//! Negamax game-tree search with alpha-beta pruning
//!
//! The search produces a fully scored tree of reachable positions. Scores
//! follow the negamax sign convention: a child's score is from the
//! perspective of the player to move at the child, so the parent negates it
//! when comparing. Terminal wins score `100 / depth` (integer division); the
//! depth discount prefers quick wins and drawn-out losses. Alpha-beta
//! pruning only engages once the search is at least `cutoff_depth` plies
//! deep, so every ply above the cutoff is searched full width and the root
//! ranking compares all alternatives.

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Coord, Player},
    rank::{self, RankedMove},
};

/// Depth at which alpha-beta pruning engages unless a caller overrides it
pub const DEFAULT_CUTOFF_DEPTH: usize = 5;

const SCORE_INFINITY: i32 = i32::MAX;

/// One position in a computed game tree.
///
/// Trees are built once per search call, owned by the caller, and never
/// mutated afterwards. To explore the consequences of a candidate move
/// beyond the stored children, run a fresh search from the child board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub board: Board,
    /// The move that produced this position; `None` at the root
    pub mv: Option<Coord>,
    pub score: i32,
    /// Child positions sorted ascending by their own score. Combined with
    /// the negamax sign flip this places the best reply for the player to
    /// move at this node first, so `children[0]` is the top move. The
    /// ascending sort is deliberate and load-bearing; do not "fix" it.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// The top-ranked move from this position, if the game is still open
    pub fn best_move(&self) -> Option<Coord> {
        self.children.first().and_then(|child| child.mv)
    }

    /// The sub-tree reached by playing `coord` from this position
    pub fn child_for(&self, coord: Coord) -> Option<&TreeNode> {
        self.children.iter().find(|child| child.mv == Some(coord))
    }
}

/// Search a position with the default rank function.
///
/// The returned tree is rooted at `board` with `mv == None`; read
/// `children[0]` for the best move.
pub fn negamax(board: Board, cutoff_depth: usize) -> TreeNode {
    negamax_with(board, cutoff_depth, rank::default_rank)
}

/// Search a position ordering moves with an injected rank function.
///
/// Move ordering affects pruning efficiency and tie placement, never the
/// algorithmic score of a position; a pure `rank_fn` makes the whole search
/// deterministic.
pub fn negamax_with<F>(board: Board, cutoff_depth: usize, rank_fn: F) -> TreeNode
where
    F: Fn(Board, usize) -> f64,
{
    search(
        board,
        None,
        board.next_player(),
        1,
        -SCORE_INFINITY,
        SCORE_INFINITY,
        cutoff_depth,
        &rank_fn,
    )
}

#[allow(clippy::too_many_arguments)]
fn search<F>(
    board: Board,
    last_move: Option<Coord>,
    player: Player,
    depth: usize,
    alpha: i32,
    beta: i32,
    cutoff_depth: usize,
    rank_fn: &F,
) -> TreeNode
where
    F: Fn(Board, usize) -> f64,
{
    if let Some(winner) = board.winner() {
        let magnitude = (100 / depth) as i32;
        let score = if winner.player == player {
            magnitude
        } else {
            -magnitude
        };
        return TreeNode {
            board,
            mv: last_move,
            score,
            children: Vec::new(),
        };
    }

    let moves = rank::available_moves_ranked_with(board, rank_fn);
    if moves.is_empty() {
        // Board full without a winner: drawn position
        return TreeNode {
            board,
            mv: last_move,
            score: 0,
            children: Vec::new(),
        };
    }

    let mut alpha = alpha;
    let mut children = Vec::with_capacity(moves.len());
    for RankedMove { coord, .. } in moves {
        let next = board
            .play(coord)
            .expect("enumerated moves target empty squares");
        let child = search(
            next,
            Some(coord),
            player.opponent(),
            depth + 1,
            -beta,
            -alpha,
            cutoff_depth,
            rank_fn,
        );
        alpha = alpha.max(-child.score);
        children.push(child);
        // Shallow plies always search full width; pruning is opt-in by depth
        if depth >= cutoff_depth && alpha >= beta {
            break;
        }
    }
    children.sort_by_key(|child| child.score);

    TreeNode {
        board,
        mv: last_move,
        score: alpha,
        children,
    }
}
