//! Live game session management
//!
//! `Session` is the engine-side half of the presentation contract: it owns
//! the current board, an undo history of prior boards, and the negamax tree
//! for the current position. A front end reads `hint` for auto-play,
//! `preview` for "what if I play here" sub-trees, and `status` for the
//! message to display.

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Coord, Player},
    game_tree::{self, DEFAULT_CUTOFF_DEPTH, TreeNode},
};

/// Terminal or in-progress state of the session board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Win(Player),
    Draw,
    ToPlay(Player),
}

/// A playable game: current board, undo history, and the analysis tree for
/// the current position. The tree is recomputed after every board change;
/// there is no incremental search to resume.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    history: Vec<Board>,
    tree: TreeNode,
    cutoff_depth: usize,
}

impl Session {
    /// Start a session at the empty board with the default pruning cutoff
    pub fn new() -> Self {
        Self::with_cutoff_depth(DEFAULT_CUTOFF_DEPTH)
    }

    /// Start a session with an explicit pruning cutoff depth
    pub fn with_cutoff_depth(cutoff_depth: usize) -> Self {
        let board = Board::new();
        Session {
            board,
            history: Vec::new(),
            tree: game_tree::negamax(board, cutoff_depth),
            cutoff_depth,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// The analysis tree for the current board
    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    /// Apply a move for the player whose turn it is, pushing the previous
    /// board onto the undo history.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SquareOccupied`] if the square is occupied;
    /// the board and history are unchanged on failure.
    pub fn play(&mut self, coord: Coord) -> crate::Result<()> {
        let next = self.board.play(coord)?;
        self.history.push(self.board);
        self.update(next);
        Ok(())
    }

    /// Restore the board before the most recent move. Does nothing when
    /// there is no history.
    pub fn undo(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.update(previous);
        }
    }

    /// Reset to the empty board and clear the history
    pub fn restart(&mut self) {
        self.history.clear();
        self.update(Board::new());
    }

    /// Top-ranked move for the side to move; `None` once the game is over
    pub fn hint(&self) -> Option<Coord> {
        self.tree.best_move()
    }

    /// Sub-tree reached by playing `coord` from the current position
    pub fn preview(&self, coord: Coord) -> Option<&TreeNode> {
        self.tree.child_for(coord)
    }

    pub fn status(&self) -> Status {
        if let Some(winner) = self.board.winner() {
            Status::Win(winner.player)
        } else if self.board.count_empty() == 0 {
            Status::Draw
        } else {
            Status::ToPlay(self.board.next_player())
        }
    }

    fn update(&mut self, board: Board) {
        self.board = board;
        self.tree = game_tree::negamax(board, self.cutoff_depth);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
