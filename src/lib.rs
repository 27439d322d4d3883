//! Tic-tac-toe board engine and negamax game-tree analyzer
//!
//! This crate provides:
//! - A packed-integer board representation (two bits per square)
//! - Win detection via line bitmask tests
//! - Heuristic move ranking with injectable rank functions
//! - Negamax search with alpha-beta pruning and depth-discounted scoring
//! - A [`Session`] type tracking a live game with an undo history
//!
//! The engine is purely functional over immutable [`Board`] values: each
//! move application returns a new board, searches share no state, and
//! independent calls never interfere.

pub mod board;
pub mod error;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod rank;

pub use board::{Board, Coord, Player, SquareState};
pub use error::{Error, Result};
pub use game::{Session, Status};
pub use game_tree::{DEFAULT_CUTOFF_DEPTH, TreeNode, negamax, negamax_with};
pub use lines::{LINE_MASKS, Winner, count_possible_wins, count_possible_wins_by_index};
pub use rank::{
    RankedMove, available_moves, available_moves_ranked, available_moves_ranked_with,
    available_moves_with, default_rank,
};
