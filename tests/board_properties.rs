//! Board-level properties exercised through the public API

use oxo::{Board, Coord, Player, SquareState, available_moves_ranked_with};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

fn all_coords() -> Vec<Coord> {
    (0..9)
        .map(|i| Coord::from_index(i).expect("indices 0-8 are valid"))
        .collect()
}

#[test]
fn text_round_trip_for_random_full_boards() {
    let mut rng = StdRng::seed_from_u64(7);
    let marks = [SquareState::X, SquareState::O];

    for _ in 0..20 {
        let mut board = Board::new();
        for coord in all_coords() {
            let mark = *marks.choose(&mut rng).expect("non-empty slice");
            board = board.set(coord, mark).expect("filling a fresh board");
        }
        assert_eq!(board.count_empty(), 0);
        assert_eq!(Board::from_text(&board.to_string()), board);
    }
}

#[test]
fn filling_by_turn_order_produces_the_alternating_board() {
    let mut board = Board::new();
    assert_eq!(board.next_player(), Player::X);
    for coord in all_coords() {
        board = board.play(coord).expect("playing on an empty square");
    }
    assert_eq!(board.to_string(), "XOX\nOXO\nXOX");
}

#[test]
fn winner_is_reported_with_its_line() {
    let top_row = Board::from_text("XXX\nOO.\n...").winner().unwrap();
    assert_eq!(top_row.player, Player::X);
    assert_eq!(top_row.line, [0, 1, 2]);

    let diagonal = Board::from_text("XO.\nOX.\n..X").winner().unwrap();
    assert_eq!(diagonal.player, Player::X);
    assert_eq!(diagonal.line, [0, 4, 8]);

    assert_eq!(Board::new().winner(), None);
}

#[test]
fn occupied_squares_reject_every_replacement() {
    for seed in [SquareState::X, SquareState::O] {
        for coord in all_coords() {
            let board = Board::new().set(coord, seed).unwrap();
            for attempt in [SquareState::X, SquareState::O] {
                assert!(board.set(coord, attempt).is_err());
            }
        }
    }
}

#[test]
fn ranked_moves_shrink_as_the_game_progresses() {
    let mut board = Board::new();
    let by_index = |_: Board, i: usize| i as f64;

    for expected in (1..=9).rev() {
        let moves = available_moves_ranked_with(board, by_index);
        assert_eq!(moves.len(), expected);
        let coord = moves[0].coord;
        board = board.play(coord).expect("enumerated move is legal");
    }
    assert_eq!(board.count_empty(), 0);
}
