//! Packed board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to the square state of their mark
    pub fn to_square(self) -> SquareState {
        match self {
            Player::X => SquareState::X,
            Player::O => SquareState::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_square().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// State of a single square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareState {
    Empty,
    X,
    O,
}

impl SquareState {
    pub fn to_char(self) -> char {
        match self {
            SquareState::Empty => '.',
            SquareState::X => 'X',
            SquareState::O => 'O',
        }
    }

    /// Parse a square character. Unrecognized characters map to `Empty`;
    /// this leniency is part of the serialization contract.
    pub fn from_char(c: char) -> SquareState {
        match c {
            'X' => SquareState::X,
            'O' => SquareState::O,
            _ => SquareState::Empty,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            SquareState::X => Some(Player::X),
            SquareState::O => Some(Player::O),
            SquareState::Empty => None,
        }
    }

    /// Two-bit encoding of this state (Empty = 0b00, X = 0b01, O = 0b10)
    pub(crate) fn bits(self) -> u32 {
        match self {
            SquareState::Empty => 0b00,
            SquareState::X => 0b01,
            SquareState::O => 0b10,
        }
    }

    pub(crate) fn from_bits(bits: u32) -> SquareState {
        match bits {
            0b01 => SquareState::X,
            0b10 => SquareState::O,
            _ => SquareState::Empty,
        }
    }
}

/// A square coordinate on the 3x3 board.
///
/// Both components are validated to lie in `0..3` at construction, so any
/// `Coord` value indexes the board without a failure mode. An absent
/// selection is `Option<Coord>`, never a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    x: usize,
    y: usize,
}

impl Coord {
    /// Create a coordinate, validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinate`] if either component is >= 3.
    pub fn new(x: usize, y: usize) -> crate::Result<Coord> {
        if x < 3 && y < 3 {
            Ok(Coord { x, y })
        } else {
            Err(crate::Error::InvalidCoordinate { x, y })
        }
    }

    /// Create a coordinate from a row-major square index.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIndex`] if the index is >= 9.
    pub fn from_index(index: usize) -> crate::Result<Coord> {
        if index < 9 {
            Ok(Coord {
                x: index % 3,
                y: index / 3,
            })
        } else {
            Err(crate::Error::InvalidIndex { index })
        }
    }

    /// Internal constructor for indices already known to be in range
    pub(crate) fn from_index_unchecked(index: usize) -> Coord {
        debug_assert!(index < 9);
        Coord {
            x: index % 3,
            y: index / 3,
        }
    }

    pub fn x(self) -> usize {
        self.x
    }

    pub fn y(self) -> usize {
        self.y
    }

    /// Row-major square index (`y * 3 + x`)
    pub fn index(self) -> usize {
        self.y * 3 + self.x
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The entire board packed into a single integer, two bits per square.
///
/// Square `i` occupies bits `2i` and `2i + 1` of the low 18 bits; X marks
/// set the low bit of a pair and O marks the high bit, so the empty board
/// is zero. Boards are pure `Copy` values; every mutation returns a new
/// board and leaves the original unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Board(u32);

impl Board {
    /// Create the empty board
    pub fn new() -> Self {
        Board(0)
    }

    /// Raw packed bits, for line mask tests
    pub(crate) fn bits(self) -> u32 {
        self.0
    }

    /// Get the state of a square
    pub fn get(self, coord: Coord) -> SquareState {
        self.get_index(coord.index())
    }

    /// Get the state of a square by row-major index.
    ///
    /// Indices >= 9 address unused (always zero) bits and report `Empty`;
    /// rank functions may therefore probe indices without pre-validation.
    pub fn get_index(self, index: usize) -> SquareState {
        if index >= 9 {
            return SquareState::Empty;
        }
        SquareState::from_bits((self.0 >> (2 * index)) & 0b11)
    }

    /// Set the state of a square, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SquareOccupied`] if the target square is not
    /// empty. Overwriting a mark is an invariant violation, never silent.
    #[must_use = "set returns a new board; the original is unchanged"]
    pub fn set(self, coord: Coord, state: SquareState) -> crate::Result<Board> {
        if self.get(coord) != SquareState::Empty {
            return Err(crate::Error::SquareOccupied {
                x: coord.x(),
                y: coord.y(),
            });
        }
        Ok(Board(self.0 | (state.bits() << (2 * coord.index()))))
    }

    /// The player whose turn it is. X always moves first; turn order is
    /// derived from the filled-square count, not stored.
    pub fn next_player(self) -> Player {
        if self.count_filled() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Place the next player's mark on a square.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SquareOccupied`] if the square is occupied.
    #[must_use = "play returns a new board; the original is unchanged"]
    pub fn play(self, coord: Coord) -> crate::Result<Board> {
        self.set(coord, self.next_player().to_square())
    }

    /// Count occupied squares
    pub fn count_filled(self) -> usize {
        (0..9)
            .filter(|&i| self.get_index(i) != SquareState::Empty)
            .count()
    }

    /// Count empty squares
    pub fn count_empty(self) -> usize {
        9 - self.count_filled()
    }

    /// Find the first completed line, if any
    pub fn winner(self) -> Option<lines::Winner> {
        lines::winner(self)
    }

    /// Parse a board from text: rows of `.`/`X`/`O` separated by
    /// whitespace. Parsing is lenient by contract: unrecognized characters
    /// read as empty squares, and rows or columns beyond the third are
    /// ignored.
    pub fn from_text(s: &str) -> Board {
        let mut bits = 0u32;
        for (y, row) in s.split_whitespace().take(3).enumerate() {
            for (x, c) in row.chars().take(3).enumerate() {
                bits |= SquareState::from_char(c).bits() << (2 * (y * 3 + x));
            }
        }
        Board(bits)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..3 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..3 {
                write!(f, "{}", self.get_index(y * 3 + x).to_char())?;
            }
        }
        Ok(())
    }
}
