use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

pub const BOARD_SIZE: usize = 8;
pub const FILES: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("invalid square name {0:?}: expected a file a-h followed by a rank 1-8")]
    InvalidSquareFormat(String),
}

/// A board square. Row 0 is rank 8 (the top of the board), column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` for coordinates off the board, which is how clicks
    /// outside the board surface reach the session.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let range = 0..BOARD_SIZE as i32;
        if range.contains(&row) && range.contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn file(self) -> char {
        FILES[self.col()]
    }

    pub fn rank(self) -> u8 {
        BOARD_SIZE as u8 - self.row
    }

    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            row: rng.gen_range(0..BOARD_SIZE as u8),
            col: rng.gen_range(0..BOARD_SIZE as u8),
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidSquareFormat(name.to_string());
        let mut chars = name.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = FILES.iter().position(|&f| f == file).ok_or_else(invalid)?;
        let rank = rank.to_digit(10).filter(|r| (1..=8).contains(r)).ok_or_else(invalid)?;
        Ok(Self {
            row: (BOARD_SIZE as u32 - rank) as u8,
            col: col as u8,
        })
    }
}

/// Algebraic name of the square at `(row, col)`; both must be in `0..8`.
pub fn square_name(row: usize, col: usize) -> String {
    debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
    format!("{}{}", FILES[col], BOARD_SIZE - row)
}

pub fn square_position(name: &str) -> Result<(usize, usize), SquareError> {
    let square: Square = name.parse()?;
    Ok((square.row(), square.col()))
}
