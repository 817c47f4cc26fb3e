use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The board is 4x4.
pub const SIZE: usize = 4;
/// Total cell count.
pub const CELLS: usize = SIZE * SIZE;
/// The value representing the blank cell.
pub const EMPTY: u8 = 0;

/// A sliding direction. The direction names the tile that slides INTO the
/// blank cell: `Up` means the tile currently below the blank moves up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Offset from the blank cell to the tile that slides in this direction,
    /// as (row delta, column delta).
    #[inline]
    pub fn tile_offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction `{0}`")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the full command word or its single-letter form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UP" | "U" => Ok(Direction::Up),
            "DOWN" | "D" => Ok(Direction::Down),
            "LEFT" | "L" => Ok(Direction::Left),
            "RIGHT" | "R" => Ok(Direction::Right),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}
