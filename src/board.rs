use std::fmt;

use crate::config::Configuration;
use crate::error::{ConfigError, InvalidConfiguration, PositionOutOfBoard};
use crate::types::{Direction, CELLS, EMPTY, SIZE};

/// Capability interface over the tile storage. Both implementations must
/// produce identical observable behavior through [`Board`]; the shared test
/// suite in `tests/board_tests.rs` is run against each.
pub trait TileGrid: Clone + PartialEq + Eq + fmt::Debug + Default {
    /// Reads the value at (row, col). Callers guarantee bounds.
    fn get(&self, row: usize, col: usize) -> u8;
    /// Writes the value at (row, col). Callers guarantee bounds.
    fn set(&mut self, row: usize, col: usize, value: u8);
}

/// Flat-array layout, cells 0..16 laid out row-major (r*4 + c).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatGrid {
    cells: [u8; CELLS],
}

impl Default for FlatGrid {
    fn default() -> Self {
        Self {
            cells: [EMPTY; CELLS],
        }
    }
}

impl TileGrid for FlatGrid {
    #[inline]
    fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * SIZE + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * SIZE + col] = value;
    }
}

/// Row/column matrix layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixGrid {
    rows: [[u8; SIZE]; SIZE],
}

impl Default for MatrixGrid {
    fn default() -> Self {
        Self {
            rows: [[EMPTY; SIZE]; SIZE],
        }
    }
}

impl TileGrid for MatrixGrid {
    #[inline]
    fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: u8) {
        self.rows[row][col] = value;
    }
}

/// The 4x4 puzzle board: tile grid, cached blank position, move counter and
/// the configuration it was built from. The storage layout is chosen at
/// construction time through the `G` parameter.
///
/// Cloning performs a deep copy; a clone never aliases the source's storage.
#[derive(Debug, Clone)]
pub struct Board<G: TileGrid = FlatGrid> {
    tiles: G,
    empty: (usize, usize),
    moves: u32,
    config: Configuration,
}

pub type FlatBoard = Board<FlatGrid>;
pub type MatrixBoard = Board<MatrixGrid>;

impl<G: TileGrid> Board<G> {
    /// Builds a board by applying `config`. Fails on malformed text or
    /// invalid tile contents; no board is produced in that case.
    pub fn from_config(config: &Configuration) -> Result<Self, ConfigError> {
        let mut board = Self {
            tiles: G::default(),
            empty: (0, 0),
            moves: 0,
            config: config.clone(),
        };
        config.apply_to(&mut board)?;
        Ok(board)
    }

    /// Convenience constructor from raw configuration text.
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        let config = Configuration::new(text).map_err(ConfigError::from)?;
        Self::from_config(&config)
    }

    /// The tile value at (row, col), `EMPTY` for the blank.
    pub fn get_tile(&self, row: usize, col: usize) -> Result<u8, PositionOutOfBoard> {
        if row >= SIZE || col >= SIZE {
            return Err(PositionOutOfBoard {
                row: row as isize,
                col: col as isize,
            });
        }
        Ok(self.tiles.get(row, col))
    }

    /// Writes a tile value. Uniqueness is not enforced here; it is checked
    /// by [`Board::ensure_validity`] once all writes are done.
    pub fn set_tile(&mut self, row: usize, col: usize, value: u8) -> Result<(), PositionOutOfBoard> {
        if row >= SIZE || col >= SIZE {
            return Err(PositionOutOfBoard {
                row: row as isize,
                col: col as isize,
            });
        }
        self.put(row, col, value);
        Ok(())
    }

    /// Bounds-unchecked write used by the initializer; keeps the blank
    /// cache in step with the grid.
    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, value: u8) {
        self.tiles.set(row, col, value);
        if value == EMPTY {
            self.empty = (row, col);
        }
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> u8 {
        self.tiles.get(row, col)
    }

    /// Slides the tile adjacent to the blank in `direction` into the blank
    /// and increments the move counter. Fails with [`PositionOutOfBoard`]
    /// when the blank sits at the board edge the tile would come from; the
    /// board and the counter are untouched then.
    pub fn slide(&mut self, direction: Direction) -> Result<(), PositionOutOfBoard> {
        let (dr, dc) = direction.tile_offset();
        let row = self.empty.0 as isize + dr;
        let col = self.empty.1 as isize + dc;
        if row < 0 || row >= SIZE as isize || col < 0 || col >= SIZE as isize {
            return Err(PositionOutOfBoard { row, col });
        }
        let (tile_row, tile_col) = (row as usize, col as usize);
        let (empty_row, empty_col) = self.empty;
        let value = self.at(tile_row, tile_col);
        self.tiles.set(empty_row, empty_col, value);
        self.tiles.set(tile_row, tile_col, EMPTY);
        self.empty = (tile_row, tile_col);
        self.moves += 1;
        Ok(())
    }

    /// True iff the blank occupies the last cell and every other cell k
    /// (row-major) holds k+1.
    pub fn is_solved(&self) -> bool {
        if self.empty != (SIZE - 1, SIZE - 1) {
            return false;
        }
        for row in 0..SIZE {
            for col in 0..SIZE {
                let expected = (row * SIZE + col + 1) as u8;
                if expected < CELLS as u8 && self.at(row, col) != expected {
                    return false;
                }
            }
        }
        true
    }

    /// Permutation-parity solvability classification, preserved bit-exact
    /// from the original engine: inversions are counted over the non-blank
    /// tiles read in column-major order, the blank contributes
    /// `SIZE - blank_row` on an even-sized grid, and the configuration is
    /// solvable iff that sum is odd.
    pub fn is_solvable(&self) -> bool {
        let mut inversions = 0usize;
        let mut blank_row = 0usize;
        for col in 0..SIZE {
            for row in 0..SIZE {
                let value = self.at(row, col);
                if value == EMPTY {
                    blank_row = row;
                    continue;
                }
                // Later rows in the same column.
                for r in row + 1..SIZE {
                    let other = self.at(r, col);
                    if other != EMPTY && value > other {
                        inversions += 1;
                    }
                }
                // Every cell in the columns to the right.
                for c in col + 1..SIZE {
                    for r in 0..SIZE {
                        let other = self.at(r, c);
                        if other != EMPTY && value > other {
                            inversions += 1;
                        }
                    }
                }
            }
        }
        let offset = if SIZE % 2 == 0 { SIZE - blank_row } else { 1 };
        (inversions + offset) % 2 == 1
    }

    /// Checks that every non-blank value lies in 1..=15 and that no value
    /// (blank included) appears twice.
    pub fn ensure_validity(&self) -> Result<(), InvalidConfiguration> {
        let mut found = [false; CELLS];
        for row in 0..SIZE {
            for col in 0..SIZE {
                let value = self.at(row, col);
                if value != EMPTY && !(1..CELLS as u8).contains(&value) {
                    return Err(InvalidConfiguration::ValueOutOfRange(value));
                }
                if found[value as usize] {
                    return Err(InvalidConfiguration::Duplicate(value));
                }
                found[value as usize] = true;
            }
        }
        Ok(())
    }

    /// Position of the blank cell as (row, col).
    #[inline]
    pub fn empty_position(&self) -> (usize, usize) {
        self.empty
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    #[inline]
    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

/// Boards of the same layout are equal iff all 16 cell values and the move
/// counters match; blank-position equality is implied by the cells.
impl<G: TileGrid> PartialEq for Board<G> {
    fn eq(&self, other: &Self) -> bool {
        self.moves == other.moves && self.tiles == other.tiles
    }
}

impl<G: TileGrid> Eq for Board<G> {}
