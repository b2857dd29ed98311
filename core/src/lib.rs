#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Validated board parameters: a square of `dim_size` cells per side holding `mines` mines.
///
/// Only [`GameConfig::new`] builds one, deserializing included, so at least one cell is always
/// safe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    dim_size: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    dim_size: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.dim_size, raw.mines)
    }
}

impl GameConfig {
    pub(crate) const fn new_unchecked(dim_size: Coord, mines: CellCount) -> Self {
        Self { dim_size, mines }
    }

    pub fn new(dim_size: Coord, mines: CellCount) -> Result<Self> {
        if dim_size == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines >= square(dim_size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(dim_size, mines))
    }

    pub const fn dim_size(&self) -> Coord {
        self.dim_size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Coord2 {
        (self.dim_size, self.dim_size)
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.dim_size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10)
    }
}

/// Where the mines are. Always square, non-empty and with at least one safe cell.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows != cols || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        if rows == 0 {
            return Err(GameError::EmptyBoard);
        }

        let layout = Self::from_square_mask(mine_mask);
        if layout.safe_cell_count() == 0 {
            return Err(GameError::TooManyMines);
        }
        Ok(layout)
    }

    /// Callers guarantee a square, non-empty mask.
    pub(crate) fn from_square_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(dim_size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if dim_size == 0 {
            return Err(GameError::EmptyBoard);
        }
        let mut mine_mask: Array2<bool> = Array2::default((dim_size, dim_size).to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= dim_size || coords.1 >= dim_size {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn dim_size(&self) -> Coord {
        self.mine_mask.nrows() as Coord
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    /// Resolves every cell to its final value. Requires the full layout, so it runs after
    /// placement.
    pub fn to_cell_values(&self) -> Array2<CellValue> {
        Array2::from_shape_fn(self.mine_mask.dim(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if self[coords] {
                CellValue::Mine
            } else {
                CellValue::Count(self.adjacent_mine_count(coords))
            }
        })
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of a single reveal, as seen by whoever drives the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Safe,
    HitMine,
    Won,
}

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_full_board() {
        assert_eq!(GameConfig::new(3, 9), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(3, 10), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(1, 1), Err(GameError::TooManyMines));
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new(0, 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn config_counts_cells() {
        let config = GameConfig::new(3, 8).unwrap();
        assert_eq!(config.total_cells(), 9);
        assert_eq!(config.safe_cells(), 1);
        assert_eq!(GameConfig::default(), GameConfig::new(10, 10).unwrap());
    }

    #[test]
    fn layout_rejects_out_of_range_mine() {
        assert_eq!(
            MineLayout::from_mine_coords(2, &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn layout_rejects_full_mask() {
        assert_eq!(
            MineLayout::from_mine_coords(1, &[(0, 0)]),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn duplicate_mine_coords_collapse() {
        let layout = MineLayout::from_mine_coords(3, &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(layout.mine_count(), 1);
    }

    #[test]
    fn diagonal_neighbor_is_counted() {
        let layout = MineLayout::from_mine_coords(2, &[(0, 0)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((1, 1)), 1);
        let values = layout.to_cell_values();
        assert_eq!(values[[0, 0]], CellValue::Mine);
        assert_eq!(values[[1, 1]], CellValue::Count(1));
    }

    #[test]
    fn degenerate_raw_config_is_rejected() {
        let full = RawGameConfig {
            dim_size: 1,
            mines: 1,
        };
        let empty = RawGameConfig {
            dim_size: 0,
            mines: 1,
        };

        assert_eq!(GameConfig::try_from(full), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::try_from(empty), Err(GameError::EmptyBoard));
    }

    #[test]
    fn mask_must_be_square() {
        assert_eq!(
            MineLayout::from_mine_mask(Array2::default([3, 1])),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn mask_must_not_be_empty() {
        assert_eq!(
            MineLayout::from_mine_mask(Array2::default([0, 0])),
            Err(GameError::EmptyBoard)
        );
    }

    #[test]
    fn mask_must_leave_a_safe_cell() {
        assert_eq!(
            MineLayout::from_mine_mask(Array2::from_elem([2, 2], true)),
            Err(GameError::TooManyMines)
        );
    }
}
