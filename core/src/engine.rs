use alloc::collections::BTreeSet;
use alloc::vec;
use ndarray::Array2;

use crate::*;

/// The playing field: resolved cell values plus the set of cells the player has dug.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<CellValue>,
    mine_count: CellCount,
    revealed: BTreeSet<Coord2>,
}

impl Board {
    /// Places mines with `generator` and computes every neighbor count up front.
    pub fn new(config: GameConfig, generator: impl MineGenerator) -> Self {
        let layout = generator.generate(config);
        log::debug!(
            "New {}x{} board with {} mines",
            config.dim_size(),
            config.dim_size(),
            layout.mine_count()
        );
        Self::from_layout(&layout)
    }

    /// Shorthand for a rejection-sampled board.
    pub fn random(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RandomMineGenerator::new(seed, Placement::Rejection))
    }

    pub fn from_layout(layout: &MineLayout) -> Self {
        Self {
            cells: layout.to_cell_values(),
            mine_count: layout.mine_count(),
            revealed: BTreeSet::new(),
        }
    }

    pub fn from_mines(dim_size: Coord, mines: &[Coord2]) -> Result<Self> {
        MineLayout::from_mine_coords(dim_size, mines).map(|layout| Self::from_layout(&layout))
    }

    pub fn dim_size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed.len() as CellCount
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let dim_size = self.dim_size();
        if coords.0 < dim_size && coords.1 < dim_size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn value_at(&self, coords: Coord2) -> Result<CellValue> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed.contains(&coords)
    }

    /// The value the player is allowed to see, `None` while the cell is still hidden.
    pub fn visible_at(&self, coords: Coord2) -> Option<CellValue> {
        if self.is_revealed(coords) {
            self.value_at(coords).ok()
        } else {
            None
        }
    }

    pub fn revealed(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.revealed.iter().copied()
    }

    pub fn safe_cells_remaining(&self) -> CellCount {
        (self.total_cells() - self.mine_count).saturating_sub(self.revealed_count())
    }

    /// Every non-mine cell is revealed. Only safe cells are counted, a revealed mine never
    /// stands in for one.
    pub fn is_won(&self) -> bool {
        let revealed_safe = self
            .revealed
            .iter()
            .filter(|&&coords| !self.cells[coords.to_nd_index()].is_mine())
            .count() as CellCount;
        revealed_safe == self.total_cells() - self.mine_count
    }

    pub fn is_lost(&self) -> bool {
        self.revealed
            .iter()
            .any(|&coords| self.cells[coords.to_nd_index()].is_mine())
    }

    pub fn state(&self) -> GameState {
        if self.is_lost() {
            GameState::Lost
        } else if self.is_won() {
            GameState::Won
        } else {
            GameState::InProgress
        }
    }

    /// Digs at `coords`, returns `false` when a mine was hit.
    ///
    /// Zero-count cells flood into their neighbors until numbered cells bound the region.
    /// Digging an already revealed cell is allowed and simply re-reports its kind.
    pub fn reveal(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;

        self.revealed.insert(coords);
        let value = self.cells[coords.to_nd_index()];
        log::debug!("Dig at {:?}: {:?}", coords, value);

        match value {
            CellValue::Mine => Ok(false),
            CellValue::Count(0) => {
                self.flood_from(coords);
                Ok(true)
            }
            CellValue::Count(_) => Ok(true),
        }
    }

    pub fn reveal_outcome(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        Ok(if !self.reveal(coords)? {
            RevealOutcome::HitMine
        } else if self.is_won() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Safe
        })
    }

    /// Exposes the whole board, used to show the mines once a game is lost.
    pub fn reveal_all(&mut self) {
        let dim_size = self.dim_size();
        for row in 0..dim_size {
            for col in 0..dim_size {
                self.revealed.insert((row, col));
            }
        }
    }

    fn flood_from(&mut self, origin: Coord2) {
        let mut to_visit = vec![origin];
        let mut opened: usize = 0;

        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.cells.iter_neighbors(visit_coords) {
                // marking before pushing keeps every cell on the stack at most once
                if !self.revealed.insert(pos) {
                    continue;
                }
                opened += 1;

                if self.cells[pos.to_nd_index()].is_zero() {
                    to_visit.push(pos);
                }
            }
        }

        log::trace!("Flood fill from {:?} opened {} cells", origin, opened);
    }
}
