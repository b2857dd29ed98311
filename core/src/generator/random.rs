use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement driven by an explicit seed, so a layout can be replayed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    placement: Placement,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, placement: Placement) -> Self {
        Self { seed, placement }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());

        match self.placement {
            Placement::Rejection => rejection_sample(&mut rng, &mut mine_mask, config),
            Placement::Shuffle => shuffle_prefix(&mut rng, &mut mine_mask, config),
        }

        let layout = MineLayout::from_square_mask(mine_mask);
        if layout.mine_count() != config.mines() {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines()
            );
        }
        layout
    }
}

fn rejection_sample(rng: &mut SmallRng, mine_mask: &mut Array2<bool>, config: GameConfig) {
    let total_cells = config.total_cells();
    let mut mines_placed = 0;
    let mut draws: u64 = 0;

    // terminates because a validated config always leaves a safe cell
    while mines_placed < config.mines() {
        draws += 1;
        let coords = from_linear(rng.random_range(0..total_cells), config.dim_size());
        let cell = &mut mine_mask[coords.to_nd_index()];
        if *cell {
            continue;
        }
        *cell = true;
        mines_placed += 1;
    }

    log::trace!(
        "Rejection sampling placed {} mines in {} draws",
        mines_placed,
        draws
    );
}

fn shuffle_prefix(rng: &mut SmallRng, mine_mask: &mut Array2<bool>, config: GameConfig) {
    let mut indices: Vec<CellCount> = (0..config.total_cells()).collect();
    indices.shuffle(rng);

    for &index in indices.iter().take(config.mines() as usize) {
        mine_mask[from_linear(index, config.dim_size()).to_nd_index()] = true;
    }
}
