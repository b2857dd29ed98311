use crate::*;
use serde::{Deserialize, Serialize};

pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// How mines are spread over the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Draw linear indices until enough distinct cells are hit.
    #[default]
    Rejection,
    /// Shuffle every linear index and take a prefix, bounded cost at any density.
    Shuffle,
}
