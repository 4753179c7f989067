use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Seeded generation strategy, every placement is uniform over the whole grid.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        MineLayout::generate(config, &mut rng)
    }
}

impl MineLayout {
    /// Places `config.mines` mines by rejection sampling.
    ///
    /// Each draw picks a uniformly random `(row, col)`; draws that land on an
    /// existing mine are discarded. A validated [`GameConfig`] always leaves at
    /// least one free cell, so the loop terminates.
    pub fn generate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let side = config.size;
        let mut mine_mask: Array2<bool> = Array2::default((side, side).to_nd_index());
        let mut mines_placed: CellCount = 0;
        let mut rejected: usize = 0;

        while mines_placed < config.mines {
            let coords: Coord2 = (rng.random_range(0..side), rng.random_range(0..side));
            let slot = &mut mine_mask[coords.to_nd_index()];
            if *slot {
                rejected += 1;
                continue;
            }
            *slot = true;
            mines_placed += 1;
        }

        log::debug!(
            "Placed {} mines on a {}x{} board ({} duplicate draws)",
            mines_placed,
            side,
            side,
            rejected
        );
        Self::from_mine_mask_unchecked(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        for seed in 0..32 {
            let layout = RandomMinefieldGenerator::new(seed).generate(BoardSize::Large.config());

            assert_eq!(layout.size(), 16);
            assert_eq!(layout.mine_count(), 40);
            assert_eq!(layout.iter_mines().count(), 40);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = BoardSize::Small.config();

        let a = RandomMinefieldGenerator::new(7).generate(config);
        let b = RandomMinefieldGenerator::new(7).generate(config);

        assert_eq!(a, b);
    }

    #[test]
    fn fills_all_but_one_cell() {
        let config = GameConfig::new(3, 8).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);

        let layout = MineLayout::generate(config, &mut rng);

        assert_eq!(layout.mine_count(), 8);
        assert_eq!(layout.safe_cell_count(), 1);
    }
}
