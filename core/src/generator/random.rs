use super::*;

/// Places mines by drawing uniformly random cells and skipping the ones that already hold a mine.
///
/// The same seed always yields the same layout for a given config.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeded from the process-wide generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        let total_cells = config.total_cells();

        // sampling could never finish on a full board
        let target = if config.mines >= total_cells {
            let fits = total_cells.saturating_sub(1);
            log::warn!(
                "Minefield would be full, requested {} mines but only placing {}",
                config.mines,
                fits
            );
            fits
        } else {
            config.mines
        };

        let mut rng = rand::rngs::StdRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;
        while placed < target {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            let cell = &mut mines[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                placed += 1;
                log::trace!("Mine {}: {:?}", placed, coords);
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} with seed {}",
            placed,
            rows,
            cols,
            self.seed
        );
        MineLayout {
            mine_mask: mines,
            mine_count: placed,
        }
    }
}
