use rand::{SeedableRng, rngs::SmallRng};

use super::*;

/// Generation strategy that keeps the configured safe zone clear, but other than that is purely random.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R = SmallRng> {
    rng: R,
    safe_zone: SafeZone,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMineGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            safe_zone: SafeZone::default(),
        }
    }

    pub fn with_safe_zone(mut self, safe_zone: SafeZone) -> Self {
        self.safe_zone = safe_zone;
        self
    }

    pub fn safe_zone(&self) -> SafeZone {
        self.safe_zone
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn plant(&mut self, board: &mut Board, mine_count: CellCount, first_click: Coord2) -> Result<()> {
        plant_mines_with(board, mine_count, first_click, self.safe_zone, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_agree() {
        let mut first = Board::new(8, 8).unwrap();
        let mut second = Board::new(8, 8).unwrap();

        RandomMineGenerator::new(99).plant(&mut first, 10, (0, 0)).unwrap();
        RandomMineGenerator::new(99).plant(&mut second, 10, (0, 0)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn generator_keeps_its_stream_across_games() {
        let mut generator = RandomMineGenerator::new(5);
        let mut first = Board::new(10, 10).unwrap();
        let mut second = Board::new(10, 10).unwrap();

        generator.plant(&mut first, 18, (5, 5)).unwrap();
        generator.plant(&mut second, 18, (5, 5)).unwrap();

        assert_eq!(first.mine_count(), 18);
        assert_eq!(second.mine_count(), 18);
        assert_ne!(first, second);
    }

    #[test]
    fn safe_zone_is_configurable() {
        let generator = RandomMineGenerator::new(0).with_safe_zone(SafeZone::CellOnly);
        assert_eq!(generator.safe_zone(), SafeZone::CellOnly);
    }
}
