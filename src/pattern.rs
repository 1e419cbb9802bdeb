use rand::Rng;

/// Largest matrix (3x3).
pub const MAX_CELLS: usize = 9;

/// Set of lit cell indices within one matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LitPattern {
    bits: u16,
}

impl LitPattern {
    pub const EMPTY: LitPattern = LitPattern { bits: 0 };

    /// Pick `value` distinct cells out of `0..cell_count`, uniformly at random.
    ///
    /// `cell_count` is capped at [`MAX_CELLS`] and `value` at `cell_count`,
    /// so the draw always terminates.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, value: usize, cell_count: usize) -> Self {
        let cell_count = cell_count.min(MAX_CELLS);
        let value = value.min(cell_count);
        if value == 0 {
            return Self::EMPTY;
        }
        let mut pattern = Self::EMPTY;
        for i in rand::seq::index::sample(rng, cell_count, value) {
            pattern.bits |= 1 << i;
        }
        pattern
    }

    pub fn contains(&self, index: usize) -> bool {
        index < MAX_CELLS && self.bits & (1 << index) != 0
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..MAX_CELLS).filter(|&i| self.contains(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        for cells in [3, 9] {
            let p = LitPattern::generate(&mut rng, 0, cells);
            assert!(p.is_empty());
            assert_eq!(p.iter().count(), 0);
        }
    }

    #[test]
    fn size_matches_value_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for cells in [3usize, 9] {
            for value in 0..=cells {
                // Repeated draws vary in content but never in size.
                for _ in 0..50 {
                    let p = LitPattern::generate(&mut rng, value, cells);
                    assert_eq!(p.len(), value);
                    assert!(p.iter().all(|i| i < cells));
                }
            }
        }
    }

    #[test]
    fn nine_of_nine_lights_everything() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = LitPattern::generate(&mut rng, 9, 9);
        assert_eq!(p.iter().collect::<Vec<_>>(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn oversize_value_is_clamped() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = LitPattern::generate(&mut rng, 7, 3);
        assert_eq!(p.len(), 3);
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn oversize_cell_count_is_capped() {
        let mut rng = StdRng::seed_from_u64(11);
        let p = LitPattern::generate(&mut rng, 12, 20);
        assert_eq!(p.len(), MAX_CELLS);
    }

    #[test]
    fn draws_cover_every_cell_over_time() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 9];
        for _ in 0..200 {
            for i in LitPattern::generate(&mut rng, 1, 9).iter() {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn contains_out_of_range_is_false() {
        let mut rng = StdRng::seed_from_u64(9);
        let p = LitPattern::generate(&mut rng, 9, 9);
        assert!(!p.contains(9));
        assert!(!p.contains(15));
    }
}
