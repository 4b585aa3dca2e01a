use rand::Rng;

use crate::error::ConfigError;
use crate::rarity::Rarity;
use crate::table::ProbabilityTable;

/// Draws since the last top-rarity hit that force one.
pub const DEFAULT_PITY_THRESHOLD: u32 = 100;

/// Uniform index sampler: picks an index in `0..n` with equal probability.
#[derive(Debug, Clone, Copy)]
pub struct UniformSampler {
    n: usize,
}

impl UniformSampler {
    /// `None` when there is nothing to pick from.
    pub fn new(n: usize) -> Option<Self> {
        (n > 0).then_some(Self { n })
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.n)
    }
}

/// Outcome of one rarity roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    pub rarity: Rarity,
    /// The pity counter forced this result.
    pub pity: bool,
}

/// Weighted rarity sampler with a pity guarantee for [`Rarity::TOP`].
#[derive(Debug, Clone)]
pub struct RaritySampler {
    table: ProbabilityTable,
    pity_threshold: u32,
}

impl RaritySampler {
    /// # Errors
    /// [`ConfigError::ZeroPityThreshold`] if `pity_threshold` is zero.
    pub fn new(table: ProbabilityTable, pity_threshold: u32) -> Result<Self, ConfigError> {
        if pity_threshold == 0 {
            return Err(ConfigError::ZeroPityThreshold);
        }
        Ok(Self {
            table,
            pity_threshold,
        })
    }

    /// Advance `pity_counter` and roll a rarity.
    ///
    /// The counter resets to zero whenever the top rarity comes out, whether
    /// forced or rolled.
    pub fn sample<R: Rng + ?Sized>(&self, pity_counter: &mut u32, rng: &mut R) -> Roll {
        *pity_counter = pity_counter.saturating_add(1);
        if *pity_counter >= self.pity_threshold {
            *pity_counter = 0;
            return Roll {
                rarity: Rarity::TOP,
                pity: true,
            };
        }

        let rarity = self.table.sample(rng);
        if rarity == Rarity::TOP {
            *pity_counter = 0;
        }
        Roll {
            rarity,
            pity: false,
        }
    }

    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    pub fn pity_threshold(&self) -> u32 {
        self.pity_threshold
    }
}

impl Default for RaritySampler {
    fn default() -> Self {
        Self {
            table: ProbabilityTable::default(),
            pity_threshold: DEFAULT_PITY_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn never_top() -> ProbabilityTable {
        ProbabilityTable::from_pairs([(Rarity::Mythic, 0.0), (Rarity::Common, 100.0)]).unwrap()
    }

    #[test]
    fn uniform_sampler_rejects_empty() {
        assert!(UniformSampler::new(0).is_none());
        let s = UniformSampler::new(3).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            assert!(s.sample_index(&mut rng) < s.len());
        }
    }

    #[test]
    fn zero_threshold_is_rejected() {
        assert!(matches!(
            RaritySampler::new(ProbabilityTable::default(), 0),
            Err(ConfigError::ZeroPityThreshold)
        ));
    }

    #[test]
    fn pity_forces_top_on_threshold_draw() {
        let sampler = RaritySampler::new(never_top(), 100).unwrap();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut pity = 0;
        for i in 1..100 {
            let roll = sampler.sample(&mut pity, &mut rng);
            assert_eq!(roll.rarity, Rarity::Common);
            assert!(!roll.pity);
            assert_eq!(pity, i);
        }
        let roll = sampler.sample(&mut pity, &mut rng);
        assert_eq!(
            roll,
            Roll {
                rarity: Rarity::Mythic,
                pity: true
            }
        );
        assert_eq!(pity, 0);
    }

    #[test]
    fn rolled_top_resets_counter() {
        let always_top =
            ProbabilityTable::from_pairs([(Rarity::Mythic, 100.0)]).unwrap();
        let sampler = RaritySampler::new(always_top, 100).unwrap();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut pity = 42;
        let roll = sampler.sample(&mut pity, &mut rng);
        assert_eq!(roll.rarity, Rarity::Mythic);
        assert!(!roll.pity);
        assert_eq!(pity, 0);
    }

    #[test]
    fn gap_between_resets_never_exceeds_threshold() {
        let sampler = RaritySampler::default();
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut pity = 0;
        let mut since_reset = 0u32;
        for _ in 0..50_000 {
            sampler.sample(&mut pity, &mut rng);
            since_reset += 1;
            if pity == 0 {
                assert!(since_reset <= DEFAULT_PITY_THRESHOLD);
                since_reset = 0;
            }
        }
    }
}
