//! Injected randomness
//!
//! Every random draw in the simulation goes through a [`RandomSource`] owned
//! by the game field, so a seed fully determines a run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A capability to draw uniform integers
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn range(&mut self, low: i32, high: i32) -> i32;
}

/// Seeded PCG generator
#[derive(Debug, Clone)]
pub struct PcgRandom {
    rng: Pcg32,
}

impl PcgRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for PcgRandom {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        debug_assert!(low <= high, "empty range {low}..={high}");
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed list of values, clamped into the requested range.
/// Once the script runs out every draw returns `low`.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedRandom {
    values: Vec<i32>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Append more values to the script
    pub(crate) fn push(&mut self, values: &[i32]) {
        self.values.extend_from_slice(values);
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        let value = self.values.get(self.next).copied().unwrap_or(low);
        self.next += 1;
        value.clamp(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcg_same_seed_same_sequence() {
        let mut a = PcgRandom::new(42);
        let mut b = PcgRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.range(0, 100), b.range(0, 100));
        }
    }

    #[test]
    fn test_pcg_stays_in_range() {
        let mut rng = PcgRandom::new(7);
        for _ in 0..1000 {
            let v = rng.range(-7, 6);
            assert!((-7..=6).contains(&v));
        }
    }

    #[test]
    fn test_scripted_replays_then_falls_back() {
        let mut rng = ScriptedRandom::new(vec![5, 200, -3]);
        assert_eq!(rng.range(0, 100), 5);
        assert_eq!(rng.range(0, 100), 100);
        assert_eq!(rng.range(0, 100), 0);
        assert_eq!(rng.range(1, 3), 1);
    }

    #[test]
    fn test_scripted_push_extends_script() {
        let mut rng = ScriptedRandom::new(vec![4]);
        rng.push(&[9, 2]);
        assert_eq!(rng.range(0, 10), 4);
        assert_eq!(rng.range(0, 10), 9);
        assert_eq!(rng.range(0, 10), 2);
    }
}
