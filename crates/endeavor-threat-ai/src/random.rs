//! Injected randomness for orbit radius and orbit length.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the randomized choices the encircling planner makes.
pub trait RandomSource {
    /// Orbit radius in `[min, max]`.
    fn safe_distance(&mut self, min: f64, max: f64) -> f64;

    /// Number of full rotations in `[min, max]`, a multiple of `step` above `min`.
    fn encircle_count(&mut self, min: f64, max: f64, step: f64) -> f64;
}

/// Deterministic RNG-backed source. Same seed = same orbits.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn safe_distance(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn encircle_count(&mut self, min: f64, max: f64, step: f64) -> f64 {
        if min >= max || step <= 0.0 {
            return min;
        }
        let steps = ((max - min) / step).floor() as u32;
        min + self.rng.gen_range(0..=steps) as f64 * step
    }
}

/// Replays fixed values in order, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    safe_distances: Vec<f64>,
    encircle_counts: Vec<f64>,
    next_distance: usize,
    next_count: usize,
}

impl ScriptedRandom {
    pub fn new(safe_distances: Vec<f64>, encircle_counts: Vec<f64>) -> Self {
        Self {
            safe_distances,
            encircle_counts,
            next_distance: 0,
            next_count: 0,
        }
    }

    /// Always the same radius and rotation count.
    pub fn constant(safe_distance: f64, encircle_count: f64) -> Self {
        Self::new(vec![safe_distance], vec![encircle_count])
    }
}

impl RandomSource for ScriptedRandom {
    fn safe_distance(&mut self, min: f64, max: f64) -> f64 {
        if self.safe_distances.is_empty() {
            return min;
        }
        let value = self.safe_distances[self.next_distance % self.safe_distances.len()];
        self.next_distance += 1;
        value.clamp(min, max)
    }

    fn encircle_count(&mut self, min: f64, max: f64, _step: f64) -> f64 {
        if self.encircle_counts.is_empty() {
            return min;
        }
        let value = self.encircle_counts[self.next_count % self.encircle_counts.len()];
        self.next_count += 1;
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_seeded_values_in_range() {
        let mut random = SeededRandom::new(7);
        for _ in 0..200 {
            let d = random.safe_distance(100.0, 300.0);
            assert!((100.0..=300.0).contains(&d));

            let c = random.encircle_count(0.25, 2.0, 0.25);
            assert!((0.25..=2.0).contains(&c));
            let steps = (c - 0.25) / 0.25;
            assert_abs_diff_eq!(steps, steps.round(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = SeededRandom::new(99);
        let mut b = SeededRandom::new(99);
        for _ in 0..20 {
            assert_eq!(a.safe_distance(100.0, 300.0), b.safe_distance(100.0, 300.0));
            assert_eq!(
                a.encircle_count(0.25, 2.0, 0.25),
                b.encircle_count(0.25, 2.0, 0.25)
            );
        }
    }

    #[test]
    fn test_scripted_cycles_and_clamps() {
        let mut random = ScriptedRandom::new(vec![150.0, 1000.0], vec![0.5]);
        assert_eq!(random.safe_distance(100.0, 300.0), 150.0);
        assert_eq!(random.safe_distance(100.0, 300.0), 300.0);
        assert_eq!(random.safe_distance(100.0, 300.0), 150.0);
        assert_eq!(random.encircle_count(0.25, 2.0, 0.25), 0.5);
        assert_eq!(random.encircle_count(0.25, 2.0, 0.25), 0.5);
    }
}
