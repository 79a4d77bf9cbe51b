//! The random source a [`LootPlan`](crate::LootPlan) owns.

use rand::{Rng, RngCore, SeedableRng};

/// Minimal generator interface needed by a loot plan.
///
/// Implemented for every seedable `rand` generator, so any of them can back
/// a plan. Each step and each draw consumes exactly one `u64`, which is what
/// makes `seed + step` replay exact across independently built plans.
pub trait PlanRng: Sized {
    /// Seeded generator, or one seeded from the thread rng when `seed` is `None`.
    fn from_seed_option(seed: Option<u64>) -> Self;

    /// Discard `steps` draws.
    fn discard(&mut self, steps: u64);

    /// Uniform real in `[0, upper)`.
    fn next_number(&mut self, upper: f64) -> f64;
}

impl<R: RngCore + SeedableRng> PlanRng for R {
    fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => R::seed_from_u64(seed),
            None => R::from_rng(&mut rand::rng()),
        }
    }

    fn discard(&mut self, steps: u64) {
        for _ in 0..steps {
            self.next_u64();
        }
    }

    #[inline]
    fn next_number(&mut self, upper: f64) -> f64 {
        let u: f64 = self.random(); // [0, 1), one u64
        u * upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_pcg::Pcg64;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Pcg64::from_seed_option(Some(7));
        let mut b = Pcg64::from_seed_option(Some(7));
        for _ in 0..16 {
            assert_eq!(a.next_number(10.0), b.next_number(10.0));
        }
    }

    #[test]
    fn discard_skips_exactly_one_draw_per_step() {
        let mut stepped = Pcg64::from_seed_option(Some(1));
        stepped.discard(3);

        let mut manual = Pcg64::from_seed_option(Some(1));
        for _ in 0..3 {
            manual.next_number(1.0);
        }
        assert_eq!(stepped.next_number(5.0), manual.next_number(5.0));
    }

    #[test]
    fn next_number_stays_in_range() {
        let mut rng = Pcg64::from_seed_option(Some(42));
        for _ in 0..10_000 {
            let x = rng.next_number(112.01);
            assert!((0.0..112.01).contains(&x), "x={x}");
        }
    }
}
