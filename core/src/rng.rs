//! Market stress draws.
//!
//! `RiskEngine::evaluate` takes its multiplier from whatever
//! `StressSource` the caller hands it: `FixedStress` pins a value,
//! `MarketRng` draws uniformly from [STRESS_MIN, STRESS_MAX).
//!
//! A run has one master seed. The report and the dataset each draw
//! from their own PCG stream keyed by `StageSlot`, so replaying a seed
//! replays both outputs, and the dataset's draws do not depend on how
//! many draws the report made.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Lower bound of the market stress multiplier.
pub const STRESS_MIN: f64 = 0.8;
/// Upper bound of the market stress multiplier.
pub const STRESS_MAX: f64 = 1.2;

/// Anything that can hand the engine a market stress multiplier.
pub trait StressSource {
    fn next_multiplier(&mut self) -> f64;
}

/// A named, deterministic RNG for a single stage of the demo.
pub struct MarketRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl MarketRng {
    /// Create a stage RNG from the master seed and a stable
    /// stage index. The index must never change once assigned.
    pub fn new(master_seed: u64, stage_index: u64) -> Self {
        let derived_seed = master_seed ^ (stage_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

impl StressSource for MarketRng {
    fn next_multiplier(&mut self) -> f64 {
        self.uniform(STRESS_MIN, STRESS_MAX)
    }
}

/// Always returns the same multiplier. Used to pin scores exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStress(pub f64);

impl StressSource for FixedStress {
    fn next_multiplier(&mut self) -> f64 {
        self.0
    }
}

/// All stage RNGs for a single run.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_stage(&self, slot: StageSlot) -> MarketRng {
        MarketRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stage slot assignments.
/// NEVER reorder or remove entries, only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StageSlot {
    Report = 0,
    Dataset = 1,
}

impl StageSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::Dataset => "dataset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = RngBank::new(12345).for_stage(StageSlot::Report);
        let mut b = RngBank::new(12345).for_stage(StageSlot::Report);
        for _ in 0..100 {
            assert_eq!(a.next_multiplier(), b.next_multiplier());
        }
    }

    #[test]
    fn stages_draw_independent_streams() {
        let bank = RngBank::new(12345);
        let mut report = bank.for_stage(StageSlot::Report);
        let mut dataset = bank.for_stage(StageSlot::Dataset);
        let a: Vec<f64> = (0..10).map(|_| report.next_f64()).collect();
        let b: Vec<f64> = (0..10).map(|_| dataset.next_f64()).collect();
        assert_ne!(a, b, "Stage streams should not coincide");
        assert_eq!(report.name, "report");
        assert_eq!(dataset.name, "dataset");
    }

    #[test]
    fn multiplier_stays_in_stress_range() {
        let mut rng = MarketRng::new(7, 0);
        for _ in 0..10_000 {
            let m = rng.next_multiplier();
            assert!(
                (STRESS_MIN..=STRESS_MAX).contains(&m),
                "Multiplier out of range: {m}"
            );
        }
    }

    #[test]
    fn fixed_stress_never_moves() {
        let mut stress = FixedStress(1.0);
        assert_eq!(stress.next_multiplier(), 1.0);
        assert_eq!(stress.next_multiplier(), 1.0);
    }
}
