// positivador-core/src/domain/targets.rs
//
// Synthetic per-advisor goals. Every draw comes from a generator seeded by
// `<advisor>_<metric tag>`, so a goal only changes when the observed total does.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Activations,
    Fundraising,
    Revenue,
}

impl Metric {
    /// Suffix appended to the advisor id to build the seed.
    pub fn tag(&self) -> &'static str {
        match self {
            Metric::Activations => "ativ",
            Metric::Fundraising => "capt",
            Metric::Revenue => "rece",
        }
    }

    pub fn multiplier_range(&self) -> RangeInclusive<f64> {
        match self {
            Metric::Activations => 0.80..=1.40,
            Metric::Fundraising => 0.85..=1.35,
            Metric::Revenue => 0.90..=1.30,
        }
    }

    /// Goal range for advisors without observed activity. Integral bounds
    /// for activations.
    pub fn fallback_range(&self) -> RangeInclusive<f64> {
        match self {
            Metric::Activations => 2.0..=10.0,
            Metric::Fundraising => 30_000.0..=300_000.0,
            Metric::Revenue => 20_000.0..=200_000.0,
        }
    }
}

/// Generator whose whole output is a function of `(advisor, metric)`.
pub fn seeded_rng(advisor: &str, metric: Metric) -> StdRng {
    let key = format!("{}_{}", advisor, metric.tag());
    let digest = Sha256::digest(key.as_bytes());
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    StdRng::seed_from_u64(u64::from_be_bytes(seed))
}

pub struct TargetSynthesizer;

impl TargetSynthesizer {
    /// Integer goal, at least 1. Zero (or negative) totals draw from `[2, 10]`.
    pub fn activation_target(advisor: &str, total: i64) -> i64 {
        let mut rng = seeded_rng(advisor, Metric::Activations);
        let factor = rng.gen_range(Metric::Activations.multiplier_range());
        if total > 0 {
            ((total as f64 * factor).round() as i64).max(1)
        } else {
            let range = Metric::Activations.fallback_range();
            rng.gen_range(*range.start() as i64..=*range.end() as i64)
        }
    }

    /// Money goal floored to the thousand.
    pub fn amount_target(advisor: &str, metric: Metric, total: f64) -> f64 {
        let mut rng = seeded_rng(advisor, metric);
        let factor = rng.gen_range(metric.multiplier_range());
        let raw = if total > 0.0 {
            total * factor
        } else {
            rng.gen_range(metric.fallback_range())
        };
        (raw / 1000.0).floor() * 1000.0
    }
}
