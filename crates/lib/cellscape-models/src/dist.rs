use rand_distr::{Distribution, Uniform};
use rand_pcg::Pcg64Mcg;
use serde::Deserialize;

/// A sequential source of uniform integer draws. Callers depend on the order
/// of the draws, so implementations must not reorder or batch them.
pub trait UniformSource {
    /// Uniform draw from `min..=max`.
    fn uniform_int(&mut self, min: i64, max: i64) -> i64;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SamplerSettings {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct RngSampler {
    pub rng: Pcg64Mcg,
}

impl RngSampler {
    pub fn new(settings: &SamplerSettings) -> Self {
        Self::from_seed(settings.seed.unwrap_or(0))
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::new(seed as u128),
        }
    }
}

impl UniformSource for RngSampler {
    fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        Uniform::new_inclusive(min, max).sample(&mut self.rng)
    }
}
