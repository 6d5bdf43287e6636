//! Weighted-random draw. The only source of randomness in the system.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fortuna_core::errors::DrawError;
use fortuna_core::models::{Catalog, Draw, SelectionMode};

/// Check that `weights` can be sampled: non-empty, all finite and
/// non-negative, with a positive finite sum. Returns the sum.
pub fn validate_weights(weights: &[f64]) -> Result<f64, DrawError> {
    if weights.is_empty() {
        return Err(DrawError::EmptyCatalog);
    }
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() {
            return Err(DrawError::NonFiniteWeight { index, weight });
        }
        if weight < 0.0 {
            return Err(DrawError::NegativeWeight { index, weight });
        }
    }
    let total: f64 = weights.iter().sum();
    if !total.is_finite() {
        return Err(DrawError::TotalOverflow { total });
    }
    if total <= 0.0 {
        return Err(DrawError::ZeroTotal);
    }
    Ok(total)
}

/// Pick an index with probability `weights[i] / sum(weights)`.
/// Zero-weight indices are never returned.
pub fn draw_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Result<usize, DrawError> {
    let total = validate_weights(weights)?;
    let distribution = WeightedIndex::new(weights).map_err(|e| match e {
        WeightedError::AllWeightsZero => DrawError::ZeroTotal,
        _ => DrawError::TotalOverflow { total },
    })?;
    Ok(distribution.sample(rng))
}

/// Owns the random generator used for draws.
pub struct Drawer {
    rng: StdRng,
}

impl Drawer {
    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator: the same seed yields the same draw sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one catalog item. `weights` must be index-aligned with `catalog`.
    pub fn draw(
        &mut self,
        catalog: &Catalog,
        mode: SelectionMode,
        weights: Vec<f64>,
    ) -> Result<Draw, DrawError> {
        if weights.len() != catalog.len() {
            return Err(DrawError::LengthMismatch {
                weights: weights.len(),
                catalog: catalog.len(),
            });
        }
        let index = draw_index(&weights, &mut self.rng)?;
        let item = catalog
            .get(index)
            .map(|entry| entry.name.clone())
            .ok_or(DrawError::LengthMismatch {
                weights: weights.len(),
                catalog: catalog.len(),
            })?;
        Ok(Draw {
            index,
            item,
            mode,
            weights,
        })
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::from_entropy()
    }
}
