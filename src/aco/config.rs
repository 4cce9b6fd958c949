//! Colony search configuration.

use serde::{Deserialize, Serialize};

use crate::error::{AcoError, Result};

/// Parameters of one colony search.
///
/// Can be deserialized from JSON; missing fields take their default value.
///
/// # Examples
///
/// ```
/// use u_ants::aco::AcoConfig;
///
/// let config = AcoConfig::default().with_ants(64).with_seed(7);
/// assert_eq!(config.ants, 64);
/// assert!(config.validate().is_ok());
///
/// let parsed: AcoConfig = serde_json::from_str(r#"{ "beta": 3.0 }"#).unwrap();
/// assert_eq!(parsed.beta, 3.0);
/// assert_eq!(parsed.ants, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Evaporation parameter in `[0, 1)`: each cell `v` decays to `v^(1 - alpha)`.
    pub alpha: f64,
    /// Heuristic exponent applied to inverse distance, `>= 0`.
    pub beta: f64,
    /// Number of ants, each building one complete route.
    pub ants: usize,
    /// Index of the city every route starts from.
    pub first_pos: usize,
    /// RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// How many ants build their routes in parallel against one matrix
    /// snapshot. `1` runs the colony strictly sequentially.
    pub batch_size: usize,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            beta: 2.0,
            ants: 32,
            first_pos: 0,
            seed: None,
            batch_size: 1,
        }
    }
}

impl AcoConfig {
    /// Sets the evaporation parameter.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic exponent.
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the number of ants.
    #[must_use]
    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = ants;
        self
    }

    /// Sets the start city index.
    #[must_use]
    pub fn with_first_pos(mut self, first_pos: usize) -> Self {
        self.first_pos = first_pos;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the parallel wave size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Checks the parameters that do not depend on the city list.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.alpha) {
            return Err(AcoError::InvalidAlpha(self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::InvalidBeta(self.beta));
        }
        if self.ants == 0 {
            return Err(AcoError::InvalidAntCount);
        }
        if self.batch_size == 0 {
            return Err(AcoError::InvalidBatchSize);
        }
        Ok(())
    }

    /// Checks all parameters against a search over `num_cities` cities.
    pub fn validate_for(&self, num_cities: usize) -> Result<()> {
        if num_cities == 0 {
            return Err(AcoError::EmptyCities);
        }
        self.validate()?;
        if self.first_pos >= num_cities {
            return Err(AcoError::StartOutOfRange {
                first_pos: self.first_pos,
                len: num_cities,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let c = AcoConfig::default();
        assert!((c.alpha - 0.2).abs() < 1e-12);
        assert!((c.beta - 2.0).abs() < 1e-12);
        assert_eq!(c.ants, 32);
        assert_eq!(c.first_pos, 0);
        assert_eq!(c.seed, None);
        assert_eq!(c.batch_size, 1);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = AcoConfig::default()
            .with_alpha(0.5)
            .with_beta(1.0)
            .with_ants(3)
            .with_first_pos(2)
            .with_seed(42)
            .with_batch_size(4);
        assert_eq!(c.alpha, 0.5);
        assert_eq!(c.beta, 1.0);
        assert_eq!(c.ants, 3);
        assert_eq!(c.first_pos, 2);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.batch_size, 4);
    }

    #[test]
    fn test_invalid_alpha() {
        for alpha in [-0.1, 1.0, 1.5, f64::NAN] {
            let c = AcoConfig::default().with_alpha(alpha);
            assert!(matches!(c.validate(), Err(AcoError::InvalidAlpha(_))), "alpha {alpha}");
        }
        assert!(AcoConfig::default().with_alpha(0.0).validate().is_ok());
    }

    #[test]
    fn test_invalid_beta() {
        for beta in [-1.0, f64::INFINITY, f64::NAN] {
            let c = AcoConfig::default().with_beta(beta);
            assert!(matches!(c.validate(), Err(AcoError::InvalidBeta(_))));
        }
    }

    #[test]
    fn test_invalid_counts() {
        assert!(matches!(
            AcoConfig::default().with_ants(0).validate(),
            Err(AcoError::InvalidAntCount)
        ));
        assert!(matches!(
            AcoConfig::default().with_batch_size(0).validate(),
            Err(AcoError::InvalidBatchSize)
        ));
    }

    #[test]
    fn test_validate_for_start() {
        let c = AcoConfig::default().with_first_pos(3);
        assert!(c.validate_for(4).is_ok());
        assert!(matches!(
            c.validate_for(3),
            Err(AcoError::StartOutOfRange { first_pos: 3, len: 3 })
        ));
        assert!(matches!(c.validate_for(0), Err(AcoError::EmptyCities)));
    }

    #[test]
    fn test_json_roundtrip_with_seed() {
        let c = AcoConfig::default().with_seed(9);
        let json = serde_json::to_string(&c).expect("serialize");
        let back: AcoConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, c);
    }
}
