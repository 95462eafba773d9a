//! # Dataset Configuration
//!
//! An experiment names its training data with a small serde record:
//!
//! ```json
//! { "kind": "Circle", "n": 100, "seed": 42 }
//! ```
//!
//! `seed` may be omitted, in which case every call to
//! [`DatasetConfig::generate`] draws a fresh dataset.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::generators::DatasetKind;
use crate::graph::Graph;

/// Which dataset to build, how large, and from which seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub kind: DatasetKind,
    pub n: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl DatasetConfig {
    pub fn new(kind: DatasetKind, n: usize) -> Self {
        Self {
            kind,
            n,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let config: DatasetConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, DatasetError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject sizes that would produce an empty dataset.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.n == 0 {
            return Err(DatasetError::EmptyDataset);
        }
        if self.kind == DatasetKind::Spiral && self.n < 2 {
            return Err(DatasetError::Config {
                reason: format!("Spiral needs at least 2 points, got {}", self.n),
            });
        }
        Ok(())
    }

    /// Build the configured dataset.
    pub fn generate(&self) -> Result<Graph, DatasetError> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        log::debug!(
            "building {} dataset with n = {} (seed = {:?})",
            self.kind,
            self.n,
            self.seed
        );
        Ok(self.kind.generate(self.n, &mut rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_with_seed() {
        let config = DatasetConfig::from_json(r#"{"kind": "Xor", "n": 40, "seed": 3}"#).unwrap();
        assert_eq!(config, DatasetConfig::new(DatasetKind::Xor, 40).with_seed(3));
    }

    #[test]
    fn test_from_json_seed_optional() {
        let config = DatasetConfig::from_json(r#"{"kind": "Simple", "n": 10}"#).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_to_json_omits_missing_seed() {
        let json = DatasetConfig::new(DatasetKind::Diag, 5).to_json().unwrap();
        assert_eq!(json, r#"{"kind":"Diag","n":5}"#);
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let err = DatasetConfig::from_json(r#"{"kind": "Moons", "n": 10}"#).unwrap_err();
        assert!(matches!(err, DatasetError::Config { .. }));
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            DatasetConfig::new(DatasetKind::Simple, 0).validate(),
            Err(DatasetError::EmptyDataset)
        );
        assert!(DatasetConfig::new(DatasetKind::Spiral, 1).validate().is_err());
        assert!(DatasetConfig::new(DatasetKind::Spiral, 2).validate().is_ok());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = DatasetConfig::new(DatasetKind::Circle, 64).with_seed(11);
        assert_eq!(config.generate().unwrap(), config.generate().unwrap());
    }

    #[test]
    fn test_generate_size() {
        let g = DatasetConfig::new(DatasetKind::Split, 25).generate().unwrap();
        assert_eq!(g.n(), 25);
    }
}
