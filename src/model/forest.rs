//! Random forest regressor: bagged regression trees

use crate::error::{DemandError, Result};
use crate::model::tree::{DecisionTreeRegressor, TreeParams};
use crate::model::Regressor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Random forest configuration, mirroring the training pipeline defaults
#[derive(Debug, Clone)]
pub struct RandomForestRegressor {
    /// Name of the model
    name: String,
    /// Number of trees in the ensemble
    n_trees: usize,
    /// Maximum depth of each tree
    max_depth: usize,
    /// Minimum samples required to split a node
    min_samples_split: usize,
    /// Candidate features per split; `None` considers all features
    max_features: Option<usize>,
    /// Seed for reproducible bootstrap sampling
    seed: u64,
}

impl RandomForestRegressor {
    /// Create a forest configuration
    pub fn new(n_trees: usize, max_depth: usize, min_samples_split: usize) -> Result<Self> {
        if n_trees == 0 {
            return Err(DemandError::InvalidParameter(
                "Forest must have at least one tree".to_string(),
            ));
        }
        if max_depth == 0 {
            return Err(DemandError::InvalidParameter(
                "Tree depth must be positive".to_string(),
            ));
        }
        if min_samples_split < 2 {
            return Err(DemandError::InvalidParameter(
                "min_samples_split must be at least 2".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Random Forest (trees={}, depth={})", n_trees, max_depth),
            n_trees,
            max_depth,
            min_samples_split,
            max_features: None,
            seed: 42,
        })
    }

    /// Override the number of candidate features per split
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Override the bootstrap seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fit the forest on standardized feature rows and targets
    pub fn fit(&self, x: &[Vec<f64>], y: &[f64]) -> Result<TrainedRandomForest> {
        if x.is_empty() || y.is_empty() {
            return Err(DemandError::Model(
                "Cannot fit forest on empty training data".to_string(),
            ));
        }
        if x.len() != y.len() {
            return Err(DemandError::Model(format!(
                "Feature rows ({}) don't match targets ({})",
                x.len(),
                y.len()
            )));
        }

        let n_features = x[0].len();
        if x.iter().any(|row| row.len() != n_features) {
            return Err(DemandError::Model(
                "All feature rows must have the same width".to_string(),
            ));
        }

        let params = TreeParams {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            max_features: self.max_features,
        };

        let mut trees = Vec::with_capacity(self.n_trees);
        for t in 0..self.n_trees {
            // One deterministic stream per tree keeps refits reproducible
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(t as u64));
            let indices: Vec<usize> = (0..x.len()).map(|_| rng.gen_range(0..x.len())).collect();
            trees.push(DecisionTreeRegressor::fit(x, y, &indices, params, &mut rng)?);
        }

        Ok(TrainedRandomForest {
            name: self.name.clone(),
            n_features,
            trees,
        })
    }

    /// Get the name of the model
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for RandomForestRegressor {
    /// Training pipeline defaults: 250 trees, depth 10, split threshold 5
    fn default() -> Self {
        Self {
            name: "Random Forest (trees=250, depth=10)".to_string(),
            n_trees: 250,
            max_depth: 10,
            min_samples_split: 5,
            max_features: None,
            seed: 42,
        }
    }
}

/// A fitted random forest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedRandomForest {
    /// Name of the model
    name: String,
    /// Feature width the forest was fit on
    n_features: usize,
    /// Fitted trees
    trees: Vec<DecisionTreeRegressor>,
}

impl TrainedRandomForest {
    /// Feature width the forest was fit on
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of trees in the ensemble
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for TrainedRandomForest {
    fn predict_row(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.n_features {
            return Err(DemandError::ShapeMismatch {
                expected: self.n_features,
                got: features.len(),
            });
        }

        let sum: f64 = self
            .trees
            .iter()
            .map(|tree| tree.predict_row(features))
            .sum();

        Ok(sum / self.trees.len() as f64)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
