//! Regression tree with variance-reduction splits

use crate::error::{DemandError, Result};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use serde::{Deserialize, Serialize};

/// A node in the flattened tree representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Terminal node holding the mean target of its samples
    Leaf { value: f64 },
    /// Internal node; rows with feature < threshold go left
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Growth limits for a single tree
#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    /// Maximum tree depth
    pub max_depth: usize,
    /// Minimum samples required to attempt a split
    pub min_samples_split: usize,
    /// Number of candidate features per split; `None` means all
    pub max_features: Option<usize>,
}

/// A fitted regression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeRegressor {
    nodes: Vec<Node>,
}

impl DecisionTreeRegressor {
    /// Grow a tree on the given sample indices into `x`/`y`
    pub fn fit(
        x: &[Vec<f64>],
        y: &[f64],
        indices: &[usize],
        params: TreeParams,
        rng: &mut StdRng,
    ) -> Result<Self> {
        if indices.is_empty() {
            return Err(DemandError::Model(
                "Cannot grow a tree on zero samples".to_string(),
            ));
        }

        let n_features = x.first().map(|row| row.len()).unwrap_or(0);
        if n_features == 0 {
            return Err(DemandError::Model(
                "Cannot grow a tree with zero features".to_string(),
            ));
        }

        let mut builder = TreeBuilder {
            x,
            y,
            n_features,
            params,
            nodes: Vec::new(),
        };
        builder.grow(indices.to_vec(), 0, rng);

        Ok(Self {
            nodes: builder.nodes,
        })
    }

    /// Walk the tree for one feature row
    pub fn predict_row(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] < *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Number of nodes in the tree
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }
}

struct TreeBuilder<'a> {
    x: &'a [Vec<f64>],
    y: &'a [f64],
    n_features: usize,
    params: TreeParams,
    nodes: Vec<Node>,
}

/// Best split found for a node, if any
struct SplitCandidate {
    feature: usize,
    threshold: f64,
    score: f64,
}

impl<'a> TreeBuilder<'a> {
    /// Grow a subtree over `indices`, returning its node index
    fn grow(&mut self, indices: Vec<usize>, depth: usize, rng: &mut StdRng) -> usize {
        let mean = indices.iter().map(|&i| self.y[i]).sum::<f64>() / indices.len() as f64;

        let stop = depth >= self.params.max_depth
            || indices.len() < self.params.min_samples_split
            || indices.iter().all(|&i| self.y[i] == self.y[indices[0]]);

        if stop {
            return self.push(Node::Leaf { value: mean });
        }

        let best = match self.best_split(&indices, rng) {
            Some(best) => best,
            None => return self.push(Node::Leaf { value: mean }),
        };

        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| self.x[i][best.feature] < best.threshold);

        // Reserve the split node so children land after it
        let node = self.push(Node::Leaf { value: mean });
        let left = self.grow(left_idx, depth + 1, rng);
        let right = self.grow(right_idx, depth + 1, rng);
        self.nodes[node] = Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left,
            right,
        };

        node
    }

    /// Search candidate features for the split with the lowest summed
    /// squared error across both sides
    fn best_split(&self, indices: &[usize], rng: &mut StdRng) -> Option<SplitCandidate> {
        let n_candidates = self
            .params
            .max_features
            .unwrap_or(self.n_features)
            .clamp(1, self.n_features);

        let features: Vec<usize> = if n_candidates == self.n_features {
            (0..self.n_features).collect()
        } else {
            sample(rng, self.n_features, n_candidates).into_vec()
        };

        let mut best: Option<SplitCandidate> = None;

        for feature in features {
            let mut ordered: Vec<(f64, f64)> = indices
                .iter()
                .map(|&i| (self.x[i][feature], self.y[i]))
                .collect();
            ordered.sort_by(|a, b| a.0.total_cmp(&b.0));

            // Prefix sums over the ordered targets
            let mut sum = 0.0;
            let mut sum_sq = 0.0;
            let prefix: Vec<(f64, f64)> = ordered
                .iter()
                .map(|&(_, y)| {
                    sum += y;
                    sum_sq += y * y;
                    (sum, sum_sq)
                })
                .collect();

            let n = ordered.len();
            let (total, total_sq) = prefix[n - 1];

            for i in 1..n {
                if ordered[i].0 == ordered[i - 1].0 {
                    continue;
                }

                let (left_sum, left_sq) = prefix[i - 1];
                let left_n = i as f64;
                let right_n = (n - i) as f64;
                let right_sum = total - left_sum;
                let right_sq = total_sq - left_sq;

                let score = (left_sq - left_sum * left_sum / left_n)
                    + (right_sq - right_sum * right_sum / right_n);

                if best.as_ref().map_or(true, |b| score < b.score) {
                    best = Some(SplitCandidate {
                        feature,
                        threshold: (ordered[i].0 + ordered[i - 1].0) / 2.0,
                        score,
                    });
                }
            }
        }

        best
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}
