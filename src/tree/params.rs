/// Per-split cap on the number of candidate features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxFeatures {
    All,
    Sqrt,
    Log2,
    Count(usize),
}

impl MaxFeatures {
    /// Resolves to a concrete count in 1..=n_features.
    pub fn resolve(&self, n_features: usize) -> usize {
        let resolved = match self {
            MaxFeatures::All => n_features,
            MaxFeatures::Sqrt => (n_features as f64).sqrt().floor() as usize,
            MaxFeatures::Log2 => (n_features as f64).log2().floor() as usize,
            MaxFeatures::Count(count) => *count,
        };
        resolved.clamp(1, n_features)
    }
}

/// Node impurity measure. Regression callers use `Variance`; the `Gini`
/// branch exists for classification reuse and treats exact target values
/// as class labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impurity {
    Variance,
    Gini,
}

#[derive(Debug, Clone)]
pub struct DecisionTreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub max_features: MaxFeatures,
    pub impurity: Impurity,
    pub seed: u64,
}

impl Default for DecisionTreeParams {
    fn default() -> Self {
        DecisionTreeParams {
            max_depth: 10,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::All,
            impurity: Impurity::Variance,
            seed: 42,
        }
    }
}

// Builder for DecisionTreeParams
#[derive(Debug, Clone)]
pub struct DecisionTreeParamsBuilder {
    params: DecisionTreeParams,
}

impl DecisionTreeParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: DecisionTreeParams::default(),
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.params.max_depth = max_depth;
        self
    }

    pub fn min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.params.min_samples_split = min_samples_split;
        self
    }

    pub fn min_samples_leaf(mut self, min_samples_leaf: usize) -> Self {
        self.params.min_samples_leaf = min_samples_leaf;
        self
    }

    pub fn max_features(mut self, max_features: MaxFeatures) -> Self {
        self.params.max_features = max_features;
        self
    }

    pub fn impurity(mut self, impurity: Impurity) -> Self {
        self.params.impurity = impurity;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.params.seed = seed;
        self
    }

    pub fn build(self) -> DecisionTreeParams {
        self.params
    }
}

impl Default for DecisionTreeParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_features_resolution() {
        assert_eq!(MaxFeatures::All.resolve(9), 9);
        assert_eq!(MaxFeatures::Sqrt.resolve(9), 3);
        assert_eq!(MaxFeatures::Log2.resolve(9), 3);
        assert_eq!(MaxFeatures::Count(4).resolve(9), 4);
        // Fixed counts are capped at the feature count, and resolution
        // never yields zero.
        assert_eq!(MaxFeatures::Count(100).resolve(9), 9);
        assert_eq!(MaxFeatures::Sqrt.resolve(1), 1);
        assert_eq!(MaxFeatures::Log2.resolve(1), 1);
    }
}
