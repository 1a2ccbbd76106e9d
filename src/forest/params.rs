use crate::tree::params::{
    DecisionTreeParams, DecisionTreeParamsBuilder, Impurity, MaxFeatures,
};

#[derive(Debug, Clone)]
pub struct RandomForestParams {
    pub n_estimators: usize,
    pub bootstrap: bool,
    pub tree_params: DecisionTreeParams,
    pub seed: u64,
}

// Builder for RandomForestParams
#[derive(Debug, Clone)]
pub struct RandomForestParamsBuilder {
    n_estimators: usize,
    bootstrap: bool,
    tree_params_builder: DecisionTreeParamsBuilder,
    seed: u64,
}

impl RandomForestParamsBuilder {
    pub fn new() -> Self {
        Self {
            n_estimators: 100,
            bootstrap: true,
            tree_params_builder: DecisionTreeParamsBuilder::new().max_features(MaxFeatures::Sqrt),
            seed: 42,
        }
    }

    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }

    /// Disabling bootstrap trains every tree on the full dataset; the
    /// ensemble still averages but loses most of its variance reduction.
    pub fn bootstrap(mut self, bootstrap: bool) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    // Convenience methods for nested tree parameters
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.tree_params_builder = self.tree_params_builder.max_depth(max_depth);
        self
    }

    pub fn min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.tree_params_builder = self.tree_params_builder.min_samples_split(min_samples_split);
        self
    }

    pub fn min_samples_leaf(mut self, min_samples_leaf: usize) -> Self {
        self.tree_params_builder = self.tree_params_builder.min_samples_leaf(min_samples_leaf);
        self
    }

    pub fn max_features(mut self, max_features: MaxFeatures) -> Self {
        self.tree_params_builder = self.tree_params_builder.max_features(max_features);
        self
    }

    pub fn impurity(mut self, impurity: Impurity) -> Self {
        self.tree_params_builder = self.tree_params_builder.impurity(impurity);
        self
    }

    pub fn build(self) -> RandomForestParams {
        RandomForestParams {
            n_estimators: self.n_estimators,
            bootstrap: self.bootstrap,
            tree_params: self.tree_params_builder.build(),
            seed: self.seed,
        }
    }
}

impl Default for RandomForestParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RandomForestParams {
    fn default() -> Self {
        RandomForestParamsBuilder::new().build()
    }
}
