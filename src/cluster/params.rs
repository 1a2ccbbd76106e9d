#[derive(Debug, Clone)]
pub struct KMeansParams {
    pub k: usize,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub seed: u64,
}

impl Default for KMeansParams {
    fn default() -> Self {
        KMeansParams {
            k: 8,
            max_iterations: 300,
            tolerance: 1e-4,
            seed: 42,
        }
    }
}

// Builder for KMeansParams
#[derive(Debug, Clone)]
pub struct KMeansParamsBuilder {
    params: KMeansParams,
}

impl KMeansParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: KMeansParams::default(),
        }
    }

    pub fn k(mut self, k: usize) -> Self {
        self.params.k = k;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.params.max_iterations = max_iterations;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.params.tolerance = tolerance;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.params.seed = seed;
        self
    }

    pub fn build(self) -> KMeansParams {
        self.params
    }
}

impl Default for KMeansParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
