#[derive(Debug, Clone)]
pub struct LinearRegressionParams {
    pub learning_rate: f64,
    pub epochs: usize,
    pub regularization: f64,
}

impl Default for LinearRegressionParams {
    fn default() -> Self {
        LinearRegressionParams {
            learning_rate: 0.01,
            epochs: 1000,
            regularization: 0.01,
        }
    }
}

// Builder for LinearRegressionParams
#[derive(Debug, Clone)]
pub struct LinearRegressionParamsBuilder {
    params: LinearRegressionParams,
}

impl LinearRegressionParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: LinearRegressionParams::default(),
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.params.learning_rate = learning_rate;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.params.epochs = epochs;
        self
    }

    pub fn regularization(mut self, regularization: f64) -> Self {
        self.params.regularization = regularization;
        self
    }

    pub fn build(self) -> LinearRegressionParams {
        self.params
    }
}

impl Default for LinearRegressionParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
