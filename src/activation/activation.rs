use serde::{Serialize, Deserialize};
use std::f64::consts::E;

use crate::math::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Identity,
    ReLU,
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Identity => x,
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }

    /// Element-wise application over a whole feature map.
    pub fn apply(&self, input: &Matrix) -> Matrix {
        input.map(|x| self.function(x))
    }
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::Identity
    }
}
