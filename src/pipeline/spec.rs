use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::ops::pool::PoolMode;

/// Board size and mark placements, in logical `(x, y)` cell coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSpec {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub x_marks: Vec<(usize, usize)>,
    #[serde(default)]
    pub o_marks: Vec<(usize, usize)>,
}

impl Default for BoardSpec {
    /// A 5×5 board with X along the anti-diagonal and a staircase of O.
    fn default() -> Self {
        BoardSpec {
            width: 5,
            height: 5,
            x_marks: vec![(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)],
            o_marks: vec![(0, 0), (0, 1), (1, 0), (2, 1), (3, 2), (4, 3)],
        }
    }
}

/// Bias, activation and pooling applied by one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageSpec {
    #[serde(default)]
    pub bias: f64,
    #[serde(default)]
    pub activation: ActivationFunction,
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    #[serde(default)]
    pub pool_mode: PoolMode,
}

fn default_pool_size() -> usize {
    2
}

fn default_image_size() -> u32 {
    64
}

impl Default for StageSpec {
    fn default() -> Self {
        StageSpec {
            bias: 0.0,
            activation: ActivationFunction::Identity,
            pool_size: default_pool_size(),
            pool_mode: PoolMode::Max,
        }
    }
}

/// Full configuration of a board → conv → pool → conv → pool run.
///
/// Every section is optional in JSON; missing sections fall back to their
/// defaults, so `{}` describes the stock 5×5 demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSpec {
    #[serde(default)]
    pub board: BoardSpec,
    #[serde(default)]
    pub stage1: StageSpec,
    #[serde(default)]
    pub stage2: StageSpec,
    /// Side length photographs are resized to before edge detection.
    #[serde(default = "default_image_size")]
    pub image_size: u32,
}

impl Default for PipelineSpec {
    fn default() -> Self {
        PipelineSpec {
            board: BoardSpec::default(),
            stage1: StageSpec::default(),
            stage2: StageSpec::default(),
            image_size: default_image_size(),
        }
    }
}

impl PipelineSpec {
    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `PipelineSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<PipelineSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
