use serde::{Serialize, Deserialize};

use crate::board::board::TicTacToe;
use crate::error::{ConvError, Result};
use crate::kernels;
use crate::layers::conv::ConvLayer;
use crate::layers::pool::PoolLayer;
use crate::math::matrix::Matrix;
use crate::ops::correlate::correlate2d;
use crate::pipeline::spec::{PipelineSpec, StageSpec};

/// A named output grid of one pipeline stage (e.g. `"x kernel+max-pooling"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMap {
    pub name: String,
    pub map: Matrix,
}

impl FeatureMap {
    pub fn new(name: impl Into<String>, map: Matrix) -> FeatureMap {
        FeatureMap { name: name.into(), map }
    }
}

/// Everything a pipeline run produced, stage by stage.
///
/// `layer2_x` / `layer2_o` hold four maps each, one per line kernel, in
/// `kernels::line_kernels()` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub board: Matrix,
    pub layer1: Vec<FeatureMap>,
    pub layer1_pooled: Vec<FeatureMap>,
    pub layer2_x: Vec<FeatureMap>,
    pub layer2_o: Vec<FeatureMap>,
    pub layer2_x_activated: Vec<FeatureMap>,
    pub layer2_o_activated: Vec<FeatureMap>,
}

impl PipelineReport {
    /// All feature maps in the order they were produced.
    pub fn stages(&self) -> impl Iterator<Item = &FeatureMap> {
        self.layer1
            .iter()
            .chain(&self.layer1_pooled)
            .chain(&self.layer2_x)
            .chain(&self.layer2_o)
            .chain(&self.layer2_x_activated)
            .chain(&self.layer2_o_activated)
    }
}

/// Builds the board described by `spec` and runs it through both stages.
///
/// Stage 1 correlates the board with the `x` and `o` detectors, adds bias,
/// activates and pools. Stage 2 correlates each pooled mark map with the line
/// detectors, then applies bias, activation and pooling again.
pub fn run_pipeline(spec: &PipelineSpec) -> Result<PipelineReport> {
    let mut game = TicTacToe::new(spec.board.width, spec.board.height)?;
    game.fill_up(&spec.board.x_marks, &spec.board.o_marks)?;
    let board = game.into_grid();

    let stage1_pool = PoolLayer::new(spec.stage1.pool_size, spec.stage1.pool_mode);
    let mut layer1 = Vec::new();
    let mut layer1_pooled = Vec::new();
    for (name, kernel) in kernels::x_o_kernels() {
        let layer = ConvLayer::new(kernel, spec.stage1.bias, spec.stage1.activation);
        let out = layer.forward(&board)?;
        let label = format!("{} kernel", name);
        layer1_pooled.push(FeatureMap::new(
            format!("{}+{}", label, spec.stage1.pool_mode),
            stage1_pool.forward(&out)?,
        ));
        layer1.push(FeatureMap::new(label, out));
    }

    let (x_pooled, o_pooled) = match layer1_pooled.as_slice() {
        [x, o] => (&x.map, &o.map),
        _ => return Err(ConvError::InvalidArgument("expected one x and one o map".to_string())),
    };

    let layer2_x = detect_lines(x_pooled, "x")?;
    let layer2_o = detect_lines(o_pooled, "o")?;
    let layer2_x_activated = activate_and_pool(&layer2_x, &spec.stage2)?;
    let layer2_o_activated = activate_and_pool(&layer2_o, &spec.stage2)?;

    Ok(PipelineReport {
        board,
        layer1,
        layer1_pooled,
        layer2_x,
        layer2_o,
        layer2_x_activated,
        layer2_o_activated,
    })
}

/// Raw line-detector responses on one pooled mark map, no bias or activation.
fn detect_lines(input: &Matrix, suffix: &str) -> Result<Vec<FeatureMap>> {
    kernels::line_kernels()
        .into_iter()
        .map(|(name, kernel)| {
            let out = correlate2d(input, &kernel)?;
            Ok(FeatureMap::new(format!("{} {}", name, suffix), out))
        })
        .collect()
}

/// `pool(activation(map + bias))` for every map.
fn activate_and_pool(maps: &[FeatureMap], stage: &StageSpec) -> Result<Vec<FeatureMap>> {
    let pool = PoolLayer::new(stage.pool_size, stage.pool_mode);
    maps.iter()
        .map(|fm| {
            let activated = stage.activation.apply(&fm.map.add_scalar(stage.bias));
            Ok(FeatureMap::new(format!("{}+activation", fm.name), pool.forward(&activated)?))
        })
        .collect()
}
