use serde::{Deserialize, Serialize};
use weave_core::WeaveError;
use weave_matrix::Matrix;

/// Serializable description of a matrix tree, one variant per node kind.
///
/// Items are strings at this layer; the engine stays generic underneath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MatrixSpec {
    /// A leaf wrapping one concrete item.
    Single { item: String },
    /// A child repeated a fixed number of times.
    Repeat { count: u64, child: Box<MatrixSpec> },
    /// A cartesian combination of children.
    Product { tag: String, children: Vec<MatrixSpec> },
    /// A proportional interleaving of children.
    Mix { tag: String, children: Vec<MatrixSpec> },
}

impl MatrixSpec {
    /// Builds the described matrix tree, surfacing construction errors.
    pub fn build(&self) -> Result<Matrix<String>, WeaveError> {
        match self {
            MatrixSpec::Single { item } => Ok(Matrix::single(item.clone())),
            MatrixSpec::Repeat { count, child } => Matrix::repeat(*count, child.build()?),
            MatrixSpec::Product { tag, children } => {
                let built = children
                    .iter()
                    .map(MatrixSpec::build)
                    .collect::<Result<Vec<_>, _>>()?;
                Matrix::product(tag.clone(), built)
            }
            MatrixSpec::Mix { tag, children } => {
                let built = children
                    .iter()
                    .map(MatrixSpec::build)
                    .collect::<Result<Vec<_>, _>>()?;
                Matrix::mix(tag.clone(), built)
            }
        }
    }
}
