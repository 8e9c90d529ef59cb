use serde::{Deserialize, Serialize};

use super::{FxFyCxCy, SimCamera, ThinLens};
use crate::{DomainError, Real};

/// Serializable projection model parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectionParams {
    /// Classic pinhole model.
    Pinhole,
}

/// Serializable intrinsics parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntrinsicsParams {
    /// Skew-free pinhole intrinsics.
    FxFyCxCy {
        #[serde(flatten)]
        params: FxFyCxCy<Real>,
    },
}

/// Serializable camera parameters for building a simulation engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraParams {
    /// Projection model parameters.
    pub projection: ProjectionParams,
    /// Intrinsics model parameters.
    pub intrinsics: IntrinsicsParams,
    /// Thin-lens parameters.
    pub lens: ThinLens,
}

impl CameraParams {
    /// Build a concrete engine from this parameter set.
    ///
    /// Fails when a physical invariant does not hold (non-positive focal
    /// lengths, f-number or focus distance).
    pub fn build(&self) -> Result<SimCamera, DomainError> {
        let ProjectionParams::Pinhole = self.projection;
        let k = match self.intrinsics {
            IntrinsicsParams::FxFyCxCy { params } => params,
        };
        SimCamera::new(k, self.lens)
    }
}
