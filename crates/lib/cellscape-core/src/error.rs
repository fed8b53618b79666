use thiserror::Error;

/// Failures raised while building a scenario or placing mobiles in it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// The deployment tag does not name any supported deployment type.
    #[error("unknown deployment type '{0}', supported values are: InH, UMi, UMa, SMa, RMa")]
    UnknownDeployment(String),

    #[error(
        "bounding box ({x_min}, {y_min}) - ({x_max}, {y_max}) must have x_max > x_min and y_max > y_min"
    )]
    InvalidBoundingBox {
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    },

    #[error("grid needs at least one bin per axis, got {x_bins}x{y_bins}")]
    InvalidBins { x_bins: u32, y_bins: u32 },

    /// Rejection sampling ran out of draws before collecting enough mobiles.
    #[error("infeasible configuration: placed {placed} of {requested} mobiles after {draws} draws")]
    InfeasiblePlacement {
        requested: usize,
        placed: usize,
        draws: u64,
    },
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
