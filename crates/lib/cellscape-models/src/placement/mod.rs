//! Mobile placement strategies.
//!
//! Grid strategies visit every point of an `x_bins` by `y_bins` grid spanning
//! the scenario's bounding box once. Random strategies draw integer
//! coordinates from a [`UniformSource`] and reject candidates until enough
//! mobiles are collected, giving up with
//! [`ScenarioError::InfeasiblePlacement`] when the draw budget is spent.

use log::info;
use serde::Deserialize;
use typed_builder::TypedBuilder;

use cellscape_core::error::{ScenarioError, ScenarioResult};
use cellscape_core::position::Position;

use crate::dist::UniformSource;
use crate::scenario::config::ScenarioConfig;

pub mod grid;
pub mod index;
pub mod random;

pub use grid::{place_mobiles_equally_in_cells, place_mobiles_equally_in_rectangle};
pub use random::{place_mobiles_uniformly_in_cells, place_mobiles_uniformly_in_rectangle};

pub const DEFAULT_MAX_DRAWS_PER_MOBILE: u64 = 10_000;

#[derive(Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlacementStrategy {
    GridInCells,
    GridInRectangle,
    RandomInCells,
    RandomInRectangle,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, TypedBuilder)]
pub struct GridBins {
    pub x_bins: u32,
    pub y_bins: u32,
}

impl GridBins {
    pub fn validate(&self) -> ScenarioResult<()> {
        if self.x_bins == 0 || self.y_bins == 0 {
            return Err(ScenarioError::InvalidBins {
                x_bins: self.x_bins,
                y_bins: self.y_bins,
            });
        }
        Ok(())
    }
}

/// Upper bound on the candidate positions drawn by a random strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawBudget {
    pub max_draws_per_mobile: u64,
}

impl Default for DrawBudget {
    fn default() -> Self {
        Self {
            max_draws_per_mobile: DEFAULT_MAX_DRAWS_PER_MOBILE,
        }
    }
}

impl DrawBudget {
    pub fn new(max_draws_per_mobile: u64) -> Self {
        Self {
            max_draws_per_mobile,
        }
    }

    pub fn limit(&self, num_ms: usize) -> u64 {
        self.max_draws_per_mobile
            .saturating_mul(num_ms.max(1) as u64)
    }
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct PlacementRequest {
    pub strategy: PlacementStrategy,
    #[builder(default)]
    pub bins: GridBins,
    #[builder(default)]
    pub num_ms: usize,
    #[builder(default)]
    pub budget: DrawBudget,
}

pub fn place_mobiles<S: UniformSource>(
    request: &PlacementRequest,
    sites: &[Position],
    config: &ScenarioConfig,
    source: &mut S,
) -> ScenarioResult<Vec<Position>> {
    let mobiles = match request.strategy {
        PlacementStrategy::GridInCells => {
            place_mobiles_equally_in_cells(sites, config, request.bins)?
        }
        PlacementStrategy::GridInRectangle => {
            place_mobiles_equally_in_rectangle(sites, config, request.bins)?
        }
        PlacementStrategy::RandomInCells => place_mobiles_uniformly_in_cells(
            request.num_ms,
            sites,
            config,
            source,
            request.budget,
        )?,
        PlacementStrategy::RandomInRectangle => place_mobiles_uniformly_in_rectangle(
            request.num_ms,
            sites,
            config,
            source,
            request.budget,
        )?,
    };
    info!(
        "{:?} placed {} mobiles around {} sites",
        request.strategy,
        mobiles.len(),
        sites.len()
    );
    Ok(mobiles)
}
