use std::str::FromStr;

use log::{debug, warn};

use cellscape_core::bounds::BoundingBox;
use cellscape_core::error::{ScenarioError, ScenarioResult};
use cellscape_core::position::Position;

use crate::scenario::deployment::{DeploymentParams, DeploymentType};

pub const SPEED_OF_LIGHT: f64 = 3e8;

const INDOOR_WIDTH: f64 = 120.0;
const INDOOR_HEIGHT: f64 = 50.0;
const SCENARIO_Z_MAX: f64 = 20.0;

/// Keeps the third sector strictly below 180 degrees.
const AZIMUTH_EPSILON: f64 = 1e-6;

/// Geometry and radio parameters of one scenario, fixed once the deployment
/// type and the number of site rings are chosen.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    deployment: DeploymentType,
    params: &'static DeploymentParams,
    number_of_rings: u32,
    ms_height: f64,
    bounds: BoundingBox,
    azimuths: Vec<f64>,
}

impl ScenarioConfig {
    pub fn new(
        deployment: DeploymentType,
        number_of_rings: u32,
        ms_height: f64,
    ) -> ScenarioResult<Self> {
        let params = deployment.params();
        let (x_max, y_max, azimuths) = match deployment {
            DeploymentType::IndoorHotspot => (INDOOR_WIDTH, INDOOR_HEIGHT, vec![0.0]),
            _ => {
                // Leaves room for all rings around the centre site plus the
                // wraparound copies while staying in the positive quadrant.
                let extent = f64::from(number_of_rings * 2 + 2) * params.inter_site_distance;
                (extent, extent, vec![-60.0, 60.0, 180.0 - AZIMUTH_EPSILON])
            }
        };
        let bounds = BoundingBox::new(0.0, 0.0, x_max, y_max, 0.0, SCENARIO_Z_MAX)?;
        let config = Self {
            deployment,
            params,
            number_of_rings,
            ms_height,
            bounds,
            azimuths,
        };
        if !config.is_sector_placement_feasible() {
            warn!(
                "Minimum distance {} m is not below the sector radius {} m, sector placement will fail",
                config.min_distance(),
                config.sector_radius()
            );
        }
        debug!(
            "Scenario {} with {} rings covers {} x {} m",
            deployment,
            number_of_rings,
            bounds.width(),
            bounds.height()
        );
        Ok(config)
    }

    /// Builds a scenario from a textual deployment tag such as "UMa".
    pub fn from_tag(tag: &str, number_of_rings: u32, ms_height: f64) -> ScenarioResult<Self> {
        let deployment = DeploymentType::from_str(tag)?;
        Self::new(deployment, number_of_rings, ms_height)
    }

    /// Grows the upper bounds to the next multiple of the bin counts so that
    /// grid bins have integral sizes.
    pub fn extend_bounding_box_to_multiples_of(
        &mut self,
        x_bins: u32,
        y_bins: u32,
    ) -> ScenarioResult<()> {
        if x_bins == 0 || y_bins == 0 {
            return Err(ScenarioError::InvalidBins { x_bins, y_bins });
        }
        let x_bins = f64::from(x_bins);
        let y_bins = f64::from(y_bins);
        let x_max = self.bounds.x_max() - self.bounds.x_max().rem_euclid(x_bins) + x_bins;
        let y_max = self.bounds.y_max() - self.bounds.y_max().rem_euclid(y_bins) + y_bins;
        self.bounds = self.bounds.with_upper_corner(x_max, y_max)?;
        debug!("Bounding box extended to {} x {} m", x_max, y_max);
        Ok(())
    }

    pub fn deployment(&self) -> DeploymentType {
        self.deployment
    }

    pub fn params(&self) -> &'static DeploymentParams {
        self.params
    }

    pub fn number_of_rings(&self) -> u32 {
        self.number_of_rings
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    pub fn azimuths(&self) -> &[f64] {
        &self.azimuths
    }

    pub fn center(&self) -> Position {
        self.bounds.center()
    }

    pub fn inter_site_distance(&self) -> f64 {
        self.params.inter_site_distance
    }

    /// Circumradius of the hexagon covered by one sector.
    pub fn sector_radius(&self) -> f64 {
        self.params.inter_site_distance / 3.0
    }

    pub fn min_distance(&self) -> f64 {
        self.params.min_distance
    }

    pub fn is_sector_placement_feasible(&self) -> bool {
        self.min_distance() < self.sector_radius()
    }

    pub fn center_frequency_hz(&self) -> f64 {
        self.params.center_freq_hz
    }

    pub fn wavelength_m(&self) -> f64 {
        SPEED_OF_LIGHT / self.params.center_freq_hz
    }

    pub fn bs_height(&self) -> f64 {
        self.params.bs_height
    }

    pub fn ms_height(&self) -> f64 {
        self.ms_height
    }

    pub fn downtilt_rad(&self) -> Option<f64> {
        self.params.downtilt_rad()
    }

    pub fn bs_per_prb_tx_power_dbm(&self) -> f64 {
        self.params.bs_per_prb_tx_power_dbm()
    }

    pub fn ms_total_tx_power_dbm(&self) -> f64 {
        self.params.ms_total_tx_power_dbm
    }

    pub fn ms_speed_kmh(&self) -> f64 {
        self.params.ms_speed_kmh
    }

    pub fn ms_speed_mps(&self) -> f64 {
        self.params.ms_speed_kmh / 3.6
    }
}
