use std::path::Path;

use serde::Deserialize;

use cellscape_models::dist::SamplerSettings;
use cellscape_models::placement::{DrawBudget, GridBins, PlacementRequest, PlacementStrategy};
use cellscape_models::scenario::deployment::DeploymentType;
use cellscape_output::logger::LogSettings;
use cellscape_output::result::OutputSettings;

#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioSettings {
    pub deployment: DeploymentType,
    pub number_of_rings: u32,
    pub ms_height: f64,
    #[serde(default)]
    pub wraparound: bool,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Debug, Clone)]
pub struct PlacementSettings {
    pub strategy: PlacementStrategy,
    #[serde(default)]
    pub num_ms: usize,
    #[serde(default)]
    pub x_bins: u32,
    #[serde(default)]
    pub y_bins: u32,
    #[serde(default)]
    pub extend_to_bins: bool,
    pub seed: Option<u64>,
    pub max_draws_per_mobile: Option<u64>,
}

impl PlacementSettings {
    pub(crate) fn bins(&self) -> GridBins {
        GridBins::builder()
            .x_bins(self.x_bins)
            .y_bins(self.y_bins)
            .build()
    }

    pub(crate) fn sampler_settings(&self) -> SamplerSettings {
        SamplerSettings { seed: self.seed }
    }

    pub(crate) fn request(&self) -> PlacementRequest {
        let budget = self
            .max_draws_per_mobile
            .map(DrawBudget::new)
            .unwrap_or_default();
        PlacementRequest::builder()
            .strategy(self.strategy)
            .bins(self.bins())
            .num_ms(self.num_ms)
            .budget(budget)
            .build()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub log_settings: LogSettings,
    pub scenario_settings: ScenarioSettings,
    pub placement_settings: PlacementSettings,
    pub output_settings: OutputSettings,
}

pub(crate) fn read_config(file_path: &Path) -> Config {
    let input_toml = match std::fs::read_to_string(file_path) {
        Ok(parsed_string) => parsed_string,
        Err(_) => panic!("Failed to read input TOML file"),
    };
    match toml::from_str(&input_toml) {
        Ok(config) => config,
        Err(e) => panic!("Invalid toml file given: {}", e),
    }
}
