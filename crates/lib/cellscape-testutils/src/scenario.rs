use cellscape_core::position::Position;
use cellscape_models::scenario::config::ScenarioConfig;
use cellscape_models::scenario::deployment::DeploymentType;
use cellscape_models::sites::{SiteLayout, SitePlacer};

pub const MS_HEIGHT: f64 = 1.5;

pub fn site_at(x: f64, y: f64) -> Position {
    Position::new(x, y, 25.0)
}

pub fn urban_macro(number_of_rings: u32) -> ScenarioConfig {
    ScenarioConfig::new(DeploymentType::UrbanMacro, number_of_rings, MS_HEIGHT).unwrap()
}

/// The scenario together with the sites of its default layout.
pub fn scenario_with_sites(
    deployment: DeploymentType,
    number_of_rings: u32,
) -> (ScenarioConfig, Vec<Position>) {
    let config = ScenarioConfig::new(deployment, number_of_rings, MS_HEIGHT).unwrap();
    let sites = SiteLayout::for_scenario(&config).site_positions();
    (config, sites)
}
