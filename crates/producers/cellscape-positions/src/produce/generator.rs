use std::path::{Path, PathBuf};

use log::{debug, info};

use cellscape_core::error::ScenarioResult;
use cellscape_core::ids::{MobileId, SiteId};
use cellscape_core::position::{Position, Vector};
use cellscape_models::dist::RngSampler;
use cellscape_models::geometry::wraparound::{closest_wrapped_site, compute_shift_vectors};
use cellscape_models::placement::place_mobiles;
use cellscape_models::scenario::config::ScenarioConfig;
use cellscape_models::sites::{SiteLayout, SitePlacer};
use cellscape_output::error::OutputResult;
use cellscape_output::logger::initiate_logger;
use cellscape_output::result::Results;
use cellscape_output::tables::mobiles::MobileInfo;

use crate::produce::config::Config;

#[derive(Debug)]
pub(crate) struct GeneratedScenario {
    pub(crate) sites: Vec<Position>,
    pub(crate) shift_vectors: Vec<Vector>,
    pub(crate) mobiles: Vec<MobileInfo>,
}

pub(crate) struct ScenarioGenerator {
    config_dir: PathBuf,
    config: Config,
}

impl ScenarioGenerator {
    /// Log and output paths are resolved against the directory holding the
    /// configuration file.
    pub(crate) fn new(config: Config, config_file: &Path) -> Self {
        let config_dir = config_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self { config_dir, config }
    }

    pub(crate) fn initialize(&self) {
        if let Err(e) = initiate_logger(&self.config_dir, &self.config.log_settings) {
            panic!("Error while initializing the logger: {}", e);
        }
    }

    pub(crate) fn build_scenario(&self) -> ScenarioResult<ScenarioConfig> {
        let settings = &self.config.scenario_settings;
        let mut scenario = ScenarioConfig::new(
            settings.deployment,
            settings.number_of_rings,
            settings.ms_height,
        )?;
        let placement = &self.config.placement_settings;
        if placement.extend_to_bins {
            scenario.extend_bounding_box_to_multiples_of(placement.x_bins, placement.y_bins)?;
        }
        info!(
            "{} scenario with {} rings in {:?}",
            scenario.deployment(),
            scenario.number_of_rings(),
            scenario.bounding_box()
        );
        Ok(scenario)
    }

    pub(crate) fn generate(&self) -> ScenarioResult<GeneratedScenario> {
        let scenario = self.build_scenario()?;
        let sites = SiteLayout::for_scenario(&scenario).site_positions();
        debug!("Site layout produced {} sites", sites.len());

        let shift_vectors = if self.config.scenario_settings.wraparound {
            compute_shift_vectors(scenario.inter_site_distance(), scenario.number_of_rings())
        } else {
            Vec::new()
        };

        let placement = &self.config.placement_settings;
        let mut sampler = RngSampler::new(&placement.sampler_settings());
        let positions = place_mobiles(&placement.request(), &sites, &scenario, &mut sampler)?;

        let mobiles = positions
            .iter()
            .enumerate()
            .filter_map(|(idx, position)| {
                closest_wrapped_site(position, &sites, &shift_vectors).map(|(site, wrapped)| {
                    MobileInfo::builder()
                        .mobile_id(MobileId::from(idx))
                        .position(*position)
                        .nearest_site(SiteId::from(site))
                        .wrapped(wrapped)
                        .build()
                })
            })
            .collect();

        Ok(GeneratedScenario {
            sites,
            shift_vectors,
            mobiles,
        })
    }

    pub(crate) fn write_results(&self, generated: &GeneratedScenario) -> OutputResult<()> {
        let mut results = Results::new(&self.config_dir, &self.config.output_settings)?;
        if let Some(writer) = &mut results.sites {
            for (idx, site) in generated.sites.iter().enumerate() {
                writer.add_data(SiteId::from(idx), site);
            }
        }
        if let Some(writer) = &mut results.mobiles {
            for mobile in generated.mobiles.iter() {
                writer.add_data(mobile);
            }
        }
        if let Some(writer) = &mut results.shifts {
            for (idx, shift) in generated.shift_vectors.iter().enumerate() {
                writer.add_data(idx as u64, shift);
            }
        }
        results.write_to_file()?;
        results.close_files()
    }
}

#[cfg(test)]
mod tests {
    use cellscape_models::geometry::sector::is_in_any_sector;
    use cellscape_models::placement::PlacementStrategy;
    use cellscape_models::scenario::deployment::DeploymentType;

    use crate::produce::config::tests::sample_config;

    use super::*;

    fn generator(config: Config, dir: &Path) -> ScenarioGenerator {
        ScenarioGenerator::new(config, &dir.join("scenario.toml"))
    }

    #[test]
    fn test_generated_mobiles_sit_in_sectors() {
        let dir = tempfile::tempdir().unwrap();
        let generator = generator(sample_config(), dir.path());
        let scenario = generator.build_scenario().unwrap();
        let generated = generator.generate().unwrap();

        assert_eq!(generated.sites.len(), 7);
        assert_eq!(generated.shift_vectors.len(), 6);
        assert_eq!(generated.mobiles.len(), 70);
        for mobile in &generated.mobiles {
            assert!(generated.sites.iter().any(|site| is_in_any_sector(
                &mobile.position,
                site,
                scenario.azimuths(),
                scenario.min_distance(),
                scenario.sector_radius(),
            )));
            assert!(mobile.nearest_site.as_usize() < generated.sites.len());
        }
    }

    #[test]
    fn test_nearest_site_uses_wrapped_distance() {
        let dir = tempfile::tempdir().unwrap();
        let generated = generator(sample_config(), dir.path()).generate().unwrap();
        for mobile in &generated.mobiles {
            let nearest = &generated.sites[mobile.nearest_site.as_usize()];
            let distance = nearest.distance_2d(&mobile.wrapped);
            assert!(distance <= nearest.distance_2d(&mobile.position) + 1e-9);
        }
    }

    #[test]
    fn test_no_shift_vectors_without_wraparound() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = sample_config();
        config.scenario_settings.wraparound = false;
        let generated = generator(config, dir.path()).generate().unwrap();
        assert!(generated.shift_vectors.is_empty());
        for mobile in &generated.mobiles {
            assert_eq!(mobile.wrapped, mobile.position);
        }
    }

    #[test]
    fn test_extend_to_bins_grows_bounding_box() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = sample_config();
        config.scenario_settings.deployment = DeploymentType::UrbanMicro;
        config.placement_settings.extend_to_bins = true;
        config.placement_settings.x_bins = 300;
        config.placement_settings.y_bins = 70;
        let scenario = generator(config, dir.path()).build_scenario().unwrap();
        let bounds = scenario.bounding_box();
        assert_eq!(bounds.width() as u32 % 300, 0);
        assert_eq!(bounds.height() as u32 % 70, 0);
    }

    #[test]
    fn test_results_written_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = sample_config();
        config.placement_settings.strategy = PlacementStrategy::GridInCells;
        config.placement_settings.x_bins = 20;
        config.placement_settings.y_bins = 20;
        let generator = generator(config, dir.path());
        let generated = generator.generate().unwrap();
        generator.write_results(&generated).unwrap();

        let output = dir.path().join("output");
        let sites = std::fs::read_to_string(output.join("sites.csv")).unwrap();
        assert_eq!(sites.lines().count(), generated.sites.len() + 1);
        let shifts = std::fs::read_to_string(output.join("shifts.csv")).unwrap();
        assert_eq!(shifts.lines().count(), 7);
        assert!(output.join("mobiles.parquet").exists());
    }
}
