use log::{debug, warn};

use cellscape_core::bounds::BoundingBox;
use cellscape_core::error::{ScenarioError, ScenarioResult};
use cellscape_core::position::Position;

use crate::dist::UniformSource;
use crate::geometry::sector::is_in_any_sector;
use crate::placement::grid::is_clear_of_sites;
use crate::placement::index::SiteIndex;
use crate::placement::DrawBudget;
use crate::scenario::config::ScenarioConfig;

/// Integer coordinates that a uniform draw may produce inside the box.
#[derive(Debug, Clone, Copy)]
struct DrawRange {
    x_min: i64,
    x_max: i64,
    y_min: i64,
    y_max: i64,
}

impl DrawRange {
    fn new(bounds: &BoundingBox) -> ScenarioResult<Self> {
        let range = Self {
            x_min: bounds.x_min().ceil() as i64,
            x_max: bounds.x_max().floor() as i64,
            y_min: bounds.y_min().ceil() as i64,
            y_max: bounds.y_max().floor() as i64,
        };
        if range.x_min > range.x_max || range.y_min > range.y_max {
            return Err(ScenarioError::InvalidBoundingBox {
                x_min: bounds.x_min(),
                y_min: bounds.y_min(),
                x_max: bounds.x_max(),
                y_max: bounds.y_max(),
            });
        }
        Ok(range)
    }

    /// Draws x before y.
    fn draw<S: UniformSource>(&self, source: &mut S, z: f64) -> Position {
        let x = source.uniform_int(self.x_min, self.x_max);
        let y = source.uniform_int(self.y_min, self.y_max);
        Position::new(x as f64, y as f64, z)
    }
}

fn sample_until<S, F>(
    num_ms: usize,
    config: &ScenarioConfig,
    source: &mut S,
    budget: DrawBudget,
    mut accept: F,
) -> ScenarioResult<Vec<Position>>
where
    S: UniformSource,
    F: FnMut(&Position) -> bool,
{
    let range = DrawRange::new(&config.bounding_box())?;
    let limit = budget.limit(num_ms);
    let mut mobiles = Vec::with_capacity(num_ms);
    let mut draws: u64 = 0;
    while mobiles.len() < num_ms {
        if draws >= limit {
            warn!(
                "Gave up after {} draws with {} of {} mobiles placed",
                draws,
                mobiles.len(),
                num_ms
            );
            return Err(ScenarioError::InfeasiblePlacement {
                requested: num_ms,
                placed: mobiles.len(),
                draws,
            });
        }
        let candidate = range.draw(source, config.ms_height());
        draws += 1;
        if accept(&candidate) {
            mobiles.push(candidate);
        }
    }
    debug!("Placed {} mobiles with {} draws", mobiles.len(), draws);
    Ok(mobiles)
}

/// `num_ms` mobiles drawn uniformly over the bounding box, each inside some
/// site's sector.
pub fn place_mobiles_uniformly_in_cells<S: UniformSource>(
    num_ms: usize,
    sites: &[Position],
    config: &ScenarioConfig,
    source: &mut S,
    budget: DrawBudget,
) -> ScenarioResult<Vec<Position>> {
    let index = SiteIndex::new(sites);
    let azimuths = config.azimuths();
    let min_distance = config.min_distance();
    let sector_radius = config.sector_radius();
    // A sector hexagon reaches at most two sector radii away from its site.
    let reach = 2.0 * sector_radius;
    sample_until(num_ms, config, source, budget, |candidate| {
        index
            .candidates(candidate, reach)
            .into_iter()
            .any(|site| {
                is_in_any_sector(
                    candidate,
                    index.site(site),
                    azimuths,
                    min_distance,
                    sector_radius,
                )
            })
    })
}

/// `num_ms` mobiles drawn uniformly over the bounding box, each keeping the
/// minimum distance to all sites.
pub fn place_mobiles_uniformly_in_rectangle<S: UniformSource>(
    num_ms: usize,
    sites: &[Position],
    config: &ScenarioConfig,
    source: &mut S,
    budget: DrawBudget,
) -> ScenarioResult<Vec<Position>> {
    let index = SiteIndex::new(sites);
    let min_distance = config.min_distance();
    sample_until(num_ms, config, source, budget, |candidate| {
        is_clear_of_sites(candidate, &index, min_distance)
    })
}
