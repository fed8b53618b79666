use itertools::iproduct;
use log::debug;

use cellscape_core::error::ScenarioResult;
use cellscape_core::position::Position;

use crate::geometry::sector::is_in_any_sector;
use crate::placement::index::{SiteIndex, SiteOrder};
use crate::placement::GridBins;
use crate::scenario::config::ScenarioConfig;

fn grid_points(config: &ScenarioConfig, bins: GridBins) -> impl Iterator<Item = Position> {
    let bounds = config.bounding_box();
    let ms_height = config.ms_height();
    let x_bins = f64::from(bins.x_bins);
    let y_bins = f64::from(bins.y_bins);
    iproduct!(0..bins.x_bins, 0..bins.y_bins).map(move |(x, y)| {
        Position::new(
            f64::from(x) * bounds.width() / x_bins + bounds.x_min(),
            f64::from(y) * bounds.height() / y_bins + bounds.y_min(),
            ms_height,
        )
    })
}

/// One mobile at every grid point that falls into some site's sector.
pub fn place_mobiles_equally_in_cells(
    sites: &[Position],
    config: &ScenarioConfig,
    bins: GridBins,
) -> ScenarioResult<Vec<Position>> {
    bins.validate()?;
    let azimuths = config.azimuths();
    let min_distance = config.min_distance();
    let sector_radius = config.sector_radius();

    // Consecutive grid points mostly land in the same sector, so the site
    // that took the previous point is tried first.
    let mut order = SiteOrder::new(sites.len());
    let mut mobiles = Vec::new();
    for position in grid_points(config, bins) {
        let accepted = order.as_slice().iter().position(|&site| {
            is_in_any_sector(
                &position,
                &sites[site],
                azimuths,
                min_distance,
                sector_radius,
            )
        });
        if let Some(rank) = accepted {
            mobiles.push(position);
            order.promote(rank);
        }
    }
    debug!(
        "Grid of {}x{} kept {} points inside sectors",
        bins.x_bins,
        bins.y_bins,
        mobiles.len()
    );
    Ok(mobiles)
}

/// One mobile at every grid point that keeps the minimum distance to all
/// sites. Sectors play no role.
pub fn place_mobiles_equally_in_rectangle(
    sites: &[Position],
    config: &ScenarioConfig,
    bins: GridBins,
) -> ScenarioResult<Vec<Position>> {
    bins.validate()?;
    let index = SiteIndex::new(sites);
    let min_distance = config.min_distance();
    let mobiles: Vec<Position> = grid_points(config, bins)
        .filter(|position| is_clear_of_sites(position, &index, min_distance))
        .collect();
    debug!(
        "Grid of {}x{} kept {} points clear of all sites",
        bins.x_bins,
        bins.y_bins,
        mobiles.len()
    );
    Ok(mobiles)
}

pub(crate) fn is_clear_of_sites(position: &Position, index: &SiteIndex, min_distance: f64) -> bool {
    index
        .candidates(position, min_distance)
        .into_iter()
        .all(|site| index.site(site).distance_2d(position) > min_distance)
}
