use std::f64::consts::FRAC_PI_3;

use log::debug;
use typed_builder::TypedBuilder;

use cellscape_core::position::Position;

use crate::scenario::config::ScenarioConfig;
use crate::scenario::deployment::DeploymentType;

/// Produces the site positions of a deployment around a movable centre.
pub trait SitePlacer {
    fn inter_site_distance(&self) -> f64;
    fn center(&self) -> Position;
    fn set_center(&mut self, center: Position);
    fn site_positions(&self) -> Vec<Position>;
}

/// A centre site surrounded by `number_of_rings` hexagonal rings of sites.
/// Neighbouring sites lie at 30 + k*60 degrees from each other.
#[derive(Clone, Debug, TypedBuilder)]
pub struct HexagonalSitePlacer {
    inter_site_distance: f64,
    number_of_rings: u32,
    #[builder(default)]
    center: Position,
    #[builder(default)]
    height: f64,
}

impl HexagonalSitePlacer {
    fn direction(&self, index: usize) -> Position {
        let angle = FRAC_PI_3 / 2.0 + (index % 6) as f64 * FRAC_PI_3;
        Position::from_polar(self.inter_site_distance, angle)
    }
}

impl SitePlacer for HexagonalSitePlacer {
    fn inter_site_distance(&self) -> f64 {
        self.inter_site_distance
    }

    fn center(&self) -> Position {
        self.center
    }

    fn set_center(&mut self, center: Position) {
        self.center = center;
    }

    fn site_positions(&self) -> Vec<Position> {
        let center = self.center.with_z(self.height);
        let mut sites = vec![center];
        for ring in 1..=self.number_of_rings as usize {
            // Walk the ring from each corner towards the next one.
            for corner in 0..6 {
                let start = center + self.direction(corner) * ring as f64;
                let step = self.direction(corner + 2);
                for offset in 0..ring {
                    sites.push(start + step * offset as f64);
                }
            }
        }
        debug!(
            "Placed {} sites in {} rings around {}",
            sites.len(),
            self.number_of_rings,
            center
        );
        sites
    }
}

/// Two sites on a horizontal line through the centre of the indoor hall.
#[derive(Clone, Debug, TypedBuilder)]
pub struct IndoorHotspotSitePlacer {
    inter_site_distance: f64,
    #[builder(default)]
    center: Position,
    #[builder(default)]
    height: f64,
}

impl SitePlacer for IndoorHotspotSitePlacer {
    fn inter_site_distance(&self) -> f64 {
        self.inter_site_distance
    }

    fn center(&self) -> Position {
        self.center
    }

    fn set_center(&mut self, center: Position) {
        self.center = center;
    }

    fn site_positions(&self) -> Vec<Position> {
        let offset = Position::new(self.inter_site_distance / 2.0, 0.0, 0.0);
        let center = self.center.with_z(self.height);
        vec![center - offset, center + offset]
    }
}

#[derive(Clone, Debug)]
pub enum SiteLayout {
    Hexagonal(HexagonalSitePlacer),
    IndoorHotspot(IndoorHotspotSitePlacer),
}

impl SiteLayout {
    /// The layout matching the deployment of `config`, centred in its
    /// bounding box.
    pub fn for_scenario(config: &ScenarioConfig) -> Self {
        let mut layout = match config.deployment() {
            DeploymentType::IndoorHotspot => SiteLayout::IndoorHotspot(
                IndoorHotspotSitePlacer::builder()
                    .inter_site_distance(config.inter_site_distance())
                    .height(config.bs_height())
                    .build(),
            ),
            DeploymentType::UrbanMicro
            | DeploymentType::UrbanMacro
            | DeploymentType::SuburbanMacro
            | DeploymentType::RuralMacro => SiteLayout::Hexagonal(
                HexagonalSitePlacer::builder()
                    .inter_site_distance(config.inter_site_distance())
                    .number_of_rings(config.number_of_rings())
                    .height(config.bs_height())
                    .build(),
            ),
        };
        layout.set_center(config.center());
        layout
    }
}

impl SitePlacer for SiteLayout {
    fn inter_site_distance(&self) -> f64 {
        match self {
            SiteLayout::Hexagonal(placer) => placer.inter_site_distance(),
            SiteLayout::IndoorHotspot(placer) => placer.inter_site_distance(),
        }
    }

    fn center(&self) -> Position {
        match self {
            SiteLayout::Hexagonal(placer) => placer.center(),
            SiteLayout::IndoorHotspot(placer) => placer.center(),
        }
    }

    fn set_center(&mut self, center: Position) {
        match self {
            SiteLayout::Hexagonal(placer) => placer.set_center(center),
            SiteLayout::IndoorHotspot(placer) => placer.set_center(center),
        }
    }

    fn site_positions(&self) -> Vec<Position> {
        match self {
            SiteLayout::Hexagonal(placer) => placer.site_positions(),
            SiteLayout::IndoorHotspot(placer) => placer.site_positions(),
        }
    }
}
