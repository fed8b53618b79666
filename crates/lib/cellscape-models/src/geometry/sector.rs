use cellscape_core::position::Position;

use crate::geometry::hexagon::{is_in_circle_xy, is_in_hexagon};

/// Centre of the hexagon served by the sector pointing at `azimuth_deg`.
/// Azimuths are measured clockwise from north.
pub fn sector_center(site: &Position, azimuth_deg: f64, sector_radius: f64) -> Position {
    let azimuth = azimuth_deg.to_radians();
    *site + Position::new(azimuth.sin(), azimuth.cos(), 0.0) * sector_radius
}

/// Index of the first sector of `site` that covers `mobile`.
///
/// A sector covers the mobile when the mobile lies in the sector's hexagon and
/// is not within `min_distance` of the site itself in the x-y plane.
pub fn sector_of(
    mobile: &Position,
    site: &Position,
    azimuths_deg: &[f64],
    min_distance: f64,
    sector_radius: f64,
) -> Option<usize> {
    if is_in_circle_xy(site, mobile, min_distance) {
        return None;
    }
    azimuths_deg.iter().position(|azimuth| {
        let center = sector_center(site, *azimuth, sector_radius);
        is_in_hexagon(mobile, sector_radius, &center)
    })
}

pub fn is_in_any_sector(
    mobile: &Position,
    site: &Position,
    azimuths_deg: &[f64],
    min_distance: f64,
    sector_radius: f64,
) -> bool {
    sector_of(mobile, site, azimuths_deg, min_distance, sector_radius).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AZIMUTHS: [f64; 3] = [-60.0, 60.0, 180.0 - 1e-6];

    #[test]
    fn test_sector_centers_follow_compass() {
        let site = Position::new(100.0, 100.0, 25.0);
        let north = sector_center(&site, 0.0, 10.0);
        assert!((north.x - 100.0).abs() < 1e-12);
        assert!((north.y - 110.0).abs() < 1e-12);
        let east = sector_center(&site, 90.0, 10.0);
        assert!((east.x - 110.0).abs() < 1e-12);
        assert!((east.y - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_sector_index() {
        let site = Position::origin();
        let radius = 100.0;
        for (index, azimuth) in AZIMUTHS.iter().enumerate() {
            let mobile = sector_center(&site, *azimuth, radius);
            assert_eq!(sector_of(&mobile, &site, &AZIMUTHS, 10.0, radius), Some(index));
        }
    }

    #[test]
    fn test_near_field_is_excluded() {
        let site = Position::origin();
        let mobile = Position::new(0.0, 5.0, 1.5);
        assert!(!is_in_any_sector(&mobile, &site, &AZIMUTHS, 10.0, 100.0));
        let mobile = Position::new(0.0, -15.0, 1.5);
        assert!(is_in_any_sector(&mobile, &site, &AZIMUTHS, 10.0, 100.0));
    }

    #[test]
    fn test_far_point_is_outside() {
        let site = Position::origin();
        let mobile = Position::new(500.0, 500.0, 1.5);
        assert!(!is_in_any_sector(&mobile, &site, &AZIMUTHS, 10.0, 100.0));
    }
}
