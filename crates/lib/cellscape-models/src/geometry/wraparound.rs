use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

use log::debug;

use cellscape_core::position::{Position, Vector};

const WRAPAROUND_COPIES: usize = 6;

/// Shift vectors that surround the site cluster with six copies of itself.
///
/// The centre site and its first copy towards the upper right are two corners
/// of a triangle: side `a` runs along a multiple of the inter-site distance at
/// 30 degrees, side `b` goes straight up to the copy's centre and the angle
/// between them is 120 degrees. The third side `c` is the wraparound radius and
/// `90° - alpha` (alpha opposite `a`) the direction of the first copy.
///
/// Only clusters of one or two rings are supported; any other ring count gets
/// no wraparound and an empty vector is returned.
pub fn compute_shift_vectors(inter_site_distance: f64, number_of_rings: u32) -> Vec<Vector> {
    let (a, b) = match number_of_rings {
        1 => (2.0 * inter_site_distance, inter_site_distance),
        2 => (3.0 * inter_site_distance, 2.0 * inter_site_distance),
        _ => {
            debug!(
                "No wraparound for {} rings, returning no shift vectors",
                number_of_rings
            );
            return Vec::new();
        }
    };

    let gamma = 120f64.to_radians();
    let radius = (a * a + b * b - 2.0 * a * b * gamma.cos()).sqrt();
    let base_angle = FRAC_PI_2 - ((a * a - b * b - radius * radius) / (-2.0 * b * radius)).acos();

    (0..WRAPAROUND_COPIES)
        .map(|i| Position::from_polar(radius, base_angle + i as f64 * FRAC_PI_3))
        .collect()
}

/// The copy of `mobile` closest to `site` among the original position and its
/// shifted versions. Only the mobile is wrapped, sites stay where they are.
pub fn wrapped_position(site: &Position, mobile: &Position, shift_vectors: &[Vector]) -> Position {
    let mut wrapped = *mobile;
    let mut shortest = site.distance(mobile);
    for shift in shift_vectors {
        let candidate = *mobile + *shift;
        let distance = site.distance(&candidate);
        if distance < shortest {
            shortest = distance;
            wrapped = candidate;
        }
    }
    wrapped
}

/// Index of the site with the shortest x-y distance to the mobile after the
/// mobile is wrapped towards each site, along with that wrapped position.
pub fn closest_wrapped_site(
    mobile: &Position,
    sites: &[Position],
    shift_vectors: &[Vector],
) -> Option<(usize, Position)> {
    sites
        .iter()
        .enumerate()
        .map(|(idx, site)| (idx, site, wrapped_position(site, mobile, shift_vectors)))
        .min_by(|(_, site_a, wrapped_a), (_, site_b, wrapped_b)| {
            site_a
                .distance_2d(wrapped_a)
                .total_cmp(&site_b.distance_2d(wrapped_b))
        })
        .map(|(idx, _, wrapped)| (idx, wrapped))
}
