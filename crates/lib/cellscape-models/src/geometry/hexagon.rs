use std::f64::consts::FRAC_PI_3;

use cellscape_core::position::Position;

/// cos(30°), the inradius of a unit hexagon.
pub const COS_30_DEG: f64 = 0.866_025_403_784_438_6;

/// Rotation of the hexagon against a flat-top hexagon whose first corner
/// points along the x axis.
const CORRECTION_ANGLE: f64 = FRAC_PI_3 / 2.0;

/// Slack on the unit-hexagon comparisons so that points on the boundary stay
/// inside after the shift and scale to unit size.
const BOUNDARY_TOLERANCE: f64 = 1e-12;

/// Whether `point` lies inside the regular hexagon with circumradius `radius`
/// around `center`, boundary included. Heights are ignored.
pub fn is_in_hexagon(point: &Position, radius: f64, center: &Position) -> bool {
    let vector = (*point - *center) / radius;
    let length = vector.length_2d();

    if length > 1.0 + BOUNDARY_TOLERANCE {
        return false;
    }
    if length <= COS_30_DEG + BOUNDARY_TOLERANCE {
        return true;
    }

    // Between the inscribed and the circumscribed circle: fold the point into
    // the first 60 degree wedge and compare against the edge of that wedge.
    let angle = vector.angle_2d() - CORRECTION_ANGLE;
    let reduced = angle.rem_euclid(FRAC_PI_3);
    let x = length * reduced.cos();
    let y = length * reduced.sin();
    let max_y = (1.0 - x) * 2.0 * COS_30_DEG;
    y <= max_y + BOUNDARY_TOLERANCE
}

/// Whether `point` is within `radius` of `center` in the x-y plane, boundary
/// included.
pub fn is_in_circle_xy(center: &Position, point: &Position, radius: f64) -> bool {
    center.distance_2d(point) <= radius
}
