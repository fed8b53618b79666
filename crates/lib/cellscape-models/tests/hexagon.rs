use std::f64::consts::FRAC_PI_3;

use cellscape_core::position::Position;
use cellscape_models::geometry::hexagon::{is_in_hexagon, COS_30_DEG};

fn rotate_around(point: &Position, center: &Position, angle: f64) -> Position {
    let offset = *point - *center;
    let (sin, cos) = angle.sin_cos();
    *center
        + Position::new(
            offset.x * cos - offset.y * sin,
            offset.x * sin + offset.y * cos,
            offset.z,
        )
}

#[test]
fn test_invariant_under_sixty_degree_rotation() {
    let center = Position::new(250.0, -75.0, 0.0);
    let radius = 166.0;
    for i in -40..=40 {
        for j in -40..=40 {
            let point = center + Position::new(i as f64 * 4.3, j as f64 * 4.1, 1.5);
            // Skip points that sit on the boundary up to rounding.
            let inner = is_in_hexagon(&point, radius * (1.0 - 1e-9), &center);
            let outer = is_in_hexagon(&point, radius * (1.0 + 1e-9), &center);
            if inner != outer {
                continue;
            }
            for k in 1..6 {
                let rotated = rotate_around(&point, &center, k as f64 * FRAC_PI_3);
                assert_eq!(
                    is_in_hexagon(&rotated, radius, &center),
                    inner,
                    "point {} rotated by {} sextants",
                    point,
                    k
                );
            }
        }
    }
}

#[test]
fn test_inscribed_circle_is_inside() {
    let cases = [
        (Position::new(-20.0, 40.0, 0.0), 100.0),
        (Position::new(0.0, 0.0, 0.0), 100.0),
        (Position::new(500.0, 500.0, 0.0), 500.0 / 3.0),
        (Position::new(1250.0, -75.0, 0.0), 166.666),
    ];
    for (center, radius) in cases {
        for step in 0..720 {
            let angle = (step as f64 * 0.5).to_radians();
            let point = center + Position::from_polar(radius * COS_30_DEG, angle);
            assert!(
                is_in_hexagon(&point, radius, &center),
                "radius {} angle {}",
                radius,
                angle
            );
        }
    }
}

#[test]
fn test_edge_midpoints_are_inside() {
    for (center, radius) in [
        (Position::new(0.0, 0.0, 0.0), 100.0),
        (Position::new(0.0, 0.0, 0.0), 166.666),
    ] {
        for degrees in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0] {
            let angle = f64::to_radians(degrees);
            let point = center + Position::from_polar(radius * COS_30_DEG, angle);
            assert!(
                is_in_hexagon(&point, radius, &center),
                "radius {} at {} degrees",
                radius,
                degrees
            );
        }
    }
}

#[test]
fn test_beyond_circumscribed_circle_is_outside() {
    let center = Position::new(-20.0, 40.0, 0.0);
    let radius = 100.0;
    for step in 0..720 {
        let angle = (step as f64 * 0.5).to_radians();
        let point = center + Position::from_polar(radius * 1.001, angle);
        assert!(!is_in_hexagon(&point, radius, &center), "angle {}", angle);
    }
}

#[test]
fn test_height_is_ignored() {
    let center = Position::new(0.0, 0.0, 0.0);
    let point = Position::new(10.0, 10.0, 500.0);
    assert!(is_in_hexagon(&point, 20.0, &center));
}
