use cellscape_core::bounds::BoundingBox;
use cellscape_core::error::ScenarioError;
use cellscape_core::position::Position;

#[test]
fn test_bounding_box_dimensions() {
    let bounds = BoundingBox::new(0.0, 0.0, 120.0, 50.0, 0.0, 20.0).unwrap();
    assert_eq!(bounds.width(), 120.0);
    assert_eq!(bounds.height(), 50.0);
    assert_eq!(bounds.center(), Position::new(60.0, 25.0, 0.0));
    assert!(bounds.contains_xy(&Position::new(120.0, 0.0, 5.0)));
    assert!(!bounds.contains_xy(&Position::new(120.5, 0.0, 5.0)));
}

#[test]
fn test_degenerate_bounding_box_is_rejected() {
    let result = BoundingBox::new(10.0, 0.0, 10.0, 50.0, 0.0, 20.0);
    assert!(matches!(
        result,
        Err(ScenarioError::InvalidBoundingBox { .. })
    ));
    let result = BoundingBox::new(0.0, 5.0, 10.0, -5.0, 0.0, 20.0);
    assert!(result.is_err());
}

#[test]
fn test_nan_extent_is_rejected() {
    let result = BoundingBox::new(0.0, 0.0, f64::NAN, 50.0, 0.0, 20.0);
    assert!(matches!(
        result,
        Err(ScenarioError::InvalidBoundingBox { .. })
    ));
}

#[test]
fn test_moving_upper_corner_keeps_invariant() {
    let bounds = BoundingBox::new(0.0, 0.0, 1000.0, 1000.0, 0.0, 20.0).unwrap();
    let grown = bounds.with_upper_corner(1200.0, 1050.0).unwrap();
    assert_eq!(grown.x_max(), 1200.0);
    assert_eq!(grown.y_max(), 1050.0);
    assert_eq!(grown.z_min(), 0.0);
    assert_eq!(grown.z_max(), 20.0);
    assert!(bounds.with_upper_corner(0.0, 1050.0).is_err());
}
