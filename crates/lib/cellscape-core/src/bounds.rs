use crate::error::{ScenarioError, ScenarioResult};
use crate::position::Position;

/// The simulated rectangle. Heights are carried along for downstream
/// consumers but play no role in placement.
///
/// Only reachable through [`BoundingBox::new`], so `x_max > x_min` and
/// `y_max > y_min` always hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
    z_min: f64,
    z_max: f64,
}

impl BoundingBox {
    pub fn new(
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
        z_min: f64,
        z_max: f64,
    ) -> ScenarioResult<Self> {
        // NaN fails both comparisons and is rejected as well.
        if x_max > x_min && y_max > y_min {
            return Ok(Self {
                x_min,
                y_min,
                x_max,
                y_max,
                z_min,
                z_max,
            });
        }
        Err(ScenarioError::InvalidBoundingBox {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// The same box with its upper x-y corner moved.
    pub fn with_upper_corner(&self, x_max: f64, y_max: f64) -> ScenarioResult<Self> {
        Self::new(self.x_min, self.y_min, x_max, y_max, self.z_min, self.z_max)
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn z_min(&self) -> f64 {
        self.z_min
    }

    pub fn z_max(&self) -> f64 {
        self.z_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> Position {
        Position::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
            0.0,
        )
    }

    pub fn contains_xy(&self, position: &Position) -> bool {
        position.x >= self.x_min
            && position.x <= self.x_max
            && position.y >= self.y_min
            && position.y <= self.y_max
    }
}
