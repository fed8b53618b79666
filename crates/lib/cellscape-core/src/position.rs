use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use serde::Deserialize;

/// A point in the scenario plane, in metres. `z` carries the station height and
/// is ignored by every test that works in the x-y plane.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// Displacements share the representation of positions.
pub type Vector = Position;

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// A vector of the given length pointing at `angle` radians, measured
    /// counter-clockwise from the x axis.
    pub fn from_polar(length: f64, angle: f64) -> Self {
        Self::new(length * angle.cos(), length * angle.sin(), 0.0)
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn length_2d(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the x-y projection in radians, in `(-pi, pi]`.
    pub fn angle_2d(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance(&self, other: &Position) -> f64 {
        (*self - *other).length()
    }

    pub fn distance_2d(&self, other: &Position) -> f64 {
        (*self - *other).length_2d()
    }

    pub fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }

    pub fn as_xy(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Position {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Position {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
