//! Vektoren über [`f64`] für einen 2-dimensionalen Vektorraum.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::{angle::Angle, rounding::round_to};

/// Vektoren über [`f64`] für einen 2-dimensionalen Vektorraum.
///
/// x-Koordinaten wachsen nach rechts, y-Koordinaten wachsen nach unten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// x-Koordinate des Vektors.
    pub x: f64,
    /// y-Koordinate des Vektors.
    pub y: f64,
}

impl Vector {
    /// Nullvektor.
    pub const ZERO: Vector = Vector { x: 0., y: 0. };

    /// Konstruktor
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// Erzeuge einen Vektor aus seinen Polarkoordinaten.
    ///
    /// Winkel wachsen im Uhrzeigersinn.
    #[must_use]
    pub fn polar(radius: f64, winkel: Angle) -> Self {
        Vector { x: radius * winkel.cos(), y: radius * winkel.sin() }
    }

    /// Vektor mit den Beträgen der Koordinaten.
    #[must_use]
    pub fn abs(self) -> Self {
        Vector { x: self.x.abs(), y: self.y.abs() }
    }

    /// Auf `stellen` Nachkommastellen gerundete Koordinaten.
    #[must_use]
    pub fn rounded(self, stellen: i32) -> Self {
        Vector { x: round_to(self.x, stellen), y: round_to(self.y, stellen) }
    }
}

impl AddAssign<Vector> for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Add<Vector> for Vector {
    type Output = Self;

    fn add(mut self, rhs: Vector) -> Self::Output {
        self += rhs;
        self
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector { x: -self.x, y: -self.y }
    }
}

impl SubAssign<Vector> for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self += -rhs;
    }
}

impl Sub<Vector> for Vector {
    type Output = Self;

    fn sub(mut self, rhs: Vector) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, faktor: f64) -> Self::Output {
        Vector { x: faktor * self.x, y: faktor * self.y }
    }
}
