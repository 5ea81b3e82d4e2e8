//! Winkel im Gradmaß.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use kommandozeilen_argumente::{Beschreibung, ParseArgument, Vergleich};
use serde::{Deserialize, Serialize};

use crate::rounding::round_to;

/// Winkel \[`Gradmaß`\].
///
/// Winkel wachsen im Uhrzeigersinn, da y-Koordinaten nach unten wachsen.
///
/// Die [`PartialEq`]- und [`PartialOrd`]-Instanzen sind abgeleitet und normalisieren die Winkel NICHT,
/// bevor sie verglichen werden.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle(pub f64);

impl Angle {
    /// 0°
    pub const ZERO: Angle = Angle(0.);

    /// 90°, eine viertel Umdrehung.
    pub const RIGHT: Angle = Angle(90.);

    /// 360°, eine ganze Umdrehung.
    pub const FULL: Angle = Angle(360.);

    /// Konstruktor
    #[must_use]
    pub const fn degrees(grad: f64) -> Self {
        Angle(grad)
    }

    /// Der Wert in Grad.
    #[must_use]
    pub const fn as_degrees(&self) -> f64 {
        self.0
    }

    /// Normalisiert in den äquivalenten Bereich zu [0°,360°).
    #[must_use]
    pub fn normalized(self) -> Self {
        Angle(self.0.rem_euclid(Angle::FULL.0))
    }

    /// Kosinus
    #[must_use]
    pub fn cos(&self) -> f64 {
        self.0.to_radians().cos()
    }

    /// Sinus
    #[must_use]
    pub fn sin(&self) -> f64 {
        self.0.to_radians().sin()
    }

    /// Auf `stellen` Nachkommastellen gerundeter Winkel.
    #[must_use]
    pub fn rounded(self, stellen: i32) -> Self {
        Angle(round_to(self.0, stellen))
    }
}

impl AddAssign<Angle> for Angle {
    fn add_assign(&mut self, Angle(other): Angle) {
        self.0 += other;
    }
}

impl Add<Angle> for Angle {
    type Output = Self;

    fn add(mut self, other: Angle) -> Angle {
        self += other;
        self
    }
}

impl SubAssign<Angle> for Angle {
    fn sub_assign(&mut self, Angle(other): Angle) {
        self.0 -= other;
    }
}

impl Sub<Angle> for Angle {
    type Output = Self;

    fn sub(mut self, other: Angle) -> Angle {
        self -= other;
        self
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Angle(-self.0)
    }
}

impl ParseArgument for Angle {
    fn argumente<'t>(
        beschreibung: Beschreibung<'t, Self>,
        invertiere_präfix: impl Into<Vergleich<'t>>,
        invertiere_infix: impl Into<Vergleich<'t>>,
        wert_infix: impl Into<Vergleich<'t>>,
        meta_var: &'t str,
    ) -> kommandozeilen_argumente::Argumente<'t, Self, String> {
        kommandozeilen_argumente::Argumente::konvertiere(
            Angle,
            f64::argumente(
                beschreibung.konvertiere(|winkel| winkel.0),
                invertiere_präfix,
                invertiere_infix,
                wert_infix,
                meta_var,
            ),
        )
    }

    fn standard() -> Option<Self> {
        Some(Angle::ZERO)
    }
}
