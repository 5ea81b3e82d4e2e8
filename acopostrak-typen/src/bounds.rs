//! Mitlaufende Extremwerte aller gezeichneten Punkte. Hauptsächlich zur Bestimmung der Canvas-Größe.

use crate::vector::Vector;

/// Die kleinsten und größten Koordinaten aller bisher [aufgenommenen](Bounds::erweitere) Punkte.
///
/// Der Ursprung `(0, 0)` ist immer enthalten.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    /// Ecke mit den minimalen Koordinaten, nie positiv.
    pub min: Vector,
    /// Ecke mit den maximalen Koordinaten, nie negativ.
    pub max: Vector,
}

impl Bounds {
    /// Nur der Ursprung ist enthalten.
    #[must_use]
    pub const fn ursprung() -> Self {
        Bounds { min: Vector::ZERO, max: Vector::ZERO }
    }

    /// Erweitere die Grenzen, so dass `punkt` enthalten ist.
    pub fn erweitere(&mut self, punkt: Vector) {
        self.min.x = self.min.x.min(punkt.x);
        self.min.y = self.min.y.min(punkt.y);
        self.max.x = self.max.x.max(punkt.x);
        self.max.y = self.max.y.max(punkt.y);
    }

    /// Größe des eingeschlossenen Rechtecks.
    #[must_use]
    pub fn größe(&self) -> Vector {
        self.max.abs() + self.min.abs()
    }

    /// Verschiebung, nach der alle enthaltenen Punkte nicht-negative Koordinaten haben.
    #[must_use]
    pub fn verschiebung(&self) -> Vector {
        self.min.abs()
    }
}
