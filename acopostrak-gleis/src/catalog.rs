//! Alle bekannten ACOPOStrak-Segmente mit ihren Eigenschaften.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use acopostrak_typen::{angle::Angle, vector::Vector};
use acopostrak_zeichnen::asset::StaticAssets;

use crate::TrackError;

/// Die unterstützten Segment-Typen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    /// Gerades Segment.
    Aa,
    /// Übergang von gerade zu gebogen.
    Ab,
    /// Übergang von gebogen zu gerade.
    Ba,
    /// Kreisbogen.
    Bb,
}

impl SegmentType {
    /// Der Typ-Code in Kleinbuchstaben.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            SegmentType::Aa => "aa",
            SegmentType::Ab => "ab",
            SegmentType::Ba => "ba",
            SegmentType::Bb => "bb",
        }
    }

    /// Der Katalog-Eintrag des Segment-Typs.
    #[must_use]
    pub fn entry(self) -> &'static CatalogEntry {
        match self {
            SegmentType::Aa => &AA,
            SegmentType::Ab => &AB,
            SegmentType::Ba => &BA,
            SegmentType::Bb => &BB,
        }
    }
}

impl Display for SegmentType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

impl FromStr for SegmentType {
    type Err = TrackError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<SegmentType>()
            .find(|segment_type| unicase::eq_ascii(segment_type.code(), code))
            .ok_or_else(|| TrackError::UnsupportedSegmentType(code.to_owned()))
    }
}

/// Geometrie eines Segments in seinem lokalen Koordinatensystem \[mm\].
///
/// Die Ecken beschreiben, wo das Segment an seinen Vorgänger bzw. Nachfolger anschließt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Obere Ecke der Eingangs-Kante.
    pub top_left: Vector,
    /// Untere Ecke der Eingangs-Kante.
    pub bottom_left: Vector,
    /// Obere Ecke der Ausgangs-Kante.
    pub top_right: Vector,
    /// Untere Ecke der Ausgangs-Kante.
    pub bottom_right: Vector,
    /// Breite der Grafik.
    pub width: f64,
    /// Höhe der Grafik.
    pub height: f64,
    /// Rotation, bevor das Segment gezeichnet wird.
    pub entry_rotation: Angle,
    /// Rotation, nachdem das Segment gezeichnet wurde.
    pub exit_rotation: Angle,
}

/// Eigenschaften eines Segment-Typs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    /// Der zugehörige Segment-Typ.
    pub segment_type: SegmentType,
    /// Die Länge des Segments \[mm\].
    pub length: u32,
    /// Die Typ-Bezeichnung von B&R.
    pub model_type: &'static str,
    /// Kurzbeschreibung.
    pub description: &'static str,
    /// Die Id der zugehörigen Grafik.
    pub svg_asset_id: &'static str,
    /// Geometrie für die Anordnung in einer Zeichnung.
    pub geometry: Geometry,
}

static AA: CatalogEntry = CatalogEntry {
    segment_type: SegmentType::Aa,
    length: 660,
    model_type: "8F1I01.AA66.xxxx-1",
    description: "ACOPOStrak straight segment",
    svg_asset_id: "segment_aa.svg",
    geometry: Geometry {
        top_left: Vector::new(0., 0.25),
        bottom_left: Vector::new(0., 10.74),
        top_right: Vector::new(66., 0.25),
        bottom_right: Vector::new(66., 10.74),
        width: 66.,
        height: 10.074,
        entry_rotation: Angle::degrees(0.),
        exit_rotation: Angle::degrees(0.),
    },
};

static AB: CatalogEntry = CatalogEntry {
    segment_type: SegmentType::Ab,
    length: 450,
    model_type: "8F1I01.AB2B.xxxx-1",
    description: "ACOPOStrak curve segment A",
    svg_asset_id: "segment_ab.svg",
    geometry: Geometry {
        top_left: Vector::new(0., 0.25),
        bottom_left: Vector::new(0., 9.98),
        top_right: Vector::new(44.6, 3.56),
        bottom_right: Vector::new(40.89, 12.523),
        width: 44.6,
        height: 12.523,
        entry_rotation: Angle::degrees(0.),
        exit_rotation: Angle::degrees(22.5),
    },
};

static BA: CatalogEntry = CatalogEntry {
    segment_type: SegmentType::Ba,
    length: 450,
    model_type: "8F1I01.BA2B.xxxx-1",
    description: "ACOPOStrak curve segment B",
    svg_asset_id: "segment_ba.svg",
    geometry: Geometry {
        top_left: Vector::new(0., 3.56),
        bottom_left: Vector::new(3.71, 12.523),
        top_right: Vector::new(44.6, 0.25),
        bottom_right: Vector::new(44.6, 9.98),
        width: 44.6,
        height: 12.523,
        entry_rotation: Angle::degrees(22.5),
        exit_rotation: Angle::degrees(0.),
    },
};

static BB: CatalogEntry = CatalogEntry {
    segment_type: SegmentType::Bb,
    length: 240,
    model_type: "8F1I01.BB4B.xxxx-1",
    description: "ACOPOStrak circular arc segment",
    svg_asset_id: "segment_bb.svg",
    geometry: Geometry {
        top_left: Vector::new(0., 2.59),
        bottom_left: Vector::new(4.35, 13.081),
        top_right: Vector::new(23.2, 2.59),
        bottom_right: Vector::new(18.85, 13.081),
        width: 23.2,
        height: 13.081,
        entry_rotation: Angle::degrees(22.5),
        exit_rotation: Angle::degrees(22.5),
    },
};

/// Die Grafiken aller Segment-Typen, fest in das Programm eingebettet.
pub static BUILTIN_ASSETS: StaticAssets = StaticAssets::new(&[
    ("segment_aa.svg", include_str!("../img/segment_aa.svg")),
    ("segment_ab.svg", include_str!("../img/segment_ab.svg")),
    ("segment_ba.svg", include_str!("../img/segment_ba.svg")),
    ("segment_bb.svg", include_str!("../img/segment_bb.svg")),
]);

/// Finde den Katalog-Eintrag zu einem Typ-Code, ohne Beachtung der Groß-/Kleinschreibung.
///
/// ## Errors
///
/// [`TrackError::UnsupportedSegmentType`] für unbekannte Codes.
pub fn lookup(code: &str) -> Result<&'static CatalogEntry, TrackError> {
    code.parse::<SegmentType>().map(SegmentType::entry)
}
