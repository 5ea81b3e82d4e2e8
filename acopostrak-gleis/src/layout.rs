//! Anordnung von Segmenten auf einem Canvas.
//!
//! Segmente werden der Reihe nach an einen Stift angelegt, der ihre Ausgangs-Kante
//! als Startpunkt für das nächste Segment übernimmt.

use log::{debug, trace};

use acopostrak_typen::{
    angle::Angle,
    bounds::Bounds,
    rounding::DECIMALS,
    vector::Vector,
};
use acopostrak_zeichnen::{
    asset::AssetSource,
    figure::{Figure, Placement},
    RenderError,
};

use crate::catalog::{Geometry, SegmentType};

/// Abstand zwischen zwei aufeinanderfolgenden Segmenten \[mm\].
pub const GAP: f64 = 0.5;

/// Position und Rotation aller Segmente, zusammen mit der benötigten Canvas-Größe.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Breite und Höhe des Canvas.
    pub size: Vector,
    /// Die Segmente in Zeichen-Reihenfolge.
    pub placements: Vec<Placement>,
}

impl Layout {
    /// Lade die Grafiken aller Segmente und erzeuge die Zeichnung.
    ///
    /// ## Errors
    ///
    /// Fehler beim Laden einer Grafik.
    pub fn compose<A: AssetSource + ?Sized>(self, assets: &A) -> Result<Figure, RenderError> {
        Figure::compose(self.size, self.placements, assets)
    }
}

/// Die Ausdehnung eines rotierten Rechtecks, getrennt nach positiven und negativen Anteilen.
fn gedrehte_ausdehnung(breite: f64, höhe: f64, rotation: Angle) -> (Vector, Vector) {
    let mut positiv = Vector::ZERO;
    let mut negativ = Vector::ZERO;
    for kante in [Vector::polar(breite, rotation), Vector::polar(höhe, rotation + Angle::RIGHT)] {
        if kante.x > 0. {
            positiv.x += kante.x;
        } else {
            negativ.x += kante.x;
        }
        if kante.y > 0. {
            positiv.y += kante.y;
        } else {
            negativ.y += kante.y;
        }
    }
    (positiv, negativ)
}

/// Ordne die Segmente hintereinander an, beginnend mit der Rotation `winkel`.
///
/// Alle Positionen sind so verschoben, dass sie nicht negativ sind,
/// und auf [`DECIMALS`] Nachkommastellen gerundet.
pub fn chain(segments: impl IntoIterator<Item = SegmentType>, winkel: Angle) -> Layout {
    let mut segments = segments.into_iter().peekable();
    let mut stift =
        segments.peek().map_or(Vector::ZERO, |segment_type| segment_type.entry().geometry.top_left);
    let mut rotation = winkel.normalized();
    let mut bounds = Bounds::ursprung();
    let mut platziert = Vec::new();
    for segment_type in segments {
        let entry = segment_type.entry();
        let Geometry { top_left, top_right, width, height, entry_rotation, exit_rotation, .. } =
            entry.geometry;
        rotation += entry_rotation;
        // Obere Eingangs-Ecke auf den Stift legen.
        stift.x += top_left.y * rotation.sin();
        stift.y -= top_left.y * rotation.cos();
        let (positiv, negativ) = gedrehte_ausdehnung(width, height, rotation);
        bounds.erweitere(stift + positiv);
        bounds.erweitere(stift + negativ);
        debug!("{segment_type} bei ({}, {}), {}°", stift.x, stift.y, rotation.as_degrees());
        platziert.push((entry.svg_asset_id, stift, rotation));
        let senkrecht = rotation + Angle::RIGHT;
        stift += Vector::polar(top_right.x + GAP, rotation) + Vector::polar(top_right.y, senkrecht);
        trace!("Stift bei ({}, {})", stift.x, stift.y);
        rotation += exit_rotation;
    }
    let verschiebung = bounds.verschiebung();
    let placements = platziert
        .into_iter()
        .map(|(asset, position, gedreht)| Placement {
            asset: asset.to_owned(),
            position: (position + verschiebung).rounded(DECIMALS),
            rotation: gedreht.rounded(DECIMALS),
        })
        .collect();
    Layout { size: bounds.größe(), placements }
}

/// Zentriere ein einzelnes, um `winkel` rotiertes Segment auf einem passenden Canvas.
pub fn single(segment_type: SegmentType, winkel: Angle) -> Layout {
    let entry = segment_type.entry();
    let rotation = winkel.normalized();
    let breite = Vector::polar(entry.geometry.width, rotation);
    let höhe = Vector::polar(entry.geometry.height, rotation + Angle::RIGHT);
    let größe = (breite.abs() + höhe.abs()).rounded(DECIMALS);
    let position = (größe - (breite + höhe).rounded(DECIMALS)) * 0.5;
    debug!("{segment_type} bei ({}, {}), {}°", position.x, position.y, rotation.as_degrees());
    Layout {
        size: größe,
        placements: vec![Placement {
            asset: entry.svg_asset_id.to_owned(),
            position,
            rotation: rotation.rounded(DECIMALS),
        }],
    }
}

#[cfg(test)]
mod test;
