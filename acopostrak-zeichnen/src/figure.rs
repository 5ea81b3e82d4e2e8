//! Eine aus mehreren platzierten Grafiken zusammengesetzte Zeichnung.

use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    fs,
    path::Path,
};

use log::info;

use acopostrak_typen::{angle::Angle, vector::Vector};

use crate::{
    asset::{Asset, AssetSource},
    RenderError,
};

/// Wo und mit welcher Rotation eine Grafik gezeichnet wird.
///
/// Die Grafik wird zuerst um ihren Ursprung rotiert und anschließend verschoben.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Die Id der Grafik.
    pub asset: String,
    /// Die Position des Grafik-Ursprungs auf dem Canvas.
    pub position: Vector,
    /// Rotation im Uhrzeigersinn.
    pub rotation: Angle,
}

/// Eine Zeichnung fester Größe aus platzierten Grafiken.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Breite und Höhe des Canvas in mm.
    größe: Vector,
    /// Die Grafiken in Zeichen-Reihenfolge.
    placements: Vec<Placement>,
    /// Alle verwendeten Grafiken, jede nur einmal geladen.
    assets: BTreeMap<String, Asset>,
}

impl Figure {
    /// Lade alle benötigten Grafiken aus `assets` und erzeuge die Zeichnung.
    ///
    /// ## Errors
    ///
    /// Fehler beim Laden einer Grafik.
    pub fn compose<A: AssetSource + ?Sized>(
        größe: Vector,
        placements: Vec<Placement>,
        assets: &A,
    ) -> Result<Self, RenderError> {
        let mut geladen = BTreeMap::new();
        for placement in &placements {
            if !geladen.contains_key(&placement.asset) {
                let asset = assets.resolve(&placement.asset)?;
                let _ = geladen.insert(placement.asset.clone(), asset);
            }
        }
        Ok(Figure { größe, placements, assets: geladen })
    }

    /// Breite und Höhe des Canvas in mm.
    #[must_use]
    pub fn size(&self) -> Vector {
        self.größe
    }

    /// Die Grafiken in Zeichen-Reihenfolge.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Die Zeichnung als SVG-Dokument.
    #[must_use]
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Speichere die Zeichnung als SVG-Datei.
    ///
    /// ## Errors
    ///
    /// Fehler beim Schreiben der Datei.
    pub fn save(&self, pfad: impl AsRef<Path>) -> Result<(), RenderError> {
        let pfad = pfad.as_ref();
        fs::write(pfad, self.to_svg())
            .map_err(|fehler| RenderError::Io { pfad: pfad.to_path_buf(), fehler })?;
        info!("Zeichnung gespeichert: {}", pfad.display());
        Ok(())
    }
}

impl Display for Figure {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let Vector { x: breite, y: hoehe } = self.größe;
        writeln!(formatter, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
        writeln!(
            formatter,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{breite}mm" height="{hoehe}mm" viewBox="0 0 {breite} {hoehe}">"#
        )?;
        for Placement { asset, position, rotation } in &self.placements {
            // Alle Grafiken wurden in `compose` geladen.
            let Some(asset) = self.assets.get(asset) else { continue };
            writeln!(
                formatter,
                r#"  <g transform="translate({}, {}) rotate({})">"#,
                position.x,
                position.y,
                rotation.as_degrees()
            )?;
            writeln!(formatter, "    {}", asset.fragment())?;
            writeln!(formatter, "  </g>")?;
        }
        writeln!(formatter, "</svg>")
    }
}
