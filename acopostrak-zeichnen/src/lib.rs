//! Zusammensetzen von Vektor-Grafiken zu einer SVG-Zeichnung.
//!
//! Jede Grafik wird über eine Id aus einer [`AssetSource`](asset::AssetSource) geladen,
//! anschließend verschoben, rotiert und in einen Canvas fester Größe eingefügt.

use std::{io, path::PathBuf};

use thiserror::Error;

pub mod asset;
pub mod figure;

/// Fehler beim Laden von Grafiken oder Speichern einer Zeichnung.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Die [`AssetSource`](asset::AssetSource) kennt keine Grafik mit der gewünschten Id.
    #[error("Grafik '{0}' nicht gefunden!")]
    AssetNotFound(String),
    /// Die Grafik ist kein gültiges XML-Dokument.
    #[error("Grafik '{id}' ist kein gültiges XML: {fehler}")]
    InvalidXml {
        /// Die Id der Grafik.
        id: String,
        /// Der Fehler beim Parsen.
        #[source]
        fehler: roxmltree::Error,
    },
    /// Das Wurzel-Element der Grafik ist nicht `<svg>`.
    #[error("Grafik '{id}' hat <{wurzel}> statt <svg> als Wurzel-Element!")]
    NoSvgRoot {
        /// Die Id der Grafik.
        id: String,
        /// Der Name des gefundenen Wurzel-Elements.
        wurzel: String,
    },
    /// Ein Fehler beim Lesen oder Schreiben einer Datei.
    #[error("Ein-/Ausgabe-Fehler für '{}': {fehler}", .pfad.display())]
    Io {
        /// Der Pfad der betroffenen Datei.
        pfad: PathBuf,
        /// Der aufgetretene Fehler.
        #[source]
        fehler: io::Error,
    },
}
