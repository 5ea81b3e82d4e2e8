//! ACOPOStrak-Segmente, daraus zusammengesetzte Tracks, Schleifen und Baugruppen,
//! sowie deren Anordnung in einer Zeichnung.

use thiserror::Error;

use acopostrak_zeichnen::RenderError;

pub mod assembly;
pub mod catalog;
pub mod circuit;
pub mod layout;
pub mod piece;
pub mod segment;
pub mod shuttle;
pub mod track;

/// Fehler beim Erstellen, Zeichnen oder Speichern von Segmenten, Tracks oder Baugruppen.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Ein Argument liegt außerhalb des erlaubten Bereichs.
    #[error("Ungültiges Argument: {0}")]
    InvalidArgument(String),
    /// Der Segment-Typ ist nicht im Katalog enthalten.
    #[error(
        "Segment-Typ '{0}' wird nicht unterstützt. Unterstützt werden \"AA\", \"AB\", \"BA\" und \"BB\"."
    )]
    UnsupportedSegmentType(String),
    /// Es soll gespeichert werden, bevor etwas gezeichnet wurde.
    #[error("Es wurde noch nichts gezeichnet!")]
    NoRenderedFigure,
    /// Ein benötigter Shuttle-Parameter fehlt.
    #[error("Shuttle-Parameter müssen einen Wert für \"{0}\" enthalten!")]
    MissingParameter(&'static str),
    /// Fehler beim Zeichnen oder Speichern.
    #[error(transparent)]
    Render(#[from] RenderError),
}
