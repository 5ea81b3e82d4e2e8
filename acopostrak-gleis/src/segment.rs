//! Ein einzelnes ACOPOStrak-Segment.

use std::{ops::Add, path::Path};

use nonempty::NonEmpty;
use serde::Serialize;

use acopostrak_typen::angle::Angle;
use acopostrak_zeichnen::{asset::AssetSource, figure::Figure};

use crate::{
    catalog::{CatalogEntry, SegmentType, BUILTIN_ASSETS},
    layout,
    piece::Piece,
    track::Track,
    TrackError,
};

/// Beschreibung eines Segments, z.B. für eine Stückliste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentInfo {
    /// Der Name innerhalb eines Tracks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Die Länge \[mm\].
    pub length: u32,
    /// Die Typ-Bezeichnung von B&R.
    #[serde(rename = "type")]
    pub model_type: &'static str,
    /// Kurzbeschreibung.
    pub description: &'static str,
}

impl From<&CatalogEntry> for SegmentInfo {
    fn from(entry: &CatalogEntry) -> Self {
        SegmentInfo {
            name: None,
            length: entry.length,
            model_type: entry.model_type,
            description: entry.description,
        }
    }
}

/// Ein Segment aus dem Katalog, zusammen mit seiner zuletzt erstellten Zeichnung.
#[derive(Debug)]
pub struct Segment {
    /// Der Segment-Typ.
    segment_type: SegmentType,
    /// Die zuletzt erstellte Zeichnung.
    figure: Option<Figure>,
}

/// Eine Kopie hat keine Zeichnung, diese gehört weiterhin nur dem Original.
impl Clone for Segment {
    fn clone(&self) -> Self {
        Segment::from(self.segment_type)
    }
}

impl From<SegmentType> for Segment {
    fn from(segment_type: SegmentType) -> Self {
        Segment { segment_type, figure: None }
    }
}

impl Segment {
    /// Erzeuge ein Segment zum Typ-Code, ohne Beachtung der Groß-/Kleinschreibung.
    ///
    /// ## Errors
    ///
    /// [`TrackError::UnsupportedSegmentType`] für unbekannte Codes.
    pub fn new(code: &str) -> Result<Self, TrackError> {
        Ok(Segment::from(code.parse::<SegmentType>()?))
    }

    /// Der Segment-Typ.
    #[must_use]
    pub fn segment_type(&self) -> SegmentType {
        self.segment_type
    }

    /// Der Katalog-Eintrag des Segment-Typs.
    #[must_use]
    pub fn entry(&self) -> &'static CatalogEntry {
        self.segment_type.entry()
    }

    /// Länge, Typ-Bezeichnung und Beschreibung des Segments.
    #[must_use]
    pub fn info(&self) -> SegmentInfo {
        SegmentInfo::from(self.entry())
    }

    /// Hänge `other` an das Segment an.
    ///
    /// Bei einem Track bleibt dessen Namensschema erhalten, sonst wird das Standard-Schema verwendet.
    /// Die Segmente einer Baugruppe werden zu einem einzigen Track zusammengefasst.
    pub fn concatenate<'t>(&self, other: impl Into<Piece<'t>>) -> Track {
        match other.into() {
            Piece::Segment(segment) => Track::from_types(
                NonEmpty { head: self.segment_type, tail: vec![segment.segment_type] },
                Track::DEFAULT_PREFIX,
                Track::DEFAULT_OFFSET,
            ),
            Piece::Track(track) => voranstellen(self.segment_type, track),
            Piece::Loop(schleife) => voranstellen(self.segment_type, schleife),
            piece @ Piece::Assembly(_) => Track::from_types(
                NonEmpty { head: self.segment_type, tail: piece.segment_types() },
                Track::DEFAULT_PREFIX,
                Track::DEFAULT_OFFSET,
            ),
        }
    }

    /// Ein Track aus `anzahl` Kopien des Segments.
    ///
    /// ## Errors
    ///
    /// [`TrackError::InvalidArgument`] falls `anzahl == 0`.
    pub fn repeat(&self, anzahl: usize) -> Result<Track, TrackError> {
        if anzahl == 0 {
            return Err(TrackError::InvalidArgument(String::from(
                "Ein Segment muss mindestens einmal wiederholt werden.",
            )));
        }
        Ok(Track::from_types(
            NonEmpty { head: self.segment_type, tail: vec![self.segment_type; anzahl - 1] },
            Track::DEFAULT_PREFIX,
            Track::DEFAULT_OFFSET,
        ))
    }

    /// Zeichne das Segment mit den eingebetteten Grafiken, um `winkel` rotiert.
    ///
    /// ## Errors
    ///
    /// Fehler beim Laden der Grafik.
    pub fn render(&mut self, winkel: Angle) -> Result<&Figure, TrackError> {
        self.render_with(winkel, &BUILTIN_ASSETS)
    }

    /// Zeichne das Segment mit Grafiken aus `assets`, um `winkel` rotiert.
    ///
    /// ## Errors
    ///
    /// Fehler beim Laden der Grafik.
    pub fn render_with<A: AssetSource + ?Sized>(
        &mut self,
        winkel: Angle,
        assets: &A,
    ) -> Result<&Figure, TrackError> {
        let figure = layout::single(self.segment_type, winkel).compose(assets)?;
        Ok(self.figure.insert(figure))
    }

    /// Die zuletzt erstellte Zeichnung.
    #[must_use]
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    /// Speichere die zuletzt erstellte Zeichnung als SVG-Datei.
    ///
    /// ## Errors
    ///
    /// [`TrackError::NoRenderedFigure`] falls noch nichts gezeichnet wurde, sonst Fehler beim Schreiben.
    pub fn save(&self, pfad: impl AsRef<Path>) -> Result<(), TrackError> {
        let figure = self.figure.as_ref().ok_or(TrackError::NoRenderedFigure)?;
        Ok(figure.save(pfad)?)
    }
}

/// Ein Track mit `segment_type` vor den Segmenten von `track`, mit dessen Namensschema.
fn voranstellen(segment_type: SegmentType, track: &Track) -> Track {
    Track::from_types(
        NonEmpty { head: segment_type, tail: track.segment_types().collect() },
        track.name_prefix(),
        track.name_offset(),
    )
}

impl<'t, T: Into<Piece<'t>>> Add<T> for &Segment {
    type Output = Track;

    fn add(self, other: T) -> Track {
        self.concatenate(other)
    }
}
