//! Eine Folge von Segmenten mit fortlaufenden Namen.

use std::{
    fmt::{self, Display, Formatter},
    iter,
    ops::Add,
    path::Path,
    str::FromStr,
};

use itertools::Itertools;
use log::debug;
use nonempty::NonEmpty;
use serde::Serialize;

use acopostrak_typen::angle::Angle;
use acopostrak_zeichnen::{asset::AssetSource, figure::Figure};

use crate::{
    catalog::{SegmentType, BUILTIN_ASSETS},
    layout,
    piece::Piece,
    segment::{Segment, SegmentInfo},
    TrackError,
};

/// Beschreibung eines Tracks mit allen benannten Segmenten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackInfo {
    /// Summe der Segment-Längen \[mm\].
    pub length: u64,
    /// Die Segmente in Reihenfolge.
    pub segments: Vec<SegmentInfo>,
}

/// Eine nicht-leere Folge von Segmenten.
///
/// Das Segment an Position `i` heißt `name_prefix` gefolgt von `i + name_offset`,
/// mit mindestens drei Ziffern.
#[derive(Debug)]
pub struct Track {
    /// Die Segmente in Reihenfolge.
    segments: NonEmpty<Segment>,
    /// Präfix der Segment-Namen.
    name_prefix: String,
    /// Nummer des ersten Segments.
    name_offset: usize,
    /// Die zuletzt erstellte Zeichnung.
    figure: Option<Figure>,
}

/// Eine Kopie hat keine Zeichnung, diese gehört weiterhin nur dem Original.
impl Clone for Track {
    fn clone(&self) -> Self {
        Track {
            segments: self.segments.clone(),
            name_prefix: self.name_prefix.clone(),
            name_offset: self.name_offset,
            figure: None,
        }
    }
}

impl Track {
    /// Standard-Präfix der Segment-Namen.
    pub const DEFAULT_PREFIX: &'static str = "gSeg_";

    /// Standard-Nummer des ersten Segments.
    pub const DEFAULT_OFFSET: usize = 1;

    /// Erzeuge einen Track aus Kopien der `segments`.
    ///
    /// ## Errors
    ///
    /// [`TrackError::InvalidArgument`] falls `segments` leer ist.
    pub fn new<'t>(
        segments: impl IntoIterator<Item = &'t Segment>,
        name_prefix: impl Into<String>,
        name_offset: usize,
    ) -> Result<Self, TrackError> {
        let mut segment_types = segments.into_iter().map(Segment::segment_type);
        let head = segment_types.next().ok_or_else(|| {
            TrackError::InvalidArgument(String::from("Ein Track braucht mindestens ein Segment."))
        })?;
        Ok(Track::from_types(
            NonEmpty { head, tail: segment_types.collect() },
            name_prefix,
            name_offset,
        ))
    }

    /// Erzeuge einen Track aus Kopien der `segments`, mit dem Standard-Namensschema.
    ///
    /// ## Errors
    ///
    /// [`TrackError::InvalidArgument`] falls `segments` leer ist.
    pub fn from_segments<'t>(
        segments: impl IntoIterator<Item = &'t Segment>,
    ) -> Result<Self, TrackError> {
        Track::new(segments, Track::DEFAULT_PREFIX, Track::DEFAULT_OFFSET)
    }

    /// Erzeuge einen Track direkt aus Segment-Typen.
    pub(crate) fn from_types(
        segment_types: NonEmpty<SegmentType>,
        name_prefix: impl Into<String>,
        name_offset: usize,
    ) -> Self {
        Track {
            segments: segment_types.map(Segment::from),
            name_prefix: name_prefix.into(),
            name_offset,
            figure: None,
        }
    }

    /// Eine Kopie, deren erstes Segment die Nummer `name_offset` hat.
    pub(crate) fn umnummeriert(&self, name_offset: usize) -> Self {
        Track { name_offset, ..self.clone() }
    }

    /// Die Segmente in Reihenfolge.
    #[must_use]
    pub fn segments(&self) -> &NonEmpty<Segment> {
        &self.segments
    }

    /// Die Segment-Typen in Reihenfolge.
    pub fn segment_types(&self) -> impl Iterator<Item = SegmentType> + '_ {
        self.segments.iter().map(Segment::segment_type)
    }

    /// Die Anzahl der Segmente, immer mindestens 1.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Präfix der Segment-Namen.
    #[must_use]
    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    /// Nummer des ersten Segments.
    #[must_use]
    pub fn name_offset(&self) -> usize {
        self.name_offset
    }

    /// Die Namen aller Segmente in Reihenfolge.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        (self.name_offset..)
            .take(self.len())
            .map(|nummer| format!("{}{nummer:03}", self.name_prefix))
            .collect()
    }

    /// Gesamtlänge und die benannten Segmente.
    #[must_use]
    pub fn info(&self) -> TrackInfo {
        let segments: Vec<_> = self
            .segments
            .iter()
            .zip(self.names())
            .map(|(segment, name)| SegmentInfo { name: Some(name), ..segment.info() })
            .collect();
        let length = segments.iter().map(|segment| u64::from(segment.length)).sum();
        TrackInfo { length, segments }
    }

    /// Hänge `other` an den Track an.
    ///
    /// Das Ergebnis ist ein neuer Track mit dem Standard-Namensschema,
    /// die Namensschemata beider Operanden werden verworfen.
    pub fn concatenate<'t>(&self, other: impl Into<Piece<'t>>) -> Track {
        let NonEmpty { head, tail } = &self.segments;
        let tail = tail
            .iter()
            .map(Segment::segment_type)
            .chain(other.into().segment_types())
            .collect();
        Track::from_types(
            NonEmpty { head: head.segment_type(), tail },
            Track::DEFAULT_PREFIX,
            Track::DEFAULT_OFFSET,
        )
    }

    /// Ein Track aus `anzahl` Kopien aller Segmente, mit dem Standard-Namensschema.
    ///
    /// ## Errors
    ///
    /// [`TrackError::InvalidArgument`] falls `anzahl == 0`.
    pub fn repeat(&self, anzahl: usize) -> Result<Track, TrackError> {
        if anzahl == 0 {
            return Err(TrackError::InvalidArgument(String::from(
                "Ein Track muss mindestens einmal wiederholt werden.",
            )));
        }
        let segment_types: Vec<_> = self.segment_types().collect();
        let mut wiederholt = iter::repeat(segment_types).take(anzahl).flatten();
        let head = wiederholt.next().unwrap_or(self.segments.head.segment_type());
        Ok(Track::from_types(
            NonEmpty { head, tail: wiederholt.collect() },
            Track::DEFAULT_PREFIX,
            Track::DEFAULT_OFFSET,
        ))
    }

    /// Zeichne den Track mit den eingebetteten Grafiken, beginnend mit Rotation `winkel`.
    ///
    /// ## Errors
    ///
    /// Fehler beim Laden einer Grafik.
    pub fn render(&mut self, winkel: Angle) -> Result<&Figure, TrackError> {
        self.render_with(winkel, &BUILTIN_ASSETS)
    }

    /// Zeichne den Track mit Grafiken aus `assets`, beginnend mit Rotation `winkel`.
    ///
    /// ## Errors
    ///
    /// Fehler beim Laden einer Grafik.
    pub fn render_with<A: AssetSource + ?Sized>(
        &mut self,
        winkel: Angle,
        assets: &A,
    ) -> Result<&Figure, TrackError> {
        let layout = layout::chain(self.segment_types(), winkel);
        debug!("{} Segmente auf {:?}", layout.placements.len(), layout.size);
        let figure = layout.compose(assets)?;
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

impl<'t, T: Into<Piece<'t>>> Add<T> for &Track {
    type Output = Track;

    fn add(self, other: T) -> Track {
        self.concatenate(other)
    }
}

/// Aufeinanderfolgende gleiche Segmente werden zusammengefasst, z.B. `aa*3 + ab + bb`.
impl Display for Track {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let ausdruck = self
            .segment_types()
            .dedup_with_count()
            .map(|(anzahl, segment_type)| {
                if anzahl == 1 {
                    segment_type.to_string()
                } else {
                    format!("{segment_type}*{anzahl}")
                }
            })
            .join(" + ");
        formatter.write_str(&ausdruck)
    }
}

/// Parse eine Anzahl in einem Track-Ausdruck.
fn parse_anzahl(text: &str) -> Result<usize, TrackError> {
    match text.parse() {
        Ok(0) => Err(TrackError::InvalidArgument(String::from(
            "Ein Segment muss mindestens einmal wiederholt werden.",
        ))),
        Ok(anzahl) => Ok(anzahl),
        Err(fehler) => {
            Err(TrackError::InvalidArgument(format!("Ungültige Anzahl '{text}': {fehler}")))
        },
    }
}

/// Ein Track-Ausdruck wie `aa*3 + ab + bb*3 + ba`.
///
/// Terme werden durch `+` getrennt, jeder Term ist `code`, `code*n` oder `n*code`.
/// Der Track verwendet das Standard-Namensschema.
impl FromStr for Track {
    type Err = TrackError;

    fn from_str(ausdruck: &str) -> Result<Self, Self::Err> {
        let mut segment_types = Vec::new();
        for term in ausdruck.split('+').map(str::trim) {
            if term.is_empty() {
                return Err(TrackError::InvalidArgument(format!(
                    "Leerer Term im Track-Ausdruck '{ausdruck}'."
                )));
            }
            let (code, anzahl) = match term.split_once('*') {
                Some((links, rechts)) => {
                    let (links, rechts) = (links.trim(), rechts.trim());
                    if links.starts_with(|zeichen: char| zeichen.is_ascii_digit()) {
                        (rechts, parse_anzahl(links)?)
                    } else {
                        (links, parse_anzahl(rechts)?)
                    }
                },
                None => (term, 1),
            };
            if code.is_empty() {
                return Err(TrackError::InvalidArgument(format!(
                    "Term '{term}' ohne Segment-Typ."
                )));
            }
            let segment_type = code.parse::<SegmentType>()?;
            segment_types.extend(iter::repeat(segment_type).take(anzahl));
        }
        let segment_types = NonEmpty::from_vec(segment_types).ok_or_else(|| {
            TrackError::InvalidArgument(format!("Leerer Track-Ausdruck '{ausdruck}'."))
        })?;
        Ok(Track::from_types(segment_types, Track::DEFAULT_PREFIX, Track::DEFAULT_OFFSET))
    }
}

#[cfg(test)]
mod test;
