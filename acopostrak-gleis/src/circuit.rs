//! Geschlossene, rechteckige Schleifen aus Geraden und 90°- bzw. 180°-Kurven.

use std::{
    fmt::{self, Display, Formatter},
    iter,
    ops::{Add, Deref, DerefMut},
    str::FromStr,
};

use nonempty::NonEmpty;

use crate::{assembly::Assembly, catalog::SegmentType, piece::Piece, track::Track, TrackError};

/// Eine Gerade.
pub const STRAIGHT: &[SegmentType] = &[SegmentType::Aa];

/// Eine 45°-Kurve.
pub const TURN_45: &[SegmentType] = &[SegmentType::Ab, SegmentType::Ba];

/// Eine 90°-Kurve.
pub const TURN_90: &[SegmentType] = &[SegmentType::Ab, SegmentType::Bb, SegmentType::Ba];

/// Eine 135°-Kurve.
pub const TURN_135: &[SegmentType] =
    &[SegmentType::Ab, SegmentType::Bb, SegmentType::Bb, SegmentType::Ba];

/// Eine 180°-Kurve.
pub const TURN_180: &[SegmentType] =
    &[SegmentType::Ab, SegmentType::Bb, SegmentType::Bb, SegmentType::Bb, SegmentType::Ba];

/// Länge und Breite einer Schleife, gemessen in Segmenten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopShape {
    /// Anzahl Segmente einer Längsseite, inklusive der Kurven.
    pub length: usize,
    /// Anzahl Segmente einer Querseite, inklusive der Kurven.
    pub width: usize,
}

impl LoopShape {
    /// Prüfe, ob sich eine Schleife mit diesen Maßen bauen lässt.
    ///
    /// ## Errors
    ///
    /// [`TrackError::InvalidArgument`] falls `length < 2` oder `width < 1`.
    pub fn validate(self) -> Result<Self, TrackError> {
        if self.length < 2 {
            Err(TrackError::InvalidArgument(format!(
                "Die Länge einer Schleife muss mindestens 2 sein, war {}.",
                self.length
            )))
        } else if self.width < 1 {
            Err(TrackError::InvalidArgument(format!(
                "Die Breite einer Schleife muss mindestens 1 sein, war {}.",
                self.width
            )))
        } else {
            Ok(self)
        }
    }
}

impl Display for LoopShape {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}x{}", self.length, self.width)
    }
}

/// Maße im Format `LxB`, z.B. `4x2`.
impl FromStr for LoopShape {
    type Err = TrackError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let ungültig = || {
            TrackError::InvalidArgument(format!(
                "'{text}' ist keine Schleifen-Größe, erwartet wird LxB, z.B. 4x2."
            ))
        };
        let (länge, breite) = text
            .trim()
            .split_once(|zeichen: char| matches!(zeichen, 'x' | 'X' | '×'))
            .ok_or_else(ungültig)?;
        let length = länge.trim().parse().map_err(|_fehler| ungültig())?;
        let width = breite.trim().parse().map_err(|_fehler| ungültig())?;
        LoopShape { length, width }.validate()
    }
}

/// Alle Segmente einer Schleife, beginnend mit der ersten Kurve.
///
/// Die Maße werden nicht geprüft, zu kleine Seiten haben keine Geraden.
#[must_use]
pub fn segment_types(length: usize, width: usize) -> Vec<SegmentType> {
    let geraden = |anzahl: usize| iter::repeat(STRAIGHT).take(anzahl.saturating_sub(2)).flatten();
    if width == 1 {
        [TURN_180, TURN_180]
            .into_iter()
            .flat_map(|kurve| kurve.iter().chain(geraden(length)))
            .copied()
            .collect()
    } else {
        [width, length, width, length]
            .into_iter()
            .flat_map(|seite| TURN_90.iter().chain(geraden(seite)))
            .copied()
            .collect()
    }
}

/// Eine geschlossene Schleife, die sich wie ihr [`Track`] verwenden lässt.
///
/// Anhängen an eine Schleife erzeugt immer eine [`Assembly`].
#[derive(Debug, Clone)]
pub struct Loop {
    /// Länge und Breite.
    shape: LoopShape,
    /// Die Segmente der Schleife.
    track: Track,
}

impl Loop {
    /// Erzeuge eine Schleife mit dem Standard-Namensschema.
    ///
    /// ## Errors
    ///
    /// [`TrackError::InvalidArgument`] falls `length < 2` oder `width < 1`.
    pub fn new(length: usize, width: usize) -> Result<Self, TrackError> {
        Loop::with_naming(length, width, Track::DEFAULT_PREFIX, Track::DEFAULT_OFFSET)
    }

    /// Erzeuge eine Schleife, deren Segmente mit `name_prefix` benannt und ab `name_offset` nummeriert sind.
    ///
    /// ## Errors
    ///
    /// [`TrackError::InvalidArgument`] falls `length < 2` oder `width < 1`.
    pub fn with_naming(
        length: usize,
        width: usize,
        name_prefix: impl Into<String>,
        name_offset: usize,
    ) -> Result<Self, TrackError> {
        let shape = LoopShape { length, width }.validate()?;
        let segment_types = NonEmpty::from_vec(segment_types(length, width)).ok_or_else(|| {
            TrackError::InvalidArgument(format!("Schleife {shape} ohne Segmente."))
        })?;
        Ok(Loop { shape, track: Track::from_types(segment_types, name_prefix, name_offset) })
    }

    /// Länge und Breite.
    #[must_use]
    pub fn shape(&self) -> LoopShape {
        self.shape
    }

    /// Eine Baugruppe aus der Schleife und `other`.
    pub fn concatenate<'t>(&self, other: impl Into<Piece<'t>>) -> Assembly {
        Assembly::new(iter::once(self.track.clone()).chain(other.into().to_tracks()))
    }

    /// Eine Baugruppe aus `anzahl` Kopien der Schleife.
    ///
    /// ## Errors
    ///
    /// [`TrackError::InvalidArgument`] falls `anzahl == 0`.
    pub fn repeat(&self, anzahl: usize) -> Result<Assembly, TrackError> {
        if anzahl == 0 {
            return Err(TrackError::InvalidArgument(String::from(
                "Eine Schleife muss mindestens einmal wiederholt werden.",
            )));
        }
        Ok(Assembly::new(iter::repeat_with(|| self.track.clone()).take(anzahl)))
    }
}

impl Deref for Loop {
    type Target = Track;

    fn deref(&self) -> &Track {
        &self.track
    }
}

impl DerefMut for Loop {
    fn deref_mut(&mut self) -> &mut Track {
        &mut self.track
    }
}

impl From<Loop> for Track {
    fn from(schleife: Loop) -> Self {
        schleife.track
    }
}

impl<'t, T: Into<Piece<'t>>> Add<T> for &Loop {
    type Output = Assembly;

    fn add(self, other: T) -> Assembly {
        self.concatenate(other)
    }
}

#[cfg(test)]
mod test;
