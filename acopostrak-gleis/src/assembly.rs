//! Baugruppen aus mehreren Tracks mit durchgehender Nummerierung.

use std::ops::Add;

use serde::Serialize;

use crate::{
    piece::Piece,
    track::{Track, TrackInfo},
};

/// Beschreibung einer Baugruppe mit allen enthaltenen Tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyInfo {
    /// Der Name der Baugruppe.
    pub name: String,
    /// Summe der Track-Längen \[mm\].
    pub length: u64,
    /// Die Tracks in Reihenfolge.
    pub track: Vec<TrackInfo>,
}

/// Eine benannte Folge von Tracks.
///
/// Folgen mehrere Tracks mit gleichem Präfix direkt aufeinander,
/// werden ihre Segmente durchgehend nummeriert.
/// Bei einem Wechsel des Präfix beginnt die Nummerierung beim Offset des neuen Tracks.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Der Name der Baugruppe.
    name: String,
    /// Die umnummerierten Kopien der Tracks.
    tracks: Vec<Track>,
}

impl Assembly {
    /// Standard-Name einer Baugruppe.
    pub const DEFAULT_NAME: &'static str = "gAssembly_1";

    /// Erzeuge eine Baugruppe mit dem Standard-Namen.
    pub fn new(tracks: impl IntoIterator<Item = Track>) -> Self {
        Assembly::with_name(tracks, Assembly::DEFAULT_NAME)
    }

    /// Erzeuge eine Baugruppe mit dem gewünschten Namen.
    pub fn with_name(tracks: impl IntoIterator<Item = Track>, name: impl Into<String>) -> Self {
        Assembly { name: name.into(), tracks: nummeriere(tracks) }
    }

    /// Der Name der Baugruppe.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Die Tracks in Reihenfolge.
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Gesamtlänge und die Beschreibung aller Tracks.
    #[must_use]
    pub fn info(&self) -> AssemblyInfo {
        let track: Vec<_> = self.tracks.iter().map(Track::info).collect();
        let length = track.iter().map(|info| info.length).sum();
        AssemblyInfo { name: self.name.clone(), length, track }
    }

    /// Eine Baugruppe mit `other` als zusätzlichem Track am Ende.
    ///
    /// Die Tracks einer anderen Baugruppe werden einzeln angehängt.
    pub fn concatenate<'t>(&self, other: impl Into<Piece<'t>>) -> Assembly {
        let tracks = self.tracks.iter().cloned().chain(other.into().to_tracks());
        Assembly::with_name(tracks, self.name.clone())
    }
}

/// Nummeriere die Tracks durchgehend, solange sich der Präfix nicht ändert.
fn nummeriere(tracks: impl IntoIterator<Item = Track>) -> Vec<Track> {
    let mut vorheriger: Option<(String, usize)> = None;
    tracks
        .into_iter()
        .map(|track| {
            let name_offset = match &vorheriger {
                Some((präfix, nächster)) if präfix == track.name_prefix() => *nächster,
                _ => track.name_offset(),
            };
            vorheriger = Some((track.name_prefix().to_owned(), name_offset + track.len()));
            track.umnummeriert(name_offset)
        })
        .collect()
}

impl<'t, T: Into<Piece<'t>>> Add<T> for &Assembly {
    type Output = Assembly;

    fn add(self, other: T) -> Assembly {
        self.concatenate(other)
    }
}
