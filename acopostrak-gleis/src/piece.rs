//! Alles, was an ein Segment, einen Track, eine Schleife oder eine Baugruppe angehängt werden kann.

use nonempty::NonEmpty;

use crate::{
    assembly::Assembly, catalog::SegmentType, circuit::Loop, segment::Segment, track::Track,
};

/// Ein Operand beim Zusammensetzen.
#[derive(Debug, Clone, Copy)]
pub enum Piece<'t> {
    /// Ein einzelnes Segment.
    Segment(&'t Segment),
    /// Ein Track.
    Track(&'t Track),
    /// Eine geschlossene Schleife.
    Loop(&'t Loop),
    /// Eine Baugruppe.
    Assembly(&'t Assembly),
}

impl<'t> From<&'t Segment> for Piece<'t> {
    fn from(segment: &'t Segment) -> Self {
        Piece::Segment(segment)
    }
}

impl<'t> From<&'t Track> for Piece<'t> {
    fn from(track: &'t Track) -> Self {
        Piece::Track(track)
    }
}

impl<'t> From<&'t Loop> for Piece<'t> {
    fn from(schleife: &'t Loop) -> Self {
        Piece::Loop(schleife)
    }
}

impl<'t> From<&'t Assembly> for Piece<'t> {
    fn from(assembly: &'t Assembly) -> Self {
        Piece::Assembly(assembly)
    }
}

impl Piece<'_> {
    /// Die Segment-Typen in Reihenfolge, bei einer Baugruppe über alle Tracks hinweg.
    #[must_use]
    pub fn segment_types(&self) -> Vec<SegmentType> {
        match self {
            Piece::Segment(segment) => vec![segment.segment_type()],
            Piece::Track(track) => track.segment_types().collect(),
            Piece::Loop(schleife) => schleife.segment_types().collect(),
            Piece::Assembly(assembly) => {
                assembly.tracks().iter().flat_map(Track::segment_types).collect()
            },
        }
    }

    /// Neue Tracks mit den Segmenten.
    ///
    /// Tracks behalten ihr Namensschema, ein einzelnes Segment bekommt das Standard-Schema.
    /// Eine Baugruppe liefert alle ihre Tracks, eine leere Baugruppe keinen.
    #[must_use]
    pub fn to_tracks(&self) -> Vec<Track> {
        match self {
            Piece::Segment(segment) => vec![Track::from_types(
                NonEmpty::new(segment.segment_type()),
                Track::DEFAULT_PREFIX,
                Track::DEFAULT_OFFSET,
            )],
            Piece::Track(track) => vec![Track::clone(track)],
            Piece::Loop(schleife) => vec![Track::clone(schleife)],
            Piece::Assembly(assembly) => assembly.tracks().to_vec(),
        }
    }
}
