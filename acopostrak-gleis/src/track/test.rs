//! Tests für Tracks und Track-Ausdrücke.

use std::{fs, process};

use acopostrak_test_util::{expect_eq, expect_true, init_test_logging, ExpectTrue, Expectation};
use acopostrak_typen::angle::Angle;

use crate::{
    catalog::SegmentType,
    segment::Segment,
    track::Track,
    TrackError,
};

fn geraden(anzahl: usize) -> Track {
    Segment::from(SegmentType::Aa).repeat(anzahl).expect("anzahl > 0")
}

fn typen(track: &Track) -> Vec<SegmentType> {
    track.segment_types().collect()
}

#[test]
fn leerer_track() {
    init_test_logging();

    let ergebnis = Track::from_segments(Vec::<&Segment>::new());
    assert!(
        matches!(ergebnis, Err(TrackError::InvalidArgument(_))),
        "Tracks ohne Segmente sind nicht erlaubt: {ergebnis:?}"
    );
}

#[test]
fn fortlaufende_namen() -> Result<(), Expectation> {
    init_test_logging();

    expect_eq(
        geraden(3).names(),
        vec![String::from("gSeg_001"), String::from("gSeg_002"), String::from("gSeg_003")],
    )?;
    let aa = Segment::from(SegmentType::Aa);
    let track = Track::new([&aa, &aa, &aa], "gX_", 998).map_err(|_fehler| ExpectTrue)?;
    expect_eq(
        track.names(),
        vec![String::from("gX_998"), String::from("gX_999"), String::from("gX_1000")],
    )?;
    Ok(())
}

#[test]
fn info_mit_namen() -> Result<(), Expectation> {
    init_test_logging();

    let track: Track = "aa + ab + bb + ba".parse().map_err(|_fehler| ExpectTrue)?;
    let info = track.info();
    expect_eq(info.length, 660 + 450 + 240 + 450)?;
    let namen: Vec<_> = info.segments.iter().filter_map(|segment| segment.name.clone()).collect();
    expect_eq(namen, track.names())?;
    // Namen werden nur abgeleitet, nicht gespeichert.
    expect_eq(track.info(), info)?;
    Ok(())
}

#[test]
fn anhängen() -> Result<(), Expectation> {
    init_test_logging();

    let aa = Segment::from(SegmentType::Aa);
    let links = Track::new([&aa, &aa], "gL_", 7).map_err(|_fehler| ExpectTrue)?;
    let bb = Segment::from(SegmentType::Bb);
    let rechts = Track::new([&bb], "gR_", 40).map_err(|_fehler| ExpectTrue)?;

    let mit_segment = &links + &bb;
    expect_eq(typen(&mit_segment), vec![SegmentType::Aa, SegmentType::Aa, SegmentType::Bb])?;
    expect_eq(
        mit_segment.names(),
        vec![String::from("gSeg_001"), String::from("gSeg_002"), String::from("gSeg_003")],
    )?;

    let mit_track = links.concatenate(&rechts);
    expect_eq(mit_track.len(), links.len() + rechts.len())?;
    expect_eq(mit_track.name_prefix().to_owned(), String::from(Track::DEFAULT_PREFIX))?;
    expect_eq(mit_track.name_offset(), Track::DEFAULT_OFFSET)?;
    // Die Operanden behalten ihre Namen.
    expect_eq(links.names(), vec![String::from("gL_007"), String::from("gL_008")])?;
    Ok(())
}

#[test]
fn wiederholen() -> Result<(), Expectation> {
    init_test_logging();

    let track: Track = "ab + bb + ba + aa".parse().map_err(|_fehler| ExpectTrue)?;
    let wiederholt = track.repeat(3).map_err(|_fehler| ExpectTrue)?;
    expect_eq(wiederholt.len(), 12)?;
    expect_eq(typen(&wiederholt)[4..8].to_vec(), typen(&track))?;
    expect_true(matches!(track.repeat(0), Err(TrackError::InvalidArgument(_))))?;

    let aa = Segment::from(SegmentType::Aa);
    let benannt = Track::new([&aa, &aa], "x_", 5).map_err(|_fehler| ExpectTrue)?;
    expect_eq(
        benannt.repeat(2).map_err(|_fehler| ExpectTrue)?.names(),
        vec![
            String::from("gSeg_001"),
            String::from("gSeg_002"),
            String::from("gSeg_003"),
            String::from("gSeg_004"),
        ],
    )?;
    Ok(())
}

#[test]
fn ausdruck_parsen() -> Result<(), Expectation> {
    init_test_logging();

    let track: Track = "aa*3 + ab + BB*3 + ba".parse().map_err(|_fehler| ExpectTrue)?;
    expect_eq(track.len(), 8)?;
    expect_eq(track.to_string(), String::from("aa*3 + ab + bb*3 + ba"))?;
    let vorne: Track = " 2 * ab+ba ".parse().map_err(|_fehler| ExpectTrue)?;
    expect_eq(typen(&vorne), vec![SegmentType::Ab, SegmentType::Ab, SegmentType::Ba])?;
    Ok(())
}

#[test]
fn ungültige_ausdrücke() {
    init_test_logging();

    for ausdruck in ["", "aa + ", "aa*0", "aa*x", "+ bb", "3*"] {
        let ergebnis = ausdruck.parse::<Track>();
        assert!(
            matches!(ergebnis, Err(TrackError::InvalidArgument(_))),
            "'{ausdruck}' ist ungültig: {ergebnis:?}"
        );
    }
    let ergebnis = "aa + cc".parse::<Track>();
    assert!(
        matches!(ergebnis, Err(TrackError::UnsupportedSegmentType(ref code)) if code == "cc"),
        "cc ist kein Segment-Typ: {ergebnis:?}"
    );
}

#[test]
fn zeichnen_und_speichern() -> Result<(), Expectation> {
    init_test_logging();

    let mut track: Track = "ab + bb*3 + ba".parse().map_err(|_fehler| ExpectTrue)?;
    let pfad = std::env::temp_dir().join(format!("acopostrak-track-{}.svg", process::id()));
    expect_true(matches!(track.save(&pfad), Err(TrackError::NoRenderedFigure)))?;

    let figure = track.render(Angle(45.)).map_err(|_fehler| ExpectTrue)?;
    expect_eq(figure.placements().len(), 5)?;
    let svg = figure.to_svg();
    expect_eq(track.render(Angle(45.)).map_err(|_fehler| ExpectTrue)?.to_svg(), svg.clone())?;

    track.save(&pfad).map_err(|_fehler| ExpectTrue)?;
    let gespeichert = fs::read_to_string(&pfad).map_err(|_fehler| ExpectTrue)?;
    let _ = fs::remove_file(&pfad);
    expect_eq(gespeichert, svg)?;
    expect_true(track.clone().figure().is_none())?;
    Ok(())
}
