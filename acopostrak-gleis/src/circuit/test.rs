//! Tests für Schleifen.

use acopostrak_test_util::{expect_eq, expect_true, init_test_logging, ExpectTrue, Expectation};
use acopostrak_typen::angle::Angle;

use crate::{
    catalog::SegmentType,
    circuit::{segment_types, Loop, LoopShape, STRAIGHT, TURN_180, TURN_90},
    segment::Segment,
    TrackError,
};

#[test]
fn anzahl_segmente() -> Result<(), Expectation> {
    init_test_logging();

    expect_eq(Loop::new(2, 1).map_err(|_fehler| ExpectTrue)?.len(), 10)?;
    for (länge, breite) in [(4, 1), (4, 2), (3, 3), (7, 5)] {
        let schleife = Loop::new(länge, breite).map_err(|_fehler| ExpectTrue)?;
        let erwartet = if breite == 1 { 2 * länge + 6 } else { 2 * länge + 2 * breite + 4 };
        expect_eq(schleife.len(), erwartet)?;
        expect_eq(schleife.shape(), LoopShape { length: länge, width: breite })?;
    }
    Ok(())
}

#[test]
fn aufbau() -> Result<(), Expectation> {
    init_test_logging();

    let schmal: Vec<_> =
        [TURN_180, STRAIGHT, TURN_180, STRAIGHT].into_iter().flatten().copied().collect();
    expect_eq(segment_types(3, 1), schmal)?;
    let rechteck: Vec<_> = [TURN_90, TURN_90, STRAIGHT, STRAIGHT, TURN_90, TURN_90, STRAIGHT, STRAIGHT]
        .into_iter()
        .flatten()
        .copied()
        .collect();
    expect_eq(segment_types(4, 2), rechteck)?;
    Ok(())
}

#[test]
fn geschlossen() -> Result<(), Expectation> {
    init_test_logging();

    for (länge, breite) in [(2, 1), (5, 1), (4, 2), (3, 6)] {
        let rotation = segment_types(länge, breite).into_iter().fold(Angle::ZERO, |summe, typ| {
            let geometry = typ.entry().geometry;
            summe + geometry.entry_rotation + geometry.exit_rotation
        });
        expect_eq(rotation, Angle::FULL)?;
    }
    Ok(())
}

#[test]
fn ungültige_größe() {
    init_test_logging();

    for (länge, breite) in [(1, 1), (0, 3), (4, 0)] {
        let ergebnis = Loop::new(länge, breite);
        assert!(
            matches!(ergebnis, Err(TrackError::InvalidArgument(_))),
            "{länge}x{breite} ist keine gültige Schleife: {ergebnis:?}"
        );
    }
}

#[test]
fn größe_parsen() -> Result<(), Expectation> {
    init_test_logging();

    expect_eq("4x2".parse::<LoopShape>().ok(), Some(LoopShape { length: 4, width: 2 }))?;
    expect_eq(" 5 X 1 ".parse::<LoopShape>().ok(), Some(LoopShape { length: 5, width: 1 }))?;
    expect_eq(LoopShape { length: 3, width: 3 }.to_string(), String::from("3x3"))?;
    for text in ["4", "1x1", "ax2", "4x-1", "x"] {
        expect_true(matches!(text.parse::<LoopShape>(), Err(TrackError::InvalidArgument(_))))?;
    }
    Ok(())
}

#[test]
fn eigene_namen() -> Result<(), Expectation> {
    init_test_logging();

    let schleife = Loop::with_naming(2, 1, "gLoop_", 20).map_err(|_fehler| ExpectTrue)?;
    let namen = schleife.names();
    expect_eq(namen.first().cloned(), Some(String::from("gLoop_020")))?;
    expect_eq(namen.last().cloned(), Some(String::from("gLoop_029")))?;
    Ok(())
}

#[test]
fn anhängen_ergibt_baugruppe() -> Result<(), Expectation> {
    init_test_logging();

    let schleife = Loop::new(2, 1).map_err(|_fehler| ExpectTrue)?;
    let segment = Segment::from(SegmentType::Aa);
    let baugruppe = &schleife + &segment;
    expect_eq(baugruppe.tracks().len(), 2)?;
    expect_eq(baugruppe.tracks()[1].names(), vec![String::from("gSeg_011")])?;

    let wiederholt = schleife.repeat(3).map_err(|_fehler| ExpectTrue)?;
    let offsets: Vec<_> = wiederholt.tracks().iter().map(|track| track.name_offset()).collect();
    expect_eq(offsets, vec![1, 11, 21])?;
    expect_true(matches!(schleife.repeat(0), Err(TrackError::InvalidArgument(_))))?;
    Ok(())
}
