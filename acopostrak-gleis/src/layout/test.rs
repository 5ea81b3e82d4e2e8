//! Tests für die Anordnung von Segmenten.

use acopostrak_test_util::{expect_eq, expect_true, init_test_logging, Expectation};
use acopostrak_typen::{angle::Angle, vector::Vector};

use crate::{
    catalog::SegmentType,
    circuit::{self, TURN_180, TURN_90},
    layout::{chain, single},
};

/// Vergleich mit Toleranz für Werte, die nicht exakt darstellbar sind.
fn ungefähr(a: Vector, b: Vector) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn einzelnes_segment_ohne_rotation() -> Result<(), Expectation> {
    init_test_logging();

    let layout = single(SegmentType::Aa, Angle::ZERO);
    expect_eq(layout.size, Vector::new(66., 10.074))?;
    expect_eq(layout.placements.len(), 1)?;
    let placement = &layout.placements[0];
    expect_eq(placement.asset.clone(), String::from("segment_aa.svg"))?;
    expect_eq(placement.position, Vector::ZERO)?;
    expect_eq(placement.rotation, Angle::ZERO)?;
    Ok(())
}

#[test]
fn einzelnes_segment_zentriert() -> Result<(), Expectation> {
    init_test_logging();

    let layout = single(SegmentType::Aa, Angle::RIGHT);
    expect_eq(layout.size, Vector::new(10.074, 66.))?;
    expect_eq(layout.placements[0].position, Vector::new(10.074, 0.))?;
    expect_eq(layout.placements[0].rotation, Angle::RIGHT)?;
    // Winkel werden normalisiert.
    expect_eq(single(SegmentType::Aa, Angle(450.)), layout)?;
    Ok(())
}

#[test]
fn geraden_hintereinander() -> Result<(), Expectation> {
    init_test_logging();

    let layout = chain([SegmentType::Aa, SegmentType::Aa], Angle::ZERO);
    expect_eq(layout.size, Vector::new(132.5, 10.074))?;
    let positionen: Vec<_> = layout.placements.iter().map(|placement| placement.position).collect();
    expect_eq(positionen, vec![Vector::ZERO, Vector::new(66.5, 0.)])?;
    Ok(())
}

#[test]
fn gedrehte_gerade() -> Result<(), Expectation> {
    init_test_logging();

    let layout = chain([SegmentType::Aa], Angle(180.));
    expect_true(ungefähr(layout.size, Vector::new(66., 10.074)))?;
    expect_eq(layout.placements[0].position, Vector::new(66., 10.074))?;
    expect_eq(layout.placements[0].rotation, Angle(180.))?;
    Ok(())
}

#[test]
fn kurve_summiert_rotation() -> Result<(), Expectation> {
    init_test_logging();

    let layout = chain(TURN_180.iter().copied(), Angle::ZERO);
    let rotationen: Vec<_> =
        layout.placements.iter().map(|placement| placement.rotation.as_degrees()).collect();
    expect_eq(rotationen, vec![0., 45., 90., 135., 180.])?;
    Ok(())
}

#[test]
fn kurven_mit_startwinkel() -> Result<(), Expectation> {
    init_test_logging();

    let segmente = [
        SegmentType::Ab,
        SegmentType::Bb,
        SegmentType::Ba,
        SegmentType::Aa,
        SegmentType::Aa,
        SegmentType::Ab,
        SegmentType::Bb,
        SegmentType::Bb,
        SegmentType::Bb,
        SegmentType::Ba,
    ];
    let layout = chain(segmente, Angle(30.));
    expect_eq(layout.placements.len(), 10)?;
    // Die Canvas-Größe wird nicht gerundet.
    expect_true(
        (layout.size.x - 167.317).abs() < 1e-3 && (layout.size.y - 250.362).abs() < 1e-3,
    )?;
    let erwartet = [(0, 120.823, 0.033, 30.), (2, 167.317, 50.339, 120.), (9, 0., 211.467, 300.)];
    for (index, x, y, grad) in erwartet {
        let placement = &layout.placements[index];
        expect_true((placement.position.x - x).abs() < 1e-6)?;
        expect_true((placement.position.y - y).abs() < 1e-6)?;
        expect_true((placement.rotation.as_degrees() - grad).abs() < 1e-6)?;
    }
    Ok(())
}

#[test]
fn leere_anordnung() -> Result<(), Expectation> {
    init_test_logging();

    let layout = chain([], Angle(30.));
    expect_eq(layout.size, Vector::ZERO)?;
    expect_true(layout.placements.is_empty())?;
    Ok(())
}

#[test]
fn nie_negativ() {
    init_test_logging();

    for (länge, breite) in [(2, 1), (4, 1), (4, 2), (3, 3)] {
        let segmente = circuit::segment_types(länge, breite);
        for grad in [0., 22.5, 30., 45., 90., 135., 180., 270., -30., 725.] {
            let layout = chain(segmente.iter().copied(), Angle(grad));
            assert!(
                layout.size.x >= 0. && layout.size.y >= 0.,
                "negative Canvas-Größe für {länge}x{breite} bei {grad}°: {:?}",
                layout.size
            );
            for placement in &layout.placements {
                assert!(
                    placement.position.x >= 0. && placement.position.y >= 0.,
                    "negative Position für {länge}x{breite} bei {grad}°: {placement:?}"
                );
            }
        }
    }
}

#[test]
fn deterministisch() -> Result<(), Expectation> {
    init_test_logging();

    let segmente: Vec<_> = TURN_90.iter().chain(TURN_90).copied().collect();
    expect_eq(chain(segmente.clone(), Angle(12.5)), chain(segmente, Angle(372.5)))?;
    Ok(())
}
