mod support;

use camrs::io::table::{read_table, write_table};
use camrs::{CamProfile, DesignParameters, RotationSense, sample_uniform};

use crate::support::reference_design;

#[test]
fn table_round_trips_exactly() {
    // Rust prints floats with the shortest representation that parses back to
    // the same bits, so the round trip is exact, not merely close.
    let p = DesignParameters { offset: 12.5, rotation: RotationSense::Cw, ..reference_design() };
    let samples = sample_uniform(&p, 250).unwrap();
    let profile = CamProfile::transform(&samples, &p).unwrap();

    let table = write_table(&samples, &profile).unwrap();
    let (parsed_samples, parsed_profile) = read_table(&table).unwrap();

    assert_eq!(parsed_samples, samples);
    assert_eq!(parsed_profile, profile);
}

#[test]
fn table_rows_follow_sample_order() {
    let p = reference_design();
    let samples = sample_uniform(&p, 5).unwrap();
    let profile = CamProfile::transform(&samples, &p).unwrap();
    let table = write_table(&samples, &profile).unwrap();

    let mut lines = table.lines();
    assert_eq!(
        lines.next(),
        Some("angle_deg,displacement_mm,velocity_mm_s,acceleration_mm_s2,x_mm,y_mm")
    );
    let first_fields: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(first_fields.len(), 6);
    assert_eq!(first_fields[0], "0");
    // 4 header-less rows remain for the other samples.
    assert_eq!(lines.count(), 4);
}

#[test]
fn empty_sequence_writes_a_bare_header() {
    let table = write_table(&[], &CamProfile { points: vec![] }).unwrap();
    assert_eq!(table.trim(), "angle_deg,displacement_mm,velocity_mm_s,acceleration_mm_s2,x_mm,y_mm");
    let (samples, profile) = read_table(&table).unwrap();
    assert!(samples.is_empty());
    assert!(profile.points.is_empty());
}
