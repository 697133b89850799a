// main.rs
//
// Minimal demo: synthesize the reference cam design and write its flat table
// and contour next to the working directory.

use std::fs;

use camrs::io::table::write_table;
use camrs::{CamProfile, DesignParameters, MotionExtrema, RotationSense, sample_uniform};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // r0 = 50 mm base circle, 20 mm lift, 100 rpm, no offset, CCW,
    // 90° rise / 60° far dwell / 90° return (leaves 120° near dwell).
    let params = DesignParameters::new(
        50.0,
        20.0,
        100.0,
        0.0,
        RotationSense::Ccw,
        90.0,
        60.0,
        90.0,
    )?;

    let samples = sample_uniform(&params, 1000)?;
    let profile = CamProfile::transform(&samples, &params)?;

    if let Some(extrema) = MotionExtrema::from_samples(&samples) {
        println!(
            "velocity: {:.2} .. {:.2} mm/s, acceleration: {:.2} .. {:.2} mm/s^2",
            extrema.min_velocity,
            extrema.max_velocity,
            extrema.min_acceleration,
            extrema.max_acceleration,
        );
    }

    fs::write("cam_table.csv", write_table(&samples, &profile)?)?;

    #[cfg(feature = "svg-io")]
    fs::write("cam_profile.svg", camrs::io::svg::write_svg(&profile)?)?;

    Ok(())
}
