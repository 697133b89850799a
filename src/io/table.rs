//! Flat six-column table export/import
//!
//! The canonical exchange format between the engine and any exporter: one row
//! per sample, `angle_deg, displacement, velocity, acceleration, x, y`, in
//! sample order. Values print with Rust's shortest round-tripping float
//! representation, so writing and re-reading a table reproduces the numbers
//! exactly.

use crate::float_types::Real;
use crate::io::IoError;
use crate::motion::MotionSample;
use crate::profile::CamProfile;
use nalgebra::Point2;

const HEADER: &str = "angle_deg,displacement_mm,velocity_mm_s,acceleration_mm_s2,x_mm,y_mm";

/// Serializes matched motion samples and contour points as comma-separated
/// rows under a fixed header.
///
/// The two sequences must be the same computation's outputs; a length
/// mismatch is refused.
pub fn write_table(samples: &[MotionSample], profile: &CamProfile) -> Result<String, IoError> {
    if samples.len() != profile.points.len() {
        return Err(IoError::MalformedInput(format!(
            "{} motion samples but {} profile points",
            samples.len(),
            profile.points.len()
        )));
    }
    let mut out = String::with_capacity((samples.len() + 1) * 64);
    out.push_str(HEADER);
    out.push('\n');
    for (sample, point) in samples.iter().zip(&profile.points) {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            sample.angle_deg,
            sample.displacement,
            sample.velocity,
            sample.acceleration,
            point.x,
            point.y,
        ));
    }
    Ok(out)
}

/// Parses a table produced by [`write_table`] back into the sample sequence
/// and contour it was written from.
pub fn read_table(data: &str) -> Result<(Vec<MotionSample>, CamProfile), IoError> {
    let mut lines = data.lines();
    match lines.next() {
        Some(header) if header.trim() == HEADER => {},
        Some(header) => {
            return Err(IoError::MalformedInput(format!("unexpected header: {header}")));
        },
        None => return Err(IoError::MalformedInput("empty table".into())),
    }

    let mut samples = Vec::new();
    let mut points = Vec::new();
    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 6 {
            return Err(IoError::MalformedInput(format!(
                "row {} has {} fields, expected 6",
                index + 1,
                fields.len()
            )));
        }
        let mut values: [Real; 6] = [0.0; 6];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field.trim().parse()?;
        }
        samples.push(MotionSample {
            angle_deg: values[0],
            displacement: values[1],
            velocity: values[2],
            acceleration: values[3],
        });
        points.push(Point2::new(values[4], values[5]));
    }
    Ok((samples, CamProfile { points }))
}
