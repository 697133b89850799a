//! SVG export of the cam contour

use crate::float_types::Real;
use crate::io::IoError;
use crate::profile::CamProfile;
use svg::Document;
use svg::node::element::Path;
use svg::node::element::path::Data;

/// Renders the contour as a single closed SVG path, viewBox fitted to the
/// profile with a 5% margin. Millimeters map to SVG user units; the y axis is
/// flipped so +y in cam coordinates points up on screen.
pub fn write_svg(profile: &CamProfile) -> Result<String, IoError> {
    let first = profile
        .points
        .first()
        .ok_or_else(|| IoError::MalformedInput("empty profile".into()))?;

    let mut min_x = first.x;
    let mut min_y = -first.y;
    let mut max_x = first.x;
    let mut max_y = -first.y;
    let mut data = Data::new().move_to((first.x, -first.y));
    for point in &profile.points[1..] {
        let (x, y) = (point.x, -point.y);
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
        data = data.line_to((x, y));
    }
    data = data.close();

    let margin = 0.05 * (max_x - min_x).max(max_y - min_y).max(1.0);
    let path = Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", stroke_width(max_x - min_x, max_y - min_y))
        .set("d", data);
    let document = Document::new()
        .set(
            "viewBox",
            (
                min_x - margin,
                min_y - margin,
                (max_x - min_x) + 2.0 * margin,
                (max_y - min_y) + 2.0 * margin,
            ),
        )
        .add(path);
    Ok(document.to_string())
}

fn stroke_width(width: Real, height: Real) -> Real {
    0.005 * width.max(height).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn empty_profile_is_refused() {
        let profile = CamProfile { points: vec![] };
        assert!(write_svg(&profile).is_err());
    }

    #[test]
    fn output_contains_one_closed_path() {
        let profile = CamProfile {
            points: vec![
                Point2::new(0.0, 50.0),
                Point2::new(50.0, 0.0),
                Point2::new(0.0, -50.0),
                Point2::new(-50.0, 0.0),
            ],
        };
        let out = write_svg(&profile).unwrap();
        assert_eq!(out.matches("<path").count(), 1);
        assert!(out.contains("viewBox"));
        assert!(out.contains('Z') || out.contains('z'));
    }
}
