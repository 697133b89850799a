//! Profile transformer: motion samples to the physical cam contour
//!
//! **Mathematical Foundation: Envelope of an Offset Translating Follower**
//!
//! With base radius r₀, follower displacement s(θ), and offset e, the contact
//! point traced in cam-fixed coordinates is:
//! ```text
//! x(θ) = (r₀ + s)·sin(θ) + k·(−e·cos(θ))
//! y(θ) = (r₀ + s)·cos(θ) + k·( e·sin(θ))
//! ```
//! where k = +1 for counter-clockwise rotation and k = −1 for clockwise. The
//! sign flip keeps the cam convex toward the side the follower actually runs
//! on. For e = 0 both branches collapse to the plain radial construction
//! `(r₀+s)·(sin θ, cos θ)` and the contour radius at every angle is exactly
//! r₀ + s(θ).

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::motion::MotionSample;
use crate::params::DesignParameters;
use geo::{LineString, Polygon as GeoPolygon};
use nalgebra::Point2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The closed Cartesian contour of a physical cam, one point per motion
/// sample, in sample order.
///
/// Angle 0 and angle 360 are the same physical point; the contour is closed by
/// the conversion helpers, not by duplicating points here.
#[derive(Debug, Clone, PartialEq)]
pub struct CamProfile {
    pub points: Vec<Point2<Real>>,
}

fn point_at(sample: &MotionSample, params: &DesignParameters) -> Point2<Real> {
    let theta = sample.angle_deg.to_radians();
    let radial = params.base_radius + sample.displacement;
    let k = params.rotation.offset_sign();
    let e = params.offset;
    Point2::new(
        radial * theta.sin() - k * e * theta.cos(),
        radial * theta.cos() + k * e * theta.sin(),
    )
}

impl CamProfile {
    /// Maps a motion sample sequence to contour points, same length and order.
    ///
    /// Validates the full parameter set first (base radius, offset bounds, and
    /// the rest) and refuses to compute a contour for an invalid set.
    pub fn transform(
        samples: &[MotionSample],
        params: &DesignParameters,
    ) -> Result<Self, ValidationError> {
        params.validate()?;

        #[cfg(feature = "parallel")]
        let points = samples
            .par_iter()
            .map(|sample| point_at(sample, params))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let points = samples
            .iter()
            .map(|sample| point_at(sample, params))
            .collect();

        Ok(CamProfile { points })
    }

    /// The contour as a closed `geo` ring (first coordinate repeated at the
    /// end). Empty profiles produce an empty ring.
    pub fn to_line_string(&self) -> LineString<Real> {
        let mut coords: Vec<(Real, Real)> =
            self.points.iter().map(|p| (p.x, p.y)).collect();
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        LineString::from(coords)
    }

    /// The contour as a `geo` polygon with no holes.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        GeoPolygon::new(self.to_line_string(), vec![])
    }
}
