//! Motion-law synthesizer for the cycloidal (sinusoidal-acceleration) law
//!
//! **Mathematical Foundation: Cycloidal Motion Law**
//!
//! Over a motion phase of angular width β (radians), with total lift h and
//! constant cam angular velocity ω, the rise follows:
//! ```text
//! s(φ) = h·(φ/β − sin(2πφ/β)/(2π))
//! v(φ) = (h·ω/β)·(1 − cos(2πφ/β))
//! a(φ) = (2π·h·ω²/β²)·sin(2πφ/β)
//! ```
//! and the return is its mirror. The law guarantees `v = 0` at every phase
//! boundary, so displacement and velocity are continuous over the whole
//! revolution. Acceleration is finite everywhere but jumps in value where a
//! motion phase meets a dwell; that step is a property of the law, not a
//! defect of the cam.

use crate::errors::ValidationError;
use crate::float_types::{Real, TAU};
use crate::params::DesignParameters;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One of the four sequential angular intervals of a cam revolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Follower moving away from the cam axis
    Rise,
    /// Follower held at full lift
    FarDwell,
    /// Follower moving back to the base circle
    Return,
    /// Follower held on the base circle
    NearDwell,
}

/// Follower kinematics at a single cam angle.
///
/// Units: degrees, mm, mm/s, mm/s².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub angle_deg: Real,
    pub displacement: Real,
    pub velocity: Real,
    pub acceleration: Real,
}

/// Extreme velocity and acceleration over a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionExtrema {
    pub max_velocity: Real,
    pub min_velocity: Real,
    pub max_acceleration: Real,
    pub min_acceleration: Real,
}

impl MotionExtrema {
    /// Scans a sample sequence for its velocity/acceleration extremes.
    /// Returns `None` for an empty sequence.
    pub fn from_samples(samples: &[MotionSample]) -> Option<Self> {
        let first = samples.first()?;
        let mut extrema = MotionExtrema {
            max_velocity: first.velocity,
            min_velocity: first.velocity,
            max_acceleration: first.acceleration,
            min_acceleration: first.acceleration,
        };
        for sample in &samples[1..] {
            extrema.max_velocity = extrema.max_velocity.max(sample.velocity);
            extrema.min_velocity = extrema.min_velocity.min(sample.velocity);
            extrema.max_acceleration = extrema.max_acceleration.max(sample.acceleration);
            extrema.min_acceleration = extrema.min_acceleration.min(sample.acceleration);
        }
        Some(extrema)
    }
}

impl DesignParameters {
    /// Classifies a cam angle (degrees) into its phase by cumulative boundary.
    ///
    /// Intervals are half-open on the right; everything from the end of the
    /// return phase up to and including 360° is near dwell.
    pub fn phase_of(&self, angle_deg: Real) -> Phase {
        let far_dwell_end = self.rise_angle + self.far_dwell_angle;
        if angle_deg < self.rise_angle {
            Phase::Rise
        } else if angle_deg < far_dwell_end {
            Phase::FarDwell
        } else if angle_deg < far_dwell_end + self.return_angle {
            Phase::Return
        } else {
            Phase::NearDwell
        }
    }
}

/// Evaluates the motion law at one angle. `params` must already be validated:
/// the rise/return widths are used as divisors.
fn sample_at(params: &DesignParameters, angle_deg: Real) -> MotionSample {
    let h = params.lift;
    let omega = params.omega();
    let (displacement, velocity, acceleration) = match params.phase_of(angle_deg) {
        Phase::Rise => {
            let beta = params.rise_angle.to_radians();
            let phi = angle_deg.to_radians();
            cycloidal_rise(h, omega, beta, phi)
        },
        Phase::FarDwell => (h, 0.0, 0.0),
        Phase::Return => {
            let beta = params.return_angle.to_radians();
            let phi = (angle_deg - (params.rise_angle + params.far_dwell_angle)).to_radians();
            cycloidal_return(h, omega, beta, phi)
        },
        Phase::NearDwell => (0.0, 0.0, 0.0),
    };
    MotionSample { angle_deg, displacement, velocity, acceleration }
}

fn cycloidal_rise(h: Real, omega: Real, beta: Real, phi: Real) -> (Real, Real, Real) {
    let u = TAU * phi / beta;
    let s = h * (phi / beta - u.sin() / TAU);
    let v = (h * omega / beta) * (1.0 - u.cos());
    let a = (TAU * h * omega * omega / (beta * beta)) * u.sin();
    (s, v, a)
}

fn cycloidal_return(h: Real, omega: Real, beta: Real, phi: Real) -> (Real, Real, Real) {
    let u = TAU * phi / beta;
    let s = h * (1.0 - phi / beta + u.sin() / TAU);
    let v = (h * omega / beta) * (u.cos() - 1.0);
    let a = -(TAU * h * omega * omega / (beta * beta)) * u.sin();
    (s, v, a)
}

/// Computes follower displacement, velocity, and acceleration for every angle
/// in `angles_deg` (degrees, each in `[0, 360]`), one sample per input angle,
/// in input order.
///
/// The whole parameter set is validated first; no sample is produced for an
/// invalid set.
///
/// # Example
/// ```
/// use camrs::{DesignParameters, RotationSense, synthesize};
///
/// let params = DesignParameters::new(
///     50.0, 20.0, 100.0, 0.0, RotationSense::Ccw, 90.0, 60.0, 90.0,
/// ).unwrap();
/// let samples = synthesize(&params, &[0.0, 45.0, 90.0]).unwrap();
/// assert!((samples[1].displacement - 10.0).abs() < 1e-9);
/// ```
pub fn synthesize(
    params: &DesignParameters,
    angles_deg: &[Real],
) -> Result<Vec<MotionSample>, ValidationError> {
    params.validate()?;

    #[cfg(feature = "parallel")]
    let samples = angles_deg
        .par_iter()
        .map(|&angle| sample_at(params, angle))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let samples = angles_deg
        .iter()
        .map(|&angle| sample_at(params, angle))
        .collect();

    Ok(samples)
}

/// Synthesizes `count` samples at evenly spaced angles over `[0, 360]`
/// inclusive (so the last sample closes the revolution at the same physical
/// point as the first).
///
/// `count` below 2 yields the single angle 0.
pub fn sample_uniform(
    params: &DesignParameters,
    count: usize,
) -> Result<Vec<MotionSample>, ValidationError> {
    let angles: Vec<Real> = if count < 2 {
        vec![0.0]
    } else {
        (0..count)
            .map(|i| 360.0 * (i as Real) / ((count - 1) as Real))
            .collect()
    };
    synthesize(params, &angles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RotationSense;

    fn reference() -> DesignParameters {
        DesignParameters {
            base_radius: 50.0,
            lift: 20.0,
            cam_speed_rpm: 100.0,
            offset: 0.0,
            rotation: RotationSense::Ccw,
            rise_angle: 90.0,
            far_dwell_angle: 60.0,
            return_angle: 90.0,
        }
    }

    #[test]
    fn phase_classification_by_cumulative_boundary() {
        let p = reference();
        assert_eq!(p.phase_of(0.0), Phase::Rise);
        assert_eq!(p.phase_of(89.999), Phase::Rise);
        assert_eq!(p.phase_of(90.0), Phase::FarDwell);
        assert_eq!(p.phase_of(150.0), Phase::Return);
        assert_eq!(p.phase_of(240.0), Phase::NearDwell);
        assert_eq!(p.phase_of(360.0), Phase::NearDwell);
    }

    #[test]
    fn samples_preserve_input_order() {
        let p = reference();
        let angles = [300.0, 10.0, 200.0];
        let samples = synthesize(&p, &angles).unwrap();
        assert_eq!(samples.len(), 3);
        for (sample, angle) in samples.iter().zip(angles) {
            assert_eq!(sample.angle_deg, angle);
        }
    }

    #[test]
    fn uniform_sampling_spans_the_revolution() {
        let p = reference();
        let samples = sample_uniform(&p, 1000).unwrap();
        assert_eq!(samples.len(), 1000);
        assert_eq!(samples[0].angle_deg, 0.0);
        assert_eq!(samples[999].angle_deg, 360.0);
    }

    #[test]
    fn extrema_over_reference_design() {
        let p = reference();
        let samples = sample_uniform(&p, 3601).unwrap();
        let extrema = MotionExtrema::from_samples(&samples).unwrap();
        // Peak cycloidal velocity is 2hω/β, reached mid-rise.
        let beta = p.rise_angle.to_radians();
        let expected = 2.0 * 20.0 * p.omega() / beta;
        assert!((extrema.max_velocity - expected).abs() < 1e-6);
        // Equal rise and return widths make the velocity extremes symmetric.
        assert!((extrema.max_velocity + extrema.min_velocity).abs() < 1e-6);
        assert!((extrema.max_acceleration + extrema.min_acceleration).abs() < 1e-6);
    }

    #[test]
    fn extrema_of_empty_sequence_is_none() {
        assert!(MotionExtrema::from_samples(&[]).is_none());
    }
}
