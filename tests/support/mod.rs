//! Test support library
//! Provides various helper functions & utilities for tests.

use camrs::float_types::Real;
use camrs::{DesignParameters, RotationSense};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The worked reference design: 50 mm base circle, 20 mm lift, 100 rpm,
/// no offset, CCW, 90°/60°/90° phases (120° near dwell).
pub fn reference_design() -> DesignParameters {
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
