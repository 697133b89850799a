//! Cam design parameters and their validation

use crate::errors::ValidationError;
use crate::float_types::{Real, TAU};

/// Rotation sense of the cam, viewed from the follower side.
///
/// The sense only affects which side of the cam axis the follower's line of
/// action falls on, so the profile transform flips the sign of the offset term
/// with it. With zero offset the two senses produce identical contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationSense {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
}

impl RotationSense {
    /// Sign of the offset term in the profile transform: `+1` for CCW, `-1` for CW.
    #[inline]
    pub const fn offset_sign(self) -> Real {
        match self {
            RotationSense::Ccw => 1.0,
            RotationSense::Cw => -1.0,
        }
    }
}

/// One complete, immutable cam design.
///
/// Constructed once per computation request; the synthesizer and transformer
/// only ever read it. Angles are in degrees, lengths in millimeters, speed in
/// revolutions per minute.
///
/// The three explicit phase angles leave `360 − (rise + far dwell + return)`
/// degrees of near dwell; [`DesignParameters::validate`] rejects any set where
/// that remainder would be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignParameters {
    /// Base circle radius (mm, > 0)
    pub base_radius: Real,
    /// Total follower lift (mm, ≥ 0)
    pub lift: Real,
    /// Cam speed (rpm, > 0)
    pub cam_speed_rpm: Real,
    /// Perpendicular distance from the cam axis to the follower's line of action (mm, ≥ 0)
    pub offset: Real,
    /// Rotation sense of the cam
    pub rotation: RotationSense,
    /// Rise phase width (degrees, > 0)
    pub rise_angle: Real,
    /// Far dwell width (degrees, ≥ 0)
    pub far_dwell_angle: Real,
    /// Return phase width (degrees, > 0)
    pub return_angle: Real,
}

impl DesignParameters {
    /// Builds a parameter set and validates it in one step.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base_radius: Real,
        lift: Real,
        cam_speed_rpm: Real,
        offset: Real,
        rotation: RotationSense,
        rise_angle: Real,
        far_dwell_angle: Real,
        return_angle: Real,
    ) -> Result<Self, ValidationError> {
        let params = Self {
            base_radius,
            lift,
            cam_speed_rpm,
            offset,
            rotation,
            rise_angle,
            far_dwell_angle,
            return_angle,
        };
        params.validate()?;
        Ok(params)
    }

    /// Derived near dwell width (degrees); negative iff the set is invalid.
    #[inline]
    pub fn near_dwell_angle(&self) -> Real {
        360.0 - (self.rise_angle + self.far_dwell_angle + self.return_angle)
    }

    /// Constant cam angular velocity ω = τ·rpm/60 (rad/s).
    #[inline]
    pub fn omega(&self) -> Real {
        TAU * self.cam_speed_rpm / 60.0
    }

    /// Checks every precondition of the motion law and the profile transform.
    ///
    /// Both engine entry points call this before computing anything, so an
    /// invalid set is refused outright rather than yielding wrapped phases or
    /// a self-intersecting contour.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_radius <= 0.0 {
            return Err(ValidationError::NonPositiveBaseRadius(self.base_radius));
        }
        if self.lift < 0.0 {
            return Err(ValidationError::NegativeLift(self.lift));
        }
        if self.cam_speed_rpm <= 0.0 {
            return Err(ValidationError::NonPositiveSpeed(self.cam_speed_rpm));
        }
        if self.offset < 0.0 {
            return Err(ValidationError::NegativeOffset(self.offset));
        }
        if self.offset > self.base_radius {
            return Err(ValidationError::OffsetExceedsBaseRadius {
                offset: self.offset,
                base_radius: self.base_radius,
            });
        }
        if self.rise_angle <= 0.0 {
            return Err(ValidationError::NonPositiveRiseAngle(self.rise_angle));
        }
        if self.return_angle <= 0.0 {
            return Err(ValidationError::NonPositiveReturnAngle(self.return_angle));
        }
        if self.far_dwell_angle < 0.0 {
            return Err(ValidationError::NegativeFarDwellAngle(self.far_dwell_angle));
        }
        let phase_sum = self.rise_angle + self.far_dwell_angle + self.return_angle;
        if phase_sum > 360.0 {
            return Err(ValidationError::PhaseAnglesExceedRevolution(phase_sum));
        }
        Ok(())
    }
}
