//! Validation errors

use crate::float_types::Real;

/// All the ways a [`DesignParameters`](crate::params::DesignParameters) set can
/// fail its preconditions.
///
/// Every check runs before a single sample is computed, so a caller never sees
/// a partially valid sequence. Each variant carries the offending value so the
/// caller can render a precise message.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The base circle must have positive radius.
    #[error("base circle radius must be > 0 mm, got {0}")]
    NonPositiveBaseRadius(Real),
    /// Follower lift below the base-circle datum is not a valid cam.
    #[error("follower lift must be >= 0 mm, got {0}")]
    NegativeLift(Real),
    /// A stationary cam has no kinematics.
    #[error("cam speed must be > 0 rpm, got {0}")]
    NonPositiveSpeed(Real),
    /// The follower line of action cannot sit on the far side of the axis.
    #[error("follower offset must be >= 0 mm, got {0}")]
    NegativeOffset(Real),
    /// An offset beyond the base circle yields a self-intersecting contour.
    #[error("follower offset ({offset} mm) exceeds base circle radius ({base_radius} mm)")]
    OffsetExceedsBaseRadius { offset: Real, base_radius: Real },
    /// A zero-width rise phase divides by zero in the motion law.
    #[error("rise angle must be > 0 degrees, got {0}")]
    NonPositiveRiseAngle(Real),
    /// A zero-width return phase divides by zero in the motion law.
    #[error("return angle must be > 0 degrees, got {0}")]
    NonPositiveReturnAngle(Real),
    /// The far dwell may be absent (0 degrees) but never negative.
    #[error("far dwell angle must be >= 0 degrees, got {0}")]
    NegativeFarDwellAngle(Real),
    /// Rise + far dwell + return must leave a non-negative near dwell.
    #[error("phase angles sum to {0} degrees, which exceeds one revolution (360)")]
    PhaseAnglesExceedRevolution(Real),
}
