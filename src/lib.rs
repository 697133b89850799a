//! Disk cam synthesis for a radial, offset, translating follower, built around
//! the **sinusoidal-acceleration (cycloidal)** motion law.
//!
//! The crate is split into two pure stages, strictly ordered by data flow:
//!
//! 1. [`motion`], the motion-law synthesizer: for each cam angle over one
//!    revolution it produces follower displacement, velocity, and acceleration,
//!    piecewise across the four phases (rise, far dwell, return, near dwell).
//! 2. [`profile`], the profile transformer: maps the angle/displacement series
//!    plus base radius, offset, and rotation sense to the Cartesian contour of
//!    the physical cam.
//!
//! Both stages validate the full [`params::DesignParameters`] set before
//! computing anything and never return a partially valid sequence.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: export the cam contour as an SVG path
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreading across samples

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod params;
pub mod motion;
pub mod profile;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ValidationError;
pub use motion::{MotionExtrema, MotionSample, sample_uniform, synthesize};
pub use params::{DesignParameters, RotationSense};
pub use profile::CamProfile;
