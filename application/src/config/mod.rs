//! Application-level configuration.
//!
//! [`PacingParams`] holds the delays the controller waits out between flow
//! steps.

pub mod pacing;

pub use pacing::PacingParams;
