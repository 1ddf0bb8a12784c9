//! Bounding-box cropping module
//!
//! Turns a decoded image into its tightest crop around foreground content,
//! driven by a named crop method.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Method, Outcome, Pipeline, StepTiming};
pub use steps::pretrim::Margins;
