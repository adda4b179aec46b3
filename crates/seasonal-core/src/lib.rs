//! Core types for the seasonal particle animation.
//!
//! This crate holds the shared vocabulary of the workspace: the public
//! options schema and its resolved configuration, the sizing snapshot taken
//! from the host surface, element colors, and the animator state machine.

mod color;
mod document;
mod options;
mod state;

pub use color::ElementColor;
pub use document::{CELL_HEIGHT_PX, CELL_WIDTH_PX, DocumentMetrics};
pub use options::{AnimatorConfig, AnimatorOptions};
pub use state::AnimatorState;
