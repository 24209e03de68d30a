//! Line-level parsing utilities.
//!
//! This module contains the two leaf stages of the transcript pipeline:
//! - [`normalize`] - strips directional marks and splits raw text into lines
//! - [`dialect`] - classifies one physical line as header, system or continuation
//!
//! The [`parser`](crate::parser) module folds their output into messages.

pub mod dialect;
pub mod normalize;

// Re-export commonly used items
pub use dialect::{Dialect, Header, LineKind, classify_line};
pub use normalize::{normalize_line, physical_lines};
