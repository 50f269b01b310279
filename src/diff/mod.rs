//! Template diffing module.
//!
//! This module compares the downloaded baseline template with the locally
//! packaged candidate and describes the structural differences.

mod engine;
mod report;
mod templates;

pub use engine::DiffEngine;
pub use report::{Change, DiffEntry, DiffPath, DifferenceReport, PathSegment};
pub use templates::{compute_diff, load_template};
