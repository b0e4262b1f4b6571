//! Report rendering and export.
//!
//! Pure formatting over the core's scan result: plain text, markdown,
//! JSON, and a standalone HTML document.

pub mod generator;
pub mod render;

pub use generator::{ReportFormat, ReportGenerator};
