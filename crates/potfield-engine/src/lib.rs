//! Field engine for Potfield.
//!
//! [`FieldEngine`] owns the grid, the ordered point-source list and the
//! gain constant. Every mutating operation validates its inputs first
//! and only then changes state, finishing with a full recomputation of
//! every cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod metrics;
pub mod recompute;

pub use config::{ConfigError, EngineConfig, DEFAULT_MAX_CELLS};
pub use engine::FieldEngine;
pub use metrics::RecomputeMetrics;
