//! Potfield: a grid-based potential-field engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Potfield sub-crates. Goals pull, obstacles push, and every cell of
//! the grid holds the summed inverse-distance contribution of every
//! registered source.
//!
//! # Quick start
//!
//! ```rust
//! use potfield::prelude::*;
//!
//! let mut engine = FieldEngine::new();
//! engine.configure(5, 5).unwrap();
//! engine.register_point(SourceKind::Goal, 0, 0).unwrap();
//!
//! let v = engine.query_at(1, 1).unwrap();
//! assert!((v.px + 1.0 / 2f64.sqrt()).abs() < 1e-12);
//! assert_eq!(v.px, v.py);
//!
//! // The same session through the text driver.
//! let mut out = Vec::new();
//! Session::new()
//!     .run("CREATE 5 5\nPOINT G 0 0\nMOVE 1 1\n".as_bytes(), &mut out)
//!     .unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "success\nsuccess\n-0.707107 -0.707107\n");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `potfield-core` | Vectors, sources, commands, errors |
//! | [`space`] | `potfield-space` | Grid storage and bounds checks |
//! | [`engine`] | `potfield-engine` | Field engine, config, sweep metrics |
//! | [`driver`] | `potfield-driver` | Command codec and line session |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`potfield-core`).
///
/// [`types::Vector2`], [`types::PointSource`], [`types::Command`] and
/// [`types::FieldError`].
pub use potfield_core as types;

/// Grid storage (`potfield-space`).
pub use potfield_space as space;

/// The field engine (`potfield-engine`).
///
/// [`engine::FieldEngine`] holds all state; [`engine::recompute`] is the
/// sweep it runs after every mutation.
pub use potfield_engine as engine;

/// Text command codec and session loop (`potfield-driver`).
pub use potfield_driver as driver;

/// Common imports for typical Potfield usage.
///
/// ```rust
/// use potfield::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use potfield_core::{Command, ErrorKind, FieldError, PointSource, Reply, SourceKind, Vector2};

    // Grid
    pub use potfield_space::{Grid, GridDims};

    // Engine
    pub use potfield_engine::{EngineConfig, FieldEngine, RecomputeMetrics};

    // Driver
    pub use potfield_driver::{LineOutcome, Session, SessionStats};
}
