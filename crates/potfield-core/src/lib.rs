//! Core types for the Potfield potential-field engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared across the workspace: the [`Vector2`] cell
//! value, point sources and their [`SourceKind`], the [`FieldError`]
//! kinds returned by every engine operation, and the [`Command`] /
//! [`Reply`] pair exchanged with a driver.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod source;
pub mod vector;

pub use command::{Command, Reply};
pub use error::{ErrorKind, FieldError};
pub use source::{PointSource, SourceKind};
pub use vector::Vector2;
