//! Text command driver for the Potfield engine.
//!
//! Decodes one command per line, applies it to a
//! [`FieldEngine`](potfield_engine::FieldEngine), and renders the reply:
//!
//! ```text
//! CREATE N M     -> success | failure
//! POINT T X Y    -> success | failure
//! MOVE X Y       -> <px> <py> | failure
//! CLEAR          -> success | failure
//! UPDATE K       -> success | failure
//! EXIT           -> (stops reading)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod session;

pub use codec::{format_g, format_reply, parse_command, ParseError};
pub use session::{LineOutcome, Session, SessionStats};
