//! The schema contract shared by tools and the model boundary.
//!
//! A tool declares the shape of its input and output once, as an
//! [`ObjectSchema`] over a closed set of field kinds. The same
//! declaration is used in both directions: to validate untyped data
//! crossing the tool boundary, and to derive the parameter descriptor
//! that is advertised to the model provider.
//!
//! The field kind set is deliberately closed so that every conversion
//! site matches it exhaustively. There is no fall-through for a kind
//! the converter doesn't know about.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod descriptor;
mod error;
mod field;
mod object;

pub use descriptor::*;
pub use error::*;
pub use field::*;
pub use object::*;
