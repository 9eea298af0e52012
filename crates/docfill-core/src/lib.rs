//! Core template-fill logic for property documents
//!
//! Given a set of form fields and the bytes of a static multi-page PDF
//! template, stamps each field at a fixed coordinate on its designated
//! page and returns the filled document as bytes. Which placements apply
//! depends solely on how many pages the template has.
//!
//! This crate is I/O-free: callers hand in template bytes and get bytes
//! back. HTTP, paths, and artifact naming live in `docfill-api`.

mod error;
mod fields;
mod overlay;
mod rules;

pub use error::FillError;
pub use fields::DocumentFields;
pub use overlay::fill_template;
pub use rules::{placements, placements_for_page_count, Field, Placement, Rgb};
