//! Common data structures for Ember.
//!
//! This crate provides the position types used across the front end:
//! - `BytePos` / `Span`: byte ranges into the source text
//! - `Location`: 0-based line and column of a character

mod location;
mod span;

pub use location::Location;
pub use span::{BytePos, Span};
