//! Track catalog: loading, tagging and ordering of playable tracks.
//!
//! A catalog is built either from a TOML playlist manifest or by scanning a
//! directory, and is sorted once by title at startup. It is never mutated
//! afterwards.

mod manifest;
mod model;
mod scan;

pub use manifest::*;
pub use model::*;
pub use scan::*;

#[cfg(test)]
mod tests;
