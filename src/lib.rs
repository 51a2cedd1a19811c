//! # tpbracket
//!
//! Rebuilds the bracket of a tournament from a Tournament Planner PlayerMatch export.
//!
//! The export stores every match as two independent half-match rows linked to earlier rounds
//! by planning numbers. [`reconstruct`] pairs the rows, fills in halves the export leaves out,
//! resolves who plays in each match and derives a status for it.
//!
//! Important types:
//! - [`HalfMatch`]: one typed export row. [`ingest`] builds them from [`RawPlayerMatch`].
//! - [`Match`]: a reconstructed match with its two [`Slot`]s and [`MatchStatus`].
//! - [`Reconstructor`]: runs the pipeline step by step.
//! - [`Tournament`]: keeps the last good reconstruction across reloads.
pub use engine::{reconstruct, Reconstructor};
pub use error::{ReconstructError, Result};
pub use ingest::{parse_player_match, parse_snapshot, Catalog};
pub use model::*;
pub use options::ReconstructOptions;
pub use tournament::Tournament;

pub mod engine;
pub mod error;
pub mod ingest;
pub mod model;
pub mod options;
pub mod tournament;

#[cfg(test)]
mod testutil;
