//! nabory, a salary normaliser for the civil-service vacancy feed.
//!
//! This crate wires the feed readers to the normalisers and renders the
//! result as aligned rows. It is exposed as a library so that integration
//! tests can drive the same path as the binary.
//!
//! # Architecture
//!
//! ```text
//! Feed (XML export | lines) ──► Pipeline ──► Report (TSV | JSONL)
//!                                  │
//!                       nabory-core normalisers
//! ```
//!
//! Normalisation is pure and runs on the `rayon` pool; row order is always
//! the feed order.

pub mod pipeline;
pub mod report;

pub use pipeline::{build_rows, Outcome, Row, Skipped};
