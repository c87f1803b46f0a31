//! nabory-core — salary and workload normalisers for the civil-service
//! vacancy feed.
//!
//! # Pipeline
//!
//! ```text
//! raw `wynagrodzenie` ──► clean ──► rules (first match wins) ──► SalaryRecord
//!          │                                                      ▲
//!          └──────────── "netto"? ──► gross conversion ───────────┘
//! ```
//!
//! Everything here is pure: no I/O outside [`config::Config::load`], no
//! shared mutable state. Batches are normalised in parallel with `rayon`.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod types;
pub mod workload;

pub use error::{ParseError, RowError, WorkloadError};
pub use normalizer::{clean, normalize, SalaryNormalizer};
pub use types::{RangeKind, SalaryRecord, TaxBasis};
pub use workload::{parse_workload, Workload};
