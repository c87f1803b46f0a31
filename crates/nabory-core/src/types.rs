//! Core types for nabory-core.
//!
//! This module defines the structured output of the salary normaliser: the
//! [`SalaryRecord`], its [`RangeKind`], and the [`TaxBasis`] the bounds are
//! expressed in.

/// A normalised salary, one per raw feed string.
///
/// Produced only by the normaliser, so the shape invariants hold for every
/// value a caller sees:
///
/// - `range_kind != None` implies `lower_bound.is_some()`;
/// - `upper_bound` is present only for `Approximate`, `Range` and `Exact`,
///   and equals `lower_bound` for `Approximate` and `Exact`;
/// - `tax_basis == Unset` exactly when `range_kind == None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRecord {
    /// How the bound(s) were written in the posting.
    pub range_kind: RangeKind,
    /// Basis of both bounds after gross conversion.
    pub tax_basis: TaxBasis,
    /// Lower bound in PLN (gross or estimated gross).
    pub lower_bound: Option<f64>,
    /// Upper bound in PLN (gross or estimated gross).
    pub upper_bound: Option<f64>,
}

impl SalaryRecord {
    /// The record for a posting with no salary information.
    pub const fn none() -> Self {
        Self {
            range_kind: RangeKind::None,
            tax_basis: TaxBasis::Unset,
            lower_bound: None,
            upper_bound: None,
        }
    }

    /// `true` when the posting carried any salary figure at all.
    pub fn has_salary(&self) -> bool {
        self.range_kind != RangeKind::None
    }
}

/// The syntactic shape a salary was expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// No salary given.
    None,
    /// "około N".
    Approximate,
    /// "od N1 do N2".
    Range,
    /// "nie mniej niż N".
    LowerBoundOnly,
    /// A bare "N".
    Exact,
}

impl RangeKind {
    /// Short column code used by the vacancy tables.
    pub fn code(self) -> &'static str {
        match self {
            RangeKind::None => "brak",
            RangeKind::Approximate => "~",
            RangeKind::Range => "od_do",
            RangeKind::LowerBoundOnly => "od",
            RangeKind::Exact => "=",
        }
    }

    /// Whether a record of this kind carries an upper bound.
    pub fn has_upper_bound(self) -> bool {
        matches!(
            self,
            RangeKind::Approximate | RangeKind::Range | RangeKind::Exact
        )
    }
}

impl std::fmt::Display for RangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Tax basis of the reported bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxBasis {
    /// No salary, so no basis.
    Unset,
    /// The posting quoted a net figure; bounds were scaled to an estimated
    /// gross value.
    NetEstimatedGross,
    /// The posting quoted a gross figure (or did not say).
    Gross,
}

impl TaxBasis {
    /// Short column code used by the vacancy tables. `None` for [`TaxBasis::Unset`].
    pub fn code(self) -> Option<&'static str> {
        match self {
            TaxBasis::Unset => None,
            TaxBasis::NetEstimatedGross => Some("brutto estymowany"),
            TaxBasis::Gross => Some("brutto"),
        }
    }
}

impl std::fmt::Display for TaxBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code().unwrap_or(""))
    }
}
