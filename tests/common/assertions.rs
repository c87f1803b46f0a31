//! Domain-specific assertions for nabory harnesses.
//!
//! These add context-rich failure messages that make it clear which record
//! invariant was violated and for which input.

use nabory_core::{RangeKind, SalaryRecord, TaxBasis};

/// Tolerance for comparing bounds after net-to-gross scaling.
pub const BOUND_EPSILON: f64 = 1e-6;

/// Assert that two records agree, comparing bounds within [`BOUND_EPSILON`].
///
/// ```rust
/// assert_record!(normalize("5000").unwrap(), exact(TaxBasis::Gross, 5000.0));
/// ```
#[macro_export]
macro_rules! assert_record {
    ($actual:expr, $expected:expr) => {{
        let actual: nabory_core::SalaryRecord = $actual;
        let expected: nabory_core::SalaryRecord = $expected;
        let bound_eq = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(a), Some(b)) => (a - b).abs() < $crate::common::BOUND_EPSILON,
            (None, None) => true,
            _ => false,
        };
        if actual.range_kind != expected.range_kind
            || actual.tax_basis != expected.tax_basis
            || !bound_eq(actual.lower_bound, expected.lower_bound)
            || !bound_eq(actual.upper_bound, expected.upper_bound)
        {
            panic!(
                "assert_record! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
    }};
}

/// Assert the shape invariants every normalised record must satisfy.
pub fn assert_record_invariants(raw: &str, record: &SalaryRecord) {
    match record.range_kind {
        RangeKind::None => {
            assert_eq!(record.tax_basis, TaxBasis::Unset, "no-salary basis for {raw:?}");
            assert!(record.lower_bound.is_none(), "no-salary lower bound for {raw:?}");
            assert!(record.upper_bound.is_none(), "no-salary upper bound for {raw:?}");
        }
        kind => {
            let lower = record
                .lower_bound
                .unwrap_or_else(|| panic!("{kind:?} without lower bound for {raw:?}"));
            assert!(lower >= 0.0, "negative lower bound for {raw:?}");
            assert_ne!(record.tax_basis, TaxBasis::Unset, "unset basis for {raw:?}");
            assert_eq!(
                record.upper_bound.is_some(),
                kind.has_upper_bound(),
                "upper bound presence for {kind:?} in {raw:?}"
            );
            if matches!(kind, RangeKind::Approximate | RangeKind::Exact) {
                assert_eq!(record.upper_bound, Some(lower), "single-value bounds differ for {raw:?}");
            }
            let expected_basis = if raw.contains("netto") {
                TaxBasis::NetEstimatedGross
            } else {
                TaxBasis::Gross
            };
            assert_eq!(record.tax_basis, expected_basis, "tax basis for {raw:?}");
        }
    }
}
