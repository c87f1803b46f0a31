//! Test builders: ergonomic constructors for `Offer` and expected records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use nabory_core::{RangeKind, SalaryRecord, TaxBasis};
use nabory_feeds::Offer;

// ---------------------------------------------------------------------------
// OfferBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Offer`] test fixtures.
///
/// ```rust
/// let offer = OfferBuilder::new("od 4000 do 6000 zł brutto")
///     .position("referent")
///     .workload("1/2")
///     .build();
/// ```
pub struct OfferBuilder {
    offer: Offer,
}

impl OfferBuilder {
    pub fn new(salary: impl Into<String>) -> Self {
        Self { offer: Offer::from_salary(salary) }
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.offer.position = position.into();
        self
    }

    pub fn duties(mut self, duties: impl Into<String>) -> Self {
        self.offer.duties = duties.into();
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.offer.unit = unit.into();
        self
    }

    pub fn employer(mut self, employer: impl Into<String>) -> Self {
        self.offer.employer = employer.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.offer.location = location.into();
        self
    }

    pub fn workload(mut self, workload: impl Into<String>) -> Self {
        self.offer.workload = workload.into();
        self
    }

    pub fn vacancies(mut self, vacancies: u32) -> Self {
        self.offer.vacancies = vacancies;
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.offer.url = url.into();
        self
    }

    pub fn published(mut self, published: impl Into<String>) -> Self {
        self.offer.published = published.into();
        self
    }

    pub fn build(self) -> Offer {
        self.offer
    }
}

// ---------------------------------------------------------------------------
// Expected records
// ---------------------------------------------------------------------------

pub fn range(basis: TaxBasis, lower: f64, upper: f64) -> SalaryRecord {
    SalaryRecord {
        range_kind: RangeKind::Range,
        tax_basis: basis,
        lower_bound: Some(lower),
        upper_bound: Some(upper),
    }
}

pub fn approximate(basis: TaxBasis, value: f64) -> SalaryRecord {
    SalaryRecord {
        range_kind: RangeKind::Approximate,
        tax_basis: basis,
        lower_bound: Some(value),
        upper_bound: Some(value),
    }
}

pub fn lower_bound_only(basis: TaxBasis, lower: f64) -> SalaryRecord {
    SalaryRecord {
        range_kind: RangeKind::LowerBoundOnly,
        tax_basis: basis,
        lower_bound: Some(lower),
        upper_bound: None,
    }
}

pub fn exact(basis: TaxBasis, value: f64) -> SalaryRecord {
    SalaryRecord {
        range_kind: RangeKind::Exact,
        tax_basis: basis,
        lower_bound: Some(value),
        upper_bound: Some(value),
    }
}
