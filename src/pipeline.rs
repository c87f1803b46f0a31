//! Pipeline: pairs each [`Offer`] with its normalised salary and workload.

use nabory_core::config::UnrecognizedPolicy;
use nabory_core::{parse_workload, ParseError, RowError, SalaryNormalizer, SalaryRecord, Workload};
use nabory_feeds::Offer;

/// One report row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub offer: Offer,
    pub salary: SalaryRecord,
    /// `None` when the workload field is empty or unrecognised.
    pub workload: Option<Workload>,
}

/// A row dropped under [`UnrecognizedPolicy::Skip`].
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    /// Index of the offer in the feed.
    pub row: usize,
    pub error: ParseError,
}

/// Rows in feed order, plus the rows that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub rows: Vec<Row>,
    pub skipped: Vec<Skipped>,
}

/// Normalise every offer's salary and workload.
///
/// Under [`UnrecognizedPolicy::Fail`] the first unrecognised salary (lowest
/// row index) aborts the batch.
pub fn build_rows(
    offers: Vec<Offer>,
    normalizer: &SalaryNormalizer,
    policy: UnrecognizedPolicy,
) -> Result<Outcome, RowError> {
    let salaries: Vec<&str> = offers.iter().map(|o| o.salary.as_str()).collect();
    let records = normalizer.normalize_batch(&salaries);

    let mut outcome = Outcome::default();
    for (row, (offer, record)) in offers.into_iter().zip(records).enumerate() {
        match record {
            Ok(salary) => {
                let workload = workload_of(row, &offer);
                outcome.rows.push(Row { offer, salary, workload });
            }
            Err(error) => match policy {
                UnrecognizedPolicy::Fail => return Err(RowError { row, source: error }),
                UnrecognizedPolicy::Skip => {
                    tracing::warn!(row, cleaned = %error.cleaned, "pipeline: skipping unrecognized salary");
                    outcome.skipped.push(Skipped { row, error });
                }
            },
        }
    }

    tracing::debug!(
        rows = outcome.rows.len(),
        skipped = outcome.skipped.len(),
        "pipeline: batch normalised"
    );
    Ok(outcome)
}

fn workload_of(row: usize, offer: &Offer) -> Option<Workload> {
    if offer.workload.trim().is_empty() {
        return None;
    }
    match parse_workload(&offer.workload) {
        Ok(w) => Some(w),
        Err(err) => {
            tracing::debug!(row, error = %err, "pipeline: workload left blank");
            None
        }
    }
}
