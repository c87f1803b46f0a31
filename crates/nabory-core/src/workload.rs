//! Workload: reads the `wymiaretatu` field as a full-time equivalent.
//!
//! The feed writes the employment fraction as "pełny etat", as a fraction
//! ("1/2", "3/8") or as a decimal with either separator ("0,75").

use std::sync::LazyLock;

use regex::Regex;

use crate::error::WorkloadError;

const FULL_TIME: &str = "pełny etat";

static FRACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\s*/\s*([0-9]+)$").expect("fraction pattern must compile")
});
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:[.,][0-9]+)?$").expect("decimal pattern must compile"));

/// Full-time equivalent of one position. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Workload(f64);

impl Workload {
    pub const FULL: Workload = Workload(1.0);

    pub fn fte(self) -> f64 {
        self.0
    }

    pub fn is_part_time(self) -> bool {
        self.0 < 1.0
    }
}

/// Parse a raw `wymiaretatu` value.
pub fn parse_workload(raw: &str) -> Result<Workload, WorkloadError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(WorkloadError::Empty);
    }
    if text.to_lowercase() == FULL_TIME {
        return Ok(Workload::FULL);
    }

    let value = if let Some(caps) = FRACTION_RE.captures(text) {
        let num: f64 = caps[1]
            .parse()
            .map_err(|_| WorkloadError::Unrecognized(text.to_string()))?;
        let den: f64 = caps[2]
            .parse()
            .map_err(|_| WorkloadError::Unrecognized(text.to_string()))?;
        if den == 0.0 {
            return Err(WorkloadError::Unrecognized(text.to_string()));
        }
        num / den
    } else if DECIMAL_RE.is_match(text) {
        text.replace(',', ".")
            .parse()
            .map_err(|_| WorkloadError::Unrecognized(text.to_string()))?
    } else {
        return Err(WorkloadError::Unrecognized(text.to_string()));
    };

    if value > 0.0 && value.is_finite() {
        Ok(Workload(value))
    } else {
        Err(WorkloadError::NotPositive(text.to_string()))
    }
}
