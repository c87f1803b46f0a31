//! Normalizer — turns the free-text `wynagrodzenie` field into a [`SalaryRecord`].
//!
//! Normalisation is two steps over two distinct strings:
//!
//! 1. [`clean`] strips the currency token and the tax-basis keywords, switches
//!    the decimal comma to a period and collapses whitespace.
//! 2. [`SalaryNormalizer::classify`] runs the ordered [`RULES`] table against
//!    the cleaned text (first match wins) and decides the tax basis from the
//!    *raw* text, since cleaning deletes the `netto` keyword.
//!
//! A non-empty string that no rule claims is a [`ParseError`]; nothing is
//! guessed.

use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;

use crate::config::NormalizerConfig;
use crate::error::{ParseError, RowError};
use crate::types::{RangeKind, SalaryRecord, TaxBasis};

/// Approximate net-to-gross multiplier. Not a tax computation.
pub const DEFAULT_NET_TO_GROSS: f64 = 1.37;

const CURRENCY_TOKEN: &str = " zł ";
const NET_MARKER: &str = "netto";
const GROSS_MARKER: &str = "brutto";
const APPROX_MARKER: &str = "około";
const APPROX_PREFIX: &str = "około ";

// ASCII digits only: `\d` would also accept non-ASCII digits that `f64`
// cannot parse.
const NUMBER: &str = r"[0-9]+(?:\.[0-9]{0,2})?";

// A number must not run on into more digits or a period, so "6000.125"
// fails instead of being read as 6000.12.
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^od ({NUMBER}) do ({NUMBER})(?:$|[^0-9.])"))
        .expect("range pattern must compile")
});
static LOWER_BOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^nie mniej niż ({NUMBER})(?:$|[^0-9.])"))
        .expect("lower-bound pattern must compile")
});
static EXACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{NUMBER}$")).expect("exact pattern must compile")
});

static DEFAULT_NORMALIZER: LazyLock<SalaryNormalizer> = LazyLock::new(SalaryNormalizer::default);

// ---------------------------------------------------------------------------
// Cleanup
// ---------------------------------------------------------------------------

/// Clean a raw salary string for classification.
///
/// The pass is repeated until nothing changes, so `clean(clean(s)) == clean(s)`
/// even when removing one keyword exposes another (`"nebruttotto"`).
pub fn clean(raw: &str) -> String {
    let mut current = clean_pass(raw);
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(s: &str) -> String {
    let s = s
        .replace(CURRENCY_TOKEN, " ")
        .replace(NET_MARKER, "")
        .replace(GROSS_MARKER, "")
        .replace(',', ".");
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Result of running one [`Rule`] against a cleaned string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleMatch {
    /// The rule does not apply; try the next one.
    Pass,
    /// The posting has no salary.
    NoSalary,
    /// The rule applies and produced raw (pre-conversion) bounds.
    Bounds { lower: f64, upper: Option<f64> },
    /// The rule claims the input but its number is malformed.
    Malformed,
}

/// One entry of the precedence table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: RangeKind,
    pub apply: fn(&str) -> RuleMatch,
}

/// Classification rules in precedence order.
pub const RULES: &[Rule] = &[
    Rule { kind: RangeKind::None, apply: match_empty },
    Rule { kind: RangeKind::Approximate, apply: match_approximate },
    Rule { kind: RangeKind::Range, apply: match_range },
    Rule { kind: RangeKind::LowerBoundOnly, apply: match_lower_bound },
    Rule { kind: RangeKind::Exact, apply: match_exact },
];

fn match_empty(cleaned: &str) -> RuleMatch {
    if cleaned.is_empty() {
        RuleMatch::NoSalary
    } else {
        RuleMatch::Pass
    }
}

fn match_approximate(cleaned: &str) -> RuleMatch {
    if !cleaned.contains(APPROX_MARKER) {
        return RuleMatch::Pass;
    }
    let rest = cleaned.replace(APPROX_PREFIX, "");
    if !EXACT_RE.is_match(&rest) {
        return RuleMatch::Malformed;
    }
    match parse_number(&rest) {
        Some(n) => RuleMatch::Bounds { lower: n, upper: Some(n) },
        None => RuleMatch::Malformed,
    }
}

fn match_range(cleaned: &str) -> RuleMatch {
    let Some(caps) = RANGE_RE.captures(cleaned) else {
        return RuleMatch::Pass;
    };
    match (parse_number(&caps[1]), parse_number(&caps[2])) {
        (Some(lower), Some(upper)) => RuleMatch::Bounds { lower, upper: Some(upper) },
        _ => RuleMatch::Malformed,
    }
}

fn match_lower_bound(cleaned: &str) -> RuleMatch {
    let Some(caps) = LOWER_BOUND_RE.captures(cleaned) else {
        return RuleMatch::Pass;
    };
    match parse_number(&caps[1]) {
        Some(lower) => RuleMatch::Bounds { lower, upper: None },
        None => RuleMatch::Malformed,
    }
}

fn match_exact(cleaned: &str) -> RuleMatch {
    if !EXACT_RE.is_match(cleaned) {
        return RuleMatch::Pass;
    }
    match parse_number(cleaned) {
        Some(n) => RuleMatch::Bounds { lower: n, upper: Some(n) },
        None => RuleMatch::Malformed,
    }
}

/// Parse a token of the number grammar. `"4000."` reads as 4000.
fn parse_number(token: &str) -> Option<f64> {
    token
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

// ---------------------------------------------------------------------------
// SalaryNormalizer
// ---------------------------------------------------------------------------

/// Salary normaliser with a configurable net-to-gross factor.
///
/// Stateless apart from the factor; share one instance across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryNormalizer {
    net_to_gross: f64,
}

impl Default for SalaryNormalizer {
    fn default() -> Self {
        Self { net_to_gross: DEFAULT_NET_TO_GROSS }
    }
}

impl SalaryNormalizer {
    pub fn new(net_to_gross: f64) -> Self {
        Self { net_to_gross }
    }

    pub fn from_config(cfg: &NormalizerConfig) -> Self {
        Self::new(cfg.net_to_gross_factor)
    }

    pub fn net_to_gross(&self) -> f64 {
        self.net_to_gross
    }

    /// Clean `raw` and classify it.
    pub fn normalize(&self, raw: &str) -> Result<SalaryRecord, ParseError> {
        let cleaned = clean(raw);
        self.classify(raw, &cleaned)
    }

    /// Classify an already-cleaned string.
    ///
    /// `raw` must be the text `cleaned` was produced from: the tax basis is
    /// read from it because [`clean`] removes the `netto` keyword.
    pub fn classify(&self, raw: &str, cleaned: &str) -> Result<SalaryRecord, ParseError> {
        for rule in RULES {
            match (rule.apply)(cleaned) {
                RuleMatch::Pass => continue,
                RuleMatch::NoSalary => {
                    tracing::trace!(raw = %raw, "salary: none");
                    return Ok(SalaryRecord::none());
                }
                RuleMatch::Malformed => {
                    tracing::debug!(kind = ?rule.kind, cleaned = %cleaned, "salary: malformed number");
                    return Err(ParseError { cleaned: cleaned.to_string() });
                }
                RuleMatch::Bounds { lower, upper } => {
                    let record = self.to_record(rule.kind, raw, lower, upper);
                    if let (Some(lo), Some(hi)) = (record.lower_bound, record.upper_bound) {
                        if lo > hi {
                            tracing::warn!(raw = %raw, lower = lo, upper = hi, "salary: lower bound above upper bound");
                        }
                    }
                    tracing::trace!(kind = ?record.range_kind, basis = ?record.tax_basis, "salary: classified");
                    return Ok(record);
                }
            }
        }
        tracing::debug!(cleaned = %cleaned, "salary: no rule matched");
        Err(ParseError { cleaned: cleaned.to_string() })
    }

    fn to_record(&self, kind: RangeKind, raw: &str, lower: f64, upper: Option<f64>) -> SalaryRecord {
        let (tax_basis, factor) = if raw.contains(NET_MARKER) {
            (TaxBasis::NetEstimatedGross, self.net_to_gross)
        } else {
            (TaxBasis::Gross, 1.0)
        };
        SalaryRecord {
            range_kind: kind,
            tax_basis,
            lower_bound: Some(lower * factor),
            upper_bound: upper.map(|u| u * factor),
        }
    }

    /// Normalise every string, in parallel. Output order matches input order.
    pub fn normalize_batch<S>(&self, raws: &[S]) -> Vec<Result<SalaryRecord, ParseError>>
    where
        S: AsRef<str> + Sync,
    {
        raws.par_iter().map(|raw| self.normalize(raw.as_ref())).collect()
    }

    /// Like [`normalize_batch`](Self::normalize_batch) but fails with the
    /// lowest-indexed unrecognised row.
    pub fn try_normalize_batch<S>(&self, raws: &[S]) -> Result<Vec<SalaryRecord>, RowError>
    where
        S: AsRef<str> + Sync,
    {
        self.normalize_batch(raws)
            .into_iter()
            .enumerate()
            .map(|(row, result)| result.map_err(|source| RowError { row, source }))
            .collect()
    }
}

/// Normalise with the default net-to-gross factor.
pub fn normalize(raw: &str) -> Result<SalaryRecord, ParseError> {
    DEFAULT_NORMALIZER.normalize(raw)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
