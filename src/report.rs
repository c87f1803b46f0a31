//! Report: renders [`Row`]s as TSV or JSON lines.
//!
//! Both formats carry the same columns, in [`COLUMNS`] order. Range kind and
//! tax basis use their short table codes; absent values are empty (TSV) or
//! `null` (JSONL).

use std::io::Write;

use nabory_core::config::OutputFormat;
use serde::Serialize;

use crate::pipeline::Row;

/// Report column names, in output order.
pub const COLUMNS: &[&str] = &[
    "salary",
    "range_kind",
    "tax_basis",
    "lower_bound",
    "upper_bound",
    "fte",
    "vacancies",
    "position",
    "duties",
    "employer",
    "unit",
    "location",
    "url",
    "published",
];

#[derive(Serialize)]
struct JsonRow<'a> {
    salary: &'a str,
    range_kind: &'static str,
    tax_basis: Option<&'static str>,
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
    fte: Option<f64>,
    vacancies: u32,
    position: &'a str,
    duties: &'a str,
    employer: &'a str,
    unit: &'a str,
    location: &'a str,
    url: &'a str,
    published: &'a str,
}

impl<'a> From<&'a Row> for JsonRow<'a> {
    fn from(row: &'a Row) -> Self {
        Self {
            salary: &row.offer.salary,
            range_kind: row.salary.range_kind.code(),
            tax_basis: row.salary.tax_basis.code(),
            lower_bound: row.salary.lower_bound,
            upper_bound: row.salary.upper_bound,
            fte: row.workload.map(|w| w.fte()),
            vacancies: row.offer.vacancies,
            position: &row.offer.position,
            duties: &row.offer.duties,
            employer: &row.offer.employer,
            unit: &row.offer.unit,
            location: &row.offer.location,
            url: &row.offer.url,
            published: &row.offer.published,
        }
    }
}

/// Write `rows` in the requested format.
pub fn write_rows<W: Write>(out: &mut W, rows: &[Row], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Tsv => write_tsv(out, rows)?,
        OutputFormat::Jsonl => write_jsonl(out, rows)?,
    }
    out.flush()?;
    Ok(())
}

/// Header line followed by one line per row. Bounds use two decimals.
pub fn write_tsv<W: Write>(out: &mut W, rows: &[Row]) -> std::io::Result<()> {
    writeln!(out, "{}", COLUMNS.join("\t"))?;
    for row in rows {
        let cells = [
            cell(&row.offer.salary),
            row.salary.range_kind.code().to_string(),
            row.salary.tax_basis.code().unwrap_or_default().to_string(),
            amount(row.salary.lower_bound),
            amount(row.salary.upper_bound),
            row.workload.map(|w| format!("{}", w.fte())).unwrap_or_default(),
            row.offer.vacancies.to_string(),
            cell(&row.offer.position),
            cell(&row.offer.duties),
            cell(&row.offer.employer),
            cell(&row.offer.unit),
            cell(&row.offer.location),
            cell(&row.offer.url),
            cell(&row.offer.published),
        ];
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}

/// One JSON object per row.
pub fn write_jsonl<W: Write>(out: &mut W, rows: &[Row]) -> anyhow::Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *out, &JsonRow::from(row))?;
        writeln!(out)?;
    }
    Ok(())
}

fn amount(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}

fn cell(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}
