//! 예측표와 비교표를 텍스트 표, CSV, JSON으로 출력한다.

use std::fmt::Write as _;

use serde::Serialize;

use crate::comparison::{Comparison, ComparisonRow};
use crate::config::OutputFormat;
use crate::i18n::{keys, Translator};
use crate::projection::ProjectionTable;

/// 출력 생성 중 발생 가능한 오류.
#[derive(Debug)]
pub enum ReportError {
    /// CSV 기록 오류
    Csv(csv::Error),
    /// JSON 직렬화 오류
    Json(serde_json::Error),
    /// CSV 버퍼가 UTF-8이 아님
    Encoding(std::string::FromUtf8Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Csv(e) => write!(f, "CSV 출력 오류: {e}"),
            ReportError::Json(e) => write!(f, "JSON 출력 오류: {e}"),
            ReportError::Encoding(e) => write!(f, "출력 인코딩 오류: {e}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<csv::Error> for ReportError {
    fn from(value: csv::Error) -> Self {
        ReportError::Csv(value)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(value: serde_json::Error) -> Self {
        ReportError::Json(value)
    }
}

impl From<std::string::FromUtf8Error> for ReportError {
    fn from(value: std::string::FromUtf8Error) -> Self {
        ReportError::Encoding(value)
    }
}

/// 단일 차량 예측표를 출력한다.
pub fn render_projection(
    table: &ProjectionTable,
    format: OutputFormat,
    tr: &Translator,
) -> Result<String, ReportError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
        OutputFormat::Csv => to_csv(table.rows()),
        OutputFormat::Table => {
            let headers = [
                tr.t(keys::COL_YEAR),
                tr.t(keys::COL_MARKET_VALUE),
                tr.t(keys::COL_FUEL),
                tr.t(keys::COL_MAINTENANCE),
                tr.t(keys::COL_OPPORTUNITY),
                tr.t(keys::COL_TOTAL),
                tr.t(keys::COL_CUMULATIVE),
            ];
            let body = table
                .iter()
                .map(|r| {
                    vec![
                        r.year.to_string(),
                        format_amount(r.market_value),
                        format_amount(r.discounted_fuel_cost),
                        format_amount(r.discounted_maintenance_cost),
                        format_amount(r.discounted_opportunity_cost),
                        format_amount(r.total_discounted_cost),
                        format_amount(r.cumulative_discounted_cost),
                    ]
                })
                .collect::<Vec<_>>();
            let mut out = layout(&headers, &body);
            let _ = writeln!(
                out,
                "\n{} {}",
                tr.t(keys::SUMMARY_TOTAL_DISCOUNTED),
                format_amount(table.total_discounted_cost())
            );
            let _ = writeln!(
                out,
                "{} {}",
                tr.t(keys::SUMMARY_TOTAL_NOMINAL),
                format_amount(table.total_nominal_cost())
            );
            Ok(out)
        }
    }
}

#[derive(Serialize)]
struct ComparisonJson<'a> {
    current: &'a ProjectionTable,
    planned: &'a ProjectionTable,
    rows: Vec<ComparisonRow>,
    final_difference: f64,
}

/// 두 차량 비교표를 출력한다.
pub fn render_comparison(
    comparison: &Comparison,
    format: OutputFormat,
    tr: &Translator,
) -> Result<String, ReportError> {
    let rows = comparison.rows();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ComparisonJson {
            current: &comparison.current,
            planned: &comparison.planned,
            rows,
            final_difference: comparison.final_difference(),
        })?),
        OutputFormat::Csv => to_csv(&rows),
        OutputFormat::Table => {
            let headers = [
                tr.t(keys::COL_YEAR),
                tr.t(keys::COL_CURRENT_TOTAL),
                tr.t(keys::COL_PLANNED_TOTAL),
                tr.t(keys::COL_CURRENT_CUMULATIVE),
                tr.t(keys::COL_PLANNED_CUMULATIVE),
                tr.t(keys::COL_DIFFERENCE),
            ];
            let body = rows
                .iter()
                .map(|r| {
                    vec![
                        r.year.to_string(),
                        format_amount(r.current_total_discounted_cost),
                        format_amount(r.planned_total_discounted_cost),
                        format_amount(r.current_cumulative_discounted_cost),
                        format_amount(r.planned_cumulative_discounted_cost),
                        format_amount(r.cumulative_difference),
                    ]
                })
                .collect::<Vec<_>>();
            let mut out = layout(&headers, &body);
            let _ = writeln!(
                out,
                "\n{} {}",
                tr.t(keys::SUMMARY_FINAL_DIFFERENCE),
                format_amount(comparison.final_difference())
            );
            Ok(out)
        }
    }
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

/// 열 너비를 맞춰 오른쪽 정렬한 표를 만든다.
fn layout(headers: &[&str], body: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad_left(h, *w))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{header_line}");
    let total_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    let _ = writeln!(out, "{}", "-".repeat(total_width));
    for row in body {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_left(c, *w))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{line}");
    }
    out
}

fn pad_left(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{s}", " ".repeat(width.saturating_sub(len)))
}

/// 천 단위 구분 기호와 소수 둘째 자리로 금액을 표기한다.
pub fn format_amount(value: f64) -> String {
    let raw = format!("{:.2}", value.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && raw != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
