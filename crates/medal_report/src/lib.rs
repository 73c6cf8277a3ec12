//! medal_report — pure offline renderers for ranked standings.
//!
//! No I/O here; callers supply the already-ranked sequence. Rank is a derived
//! display attribute: it is the 1-based position in the supplied order and is
//! never stored on the records themselves. Stable column/field order across
//! all renderers.

#![forbid(unsafe_code)]

use core::fmt;

use serde::Serialize;

use medal_core::MedalRecord;

#[derive(Debug)]
pub enum ReportError {
    Json(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Json(msg) => write!(f, "json render error: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// One rendered row: 1-based rank plus the record fields.
#[derive(Debug, Serialize)]
struct RankedRow<'a> {
    rank: usize,
    code: &'a str,
    gold: u32,
    silver: u32,
    bronze: u32,
    total: u64,
}

fn rows(ranked: &[MedalRecord]) -> impl Iterator<Item = RankedRow<'_>> {
    ranked.iter().enumerate().map(|(i, r)| RankedRow {
        rank: i + 1,
        code: &r.code,
        gold: r.gold,
        silver: r.silver,
        bronze: r.bronze,
        total: r.total,
    })
}

/// Fixed-width text table. Empty input renders the header only.
pub fn render_text(ranked: &[MedalRecord]) -> String {
    let code_width = ranked
        .iter()
        .map(|r| r.code.len())
        .chain(core::iter::once("Code".len()))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<code_width$}  {:>6}  {:>6}  {:>6}  {:>6}\n",
        "Rank", "Code", "Gold", "Silver", "Bronze", "Total"
    ));
    for row in rows(ranked) {
        out.push_str(&format!(
            "{:>4}  {:<code_width$}  {:>6}  {:>6}  {:>6}  {:>6}\n",
            row.rank, row.code, row.gold, row.silver, row.bronze, row.total
        ));
    }
    out
}

/// JSON array of row objects; field order follows the struct layout.
pub fn render_json(ranked: &[MedalRecord]) -> Result<String, ReportError> {
    let rows: Vec<RankedRow<'_>> = rows(ranked).collect();
    serde_json::to_string_pretty(&rows).map_err(|e| ReportError::Json(e.to_string()))
}

/// CSV with a fixed header row. Codes are plain tokens; no quoting needed.
pub fn render_csv(ranked: &[MedalRecord]) -> String {
    let mut out = String::from("rank,code,gold,silver,bronze,total\n");
    for row in rows(ranked) {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            row.rank, row.code, row.gold, row.silver, row.bronze, row.total
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use medal_core::CountryMedals;

    fn ranked() -> Vec<MedalRecord> {
        [("NOR", 16, 8, 13), ("GER", 12, 10, 5)]
            .into_iter()
            .map(|(code, gold, silver, bronze)| {
                MedalRecord::from_counts(CountryMedals {
                    code: code.to_string(),
                    gold,
                    silver,
                    bronze,
                })
            })
            .collect()
    }

    #[test]
    fn csv_has_header_and_one_line_per_record() {
        let csv = render_csv(&ranked());
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "rank,code,gold,silver,bronze,total");
        assert_eq!(lines[1], "1,NOR,16,8,13,37");
        assert_eq!(lines[2], "2,GER,12,10,5,27");
    }

    #[test]
    fn json_rows_carry_one_based_rank() {
        let json = render_json(&ranked()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["rank"], 1);
        assert_eq!(value[0]["code"], "NOR");
        assert_eq!(value[1]["rank"], 2);
        assert_eq!(value[1]["total"], 27);
    }

    #[test]
    fn text_table_lists_all_rows() {
        let text = render_text(&ranked());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Rank"));
        assert!(lines[1].contains("NOR"));
        assert!(lines[2].contains("GER"));
    }

    #[test]
    fn empty_input_renders_header_only() {
        assert_eq!(render_text(&[]).lines().count(), 1);
        assert_eq!(render_csv(&[]).lines().count(), 1);
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
