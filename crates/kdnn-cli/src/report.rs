// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use serde::Serialize;

use crate::experiment::ExperimentResult;

/// Serializable view of an [`ExperimentResult`]; durations in nanoseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// Dimensionality.
    pub k: usize,
    /// Training points.
    pub points: usize,
    /// Query targets.
    pub queries: usize,
    /// Build time in nanoseconds.
    pub build_ns: u64,
    /// Total tree query time in nanoseconds.
    pub tree_query_ns: u64,
    /// Total brute-force time in nanoseconds.
    pub brute_query_ns: u64,
    /// Brute-force time over tree time.
    pub speedup: f64,
    /// Agreeing queries, when verification ran.
    pub agreements: Option<usize>,
}

impl From<&ExperimentResult> for ResultRecord {
    fn from(r: &ExperimentResult) -> Self {
        Self {
            k: r.k,
            points: r.points,
            queries: r.queries,
            build_ns: nanos(r.build),
            tree_query_ns: nanos(r.tree_query),
            brute_query_ns: nanos(r.brute_query),
            speedup: r.speedup(),
            agreements: r.agreements,
        }
    }
}

fn nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// Renders results as a human-readable table.
pub fn render_table(results: &[ExperimentResult]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "k",
        "points",
        "build",
        "tree query",
        "brute force",
        "speedup",
        "agreement",
    ]);
    for r in results {
        let agreement = r
            .agreements
            .map_or_else(|| "-".to_owned(), |a| format!("{a}/{}", r.queries));
        table.add_row(vec![
            Cell::new(r.k).set_alignment(CellAlignment::Right),
            Cell::new(r.points).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3?}", r.build)),
            Cell::new(format!("{:.3?}", r.tree_query)),
            Cell::new(format!("{:.3?}", r.brute_query)),
            Cell::new(format!("{:.1}x", r.speedup())).set_alignment(CellAlignment::Right),
            Cell::new(agreement),
        ]);
    }
    table.to_string()
}

/// Renders results as a pretty-printed JSON array of [`ResultRecord`]s.
pub fn render_json(results: &[ExperimentResult]) -> serde_json::Result<String> {
    let records: Vec<ResultRecord> = results.iter().map(ResultRecord::from).collect();
    serde_json::to_string_pretty(&records)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> ExperimentResult {
        ExperimentResult {
            k: 5,
            points: 1_000,
            queries: 1_000,
            build: Duration::from_micros(1_500),
            tree_query: Duration::from_millis(2),
            brute_query: Duration::from_millis(20),
            agreements: Some(1_000),
        }
    }

    #[test]
    fn table_lists_each_experiment() {
        let out = render_table(&[sample()]);
        assert!(out.contains("brute force"));
        assert!(out.contains("1000/1000"));
        assert!(out.contains("10.0x"));
    }

    #[test]
    fn json_uses_nanoseconds() {
        let out = render_json(&[sample()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["k"], 5);
        assert_eq!(value[0]["build_ns"], 1_500_000);
        assert_eq!(value[0]["tree_query_ns"], 2_000_000);
        assert_eq!(value[0]["agreements"], 1_000);
    }

    #[test]
    fn unverified_rows_show_placeholder() {
        let mut r = sample();
        r.agreements = None;
        let out = render_table(&[r.clone()]);
        assert!(out.contains('-'));
        let json = render_json(&[r]).unwrap();
        assert!(json.contains("\"agreements\": null"));
    }
}
