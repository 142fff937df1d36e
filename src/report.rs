// Ranking and report rendering.
// Sorts aggregate totals and formats the summary and per-repository table.

use indexmap::IndexMap;

use crate::aggregate::qualifying;
use crate::github::{LanguageMap, Repository};

/// Gutter between table columns.
const TABLE_GUTTER: &str = "  ";

/// Rank languages by descending byte count, truncated to `top_n`.
///
/// The sort is stable over first-encounter order, so equal counts keep the
/// order the aggregator saw them in.
pub fn rank(totals: &IndexMap<String, u64>, top_n: usize) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = totals
        .iter()
        .map(|(language, bytes)| (language.clone(), *bytes))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);
    ranked
}

/// Share of the grand total, in percent.
///
/// The denominator is the total over all aggregated languages, so the
/// displayed top-N percentages may sum to less than 100.
pub fn percentage(bytes: u64, grand_total: u64) -> f64 {
    if grand_total == 0 {
        return 0.0;
    }
    bytes as f64 / grand_total as f64 * 100.0
}

/// Render the numbered ranking with percentages.
pub fn render_summary(ranked: &[(String, u64)], grand_total: u64) -> String {
    let mut lines = Vec::with_capacity(ranked.len() + 1);
    lines.push(format!(
        "--- Top {} Languages Across All Repositories ---",
        ranked.len()
    ));
    for (i, (language, bytes)) in ranked.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {:<15} {:>6.2}%",
            i + 1,
            language,
            percentage(*bytes, grand_total)
        ));
    }
    lines.join("\n")
}

/// Render the per-repository breakdown table.
///
/// One row per qualifying repository, one column per ranked language; a
/// repository missing a language shows 0. Columns fit their widest value,
/// left-justified, with a dashed line between header and data.
pub fn render_table(
    repos: &[Repository],
    used: &IndexMap<String, LanguageMap>,
    ranked: &[(String, u64)],
    include_forks: bool,
) -> String {
    let rows: Vec<&Repository> = qualifying(repos, include_forks).collect();

    let mut headers = Vec::with_capacity(ranked.len() + 1);
    headers.push("Repository".to_string());
    headers.extend(ranked.iter().map(|(language, _)| language.clone()));

    let cell = |repo: &Repository, language: &str| -> String {
        used.get(&repo.full_name)
            .and_then(|languages| languages.get(language))
            .copied()
            .unwrap_or(0)
            .to_string()
    };

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for repo in &rows {
        widths[0] = widths[0].max(repo.name.len());
        for (i, (language, _)) in ranked.iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(cell(repo, language).len());
        }
    }

    let render_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths.iter().copied())
            .map(|(value, width)| format!("{:<w$}", value, w = width))
            .collect::<Vec<_>>()
            .join(TABLE_GUTTER)
            .trim_end()
            .to_string()
    };

    let total_width =
        widths.iter().sum::<usize>() + TABLE_GUTTER.len() * widths.len().saturating_sub(1);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(&headers));
    lines.push("-".repeat(total_width));
    for repo in &rows {
        let mut cells = Vec::with_capacity(ranked.len() + 1);
        cells.push(repo.name.clone());
        cells.extend(ranked.iter().map(|(language, _)| cell(repo, language)));
        lines.push(render_row(&cells));
    }
    lines.join("\n")
}
