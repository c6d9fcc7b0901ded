//! Parameter-count accuracy heuristic

use std::sync::LazyLock;

use regex::Regex;

/// Lowest score any model receives
const ACCURACY_FLOOR: u8 = 40;

/// (minimum billions of parameters, score), ascending
const SIZE_SCORES: &[(f64, u8)] = &[
    (0.0, 40),
    (1.0, 45),
    (3.0, 50),
    (7.0, 60),
    (13.0, 70),
    (30.0, 78),
    (65.0, 85),
    (100.0, 90),
    (300.0, 95),
];

static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:(\d+)\s*x\s*)?(\d+(?:\.\d+)?)\s*([bmt])\b").unwrap());

/// Parse a size label such as `8B`, `1.5B`, `500M` or `8x7B` into billions
///
/// Mixture-of-experts labels multiply expert count by expert size.
pub fn parse_size_label(label: &str) -> Option<f64> {
    let captures = SIZE_RE.captures(label.trim())?;

    let size: f64 = captures.get(2)?.as_str().parse().ok()?;
    let billions = match captures.get(3)?.as_str().to_ascii_lowercase().as_str() {
        "m" => size / 1000.0,
        "t" => size * 1000.0,
        _ => size,
    };
    let experts: f64 = captures
        .get(1)
        .map_or(Ok(1.0), |m| m.as_str().parse())
        .ok()?;

    Some(experts * billions)
}

/// Accuracy estimate from model size, used only when no quality data exists
pub fn score_accuracy_by_size(size_label: &str) -> u8 {
    let Some(billions) = parse_size_label(size_label) else {
        tracing::debug!(size_label, "unparseable size label");
        return ACCURACY_FLOOR;
    };

    SIZE_SCORES
        .iter()
        .rev()
        .find(|(threshold, _)| billions >= *threshold)
        .map_or(ACCURACY_FLOOR, |(_, score)| (*score).max(ACCURACY_FLOOR))
}
