use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::parser::lines::bullet_payload;

// `<label>: <current> ... | Target...: <target>`
static PIPE_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([^:]+):\s*([\d.]+)[^|]*\|\s*Target[^:]*:\s*([\d.]+)").unwrap()
});
// Known stat labels, no pipe required before the target clause.
static STAT_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(CS/min|KDA|Vision):\s*([\d.]+)[^|]*Target[^:]*:\s*([\d.]+)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkStatus {
    Good,
    Close,
    Focus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkPair {
    pub metric: String,
    pub current: f64,
    pub target: f64,
}

impl BenchmarkPair {
    /// `current / target * 100`, or `None` for a zero target.
    pub fn percentage(&self) -> Option<f64> {
        if self.target == 0.0 {
            return None;
        }
        Some(self.current / self.target * 100.0)
    }

    /// Good at 95% of target or better, close from 85%.
    pub fn status(&self) -> Option<BenchmarkStatus> {
        let pct = self.percentage()?;
        Some(if pct >= 95.0 {
            BenchmarkStatus::Good
        } else if pct >= 85.0 {
            BenchmarkStatus::Close
        } else {
            BenchmarkStatus::Focus
        })
    }
}

fn pair_from(re: &Regex, line: &str) -> Option<BenchmarkPair> {
    let caps = re.captures(line)?;
    let label = caps[1].trim();
    let label = bullet_payload(label).unwrap_or(label);
    if label.is_empty() {
        return None;
    }
    Some(BenchmarkPair {
        metric: label.to_string(),
        current: caps[2].parse().ok()?,
        target: caps[3].parse().ok()?,
    })
}

/// Generic pipe form first, then the known-stat form.
pub fn match_line(line: &str) -> Option<BenchmarkPair> {
    pair_from(&PIPE_TARGET_RE, line).or_else(|| pair_from(&STAT_TARGET_RE, line))
}

pub fn extract(content: &str) -> Vec<BenchmarkPair> {
    content.lines().filter_map(match_line).collect()
}
