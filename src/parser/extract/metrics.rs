use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.?\d*%").unwrap());

pub const MAX_METRICS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub value: String,
    pub kind: MetricKind,
}

pub fn extract(content: &str) -> Vec<Metric> {
    PERCENT_RE
        .find_iter(content)
        .take(MAX_METRICS)
        .map(|m| Metric {
            value: m.as_str().to_string(),
            kind: MetricKind::Percentage,
        })
        .collect()
}
