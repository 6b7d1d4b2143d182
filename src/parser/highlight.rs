use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\.?\d*%|\d+W|\d+L|✓|⚠️|KEEP PLAYING:|PRACTICE MORE:|AVOID/DODGE:").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Plain percentage or win/loss count.
    Metric,
    Good,
    Warning,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Metric => "metric",
            Tone::Good => "good",
            Tone::Warning => "warning",
            Tone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Span {
    Text { text: String },
    Marker { text: String, tone: Tone },
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Text { text } | Span::Marker { text, .. } => text,
        }
    }
}

fn tone_of(marker: &str) -> Tone {
    match marker {
        "✓" | "KEEP PLAYING:" => Tone::Good,
        "⚠️" | "AVOID/DODGE:" => Tone::Warning,
        "PRACTICE MORE:" => Tone::Neutral,
        _ => Tone::Metric,
    }
}

/// Split a line into plain and marker spans. Concatenating every span's text
/// gives back `line` unchanged.
pub fn tokenize(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in MARKER_RE.find_iter(line) {
        if m.start() > last {
            spans.push(Span::Text {
                text: line[last..m.start()].to_string(),
            });
        }
        spans.push(Span::Marker {
            text: m.as_str().to_string(),
            tone: tone_of(m.as_str()),
        });
        last = m.end();
    }

    if last < line.len() {
        spans.push(Span::Text {
            text: line[last..].to_string(),
        });
    }

    spans
}
