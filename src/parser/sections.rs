use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lines::strip_numeral;
use crate::catalog::HeaderCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub key: String,
    pub content: String,
}

/// What to do with a section whose header is followed directly by another
/// header (or end of input).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlushPolicy {
    /// Drop sections that collected no content lines.
    #[default]
    NonEmpty,
    /// Emit every opened section, even with empty content.
    Always,
}

struct OpenSection {
    title: String,
    key: String,
    lines: Vec<String>,
}

/// Split a report into titled sections at every line containing a catalog key.
/// Text before the first header is discarded; blank lines never reach content.
pub fn segment(text: &str, catalog: &HeaderCatalog, policy: FlushPolicy) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<OpenSection> = None;

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(header) = catalog.match_line(trimmed) {
            if let Some(open) = current.take() {
                flush(open, policy, &mut sections);
            }
            let title = header_title(trimmed, &header.key);
            debug!(title = %title, key = %header.key, "section opened");
            current = Some(OpenSection {
                title,
                key: header.key.clone(),
                lines: Vec::new(),
            });
            continue;
        }

        if let Some(open) = current.as_mut() {
            if !trimmed.is_empty() {
                open.lines.push(line.to_string());
            }
        }
    }

    if let Some(open) = current {
        flush(open, policy, &mut sections);
    }

    sections
}

fn flush(open: OpenSection, policy: FlushPolicy, out: &mut Vec<Section>) {
    if open.lines.is_empty() && policy == FlushPolicy::NonEmpty {
        debug!(title = %open.title, "dropping empty section");
        return;
    }
    out.push(Section {
        title: open.title,
        key: open.key,
        content: open.lines.join("\n"),
    });
}

/// `"2. STRENGTHS ANALYSIS:"` -> `"STRENGTHS ANALYSIS"`.
fn header_title(line: &str, key: &str) -> String {
    let line = line.trim();
    let line = line.strip_suffix(':').unwrap_or(line);
    let line = strip_numeral(line).unwrap_or(line).trim();
    if line.is_empty() {
        key.to_string()
    } else {
        line.to_string()
    }
}
