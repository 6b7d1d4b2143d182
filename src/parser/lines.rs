use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static NUMERAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

const BULLET_MARKERS: &[char] = &['-', '•'];
const RECOMMENDATION_WORDS: &[&str] = &["keep", "practice", "avoid"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Bullet,
    Heading,
    Paragraph,
}

/// One trimmed content line with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub kind: LineKind,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let text = raw.trim();
        Self {
            kind: classify(text),
            text,
        }
    }

    /// Bullet text without its marker; other lines unchanged.
    pub fn payload(&self) -> &'a str {
        bullet_payload(self.text).unwrap_or(self.text)
    }

    pub fn is_bullet(&self) -> bool {
        self.kind == LineKind::Bullet
    }

    /// A bullet telling the player to keep, practice or avoid something.
    pub fn is_recommendation(&self) -> bool {
        if !self.is_bullet() {
            return false;
        }
        let payload = self.payload().to_lowercase();
        RECOMMENDATION_WORDS.iter().any(|w| payload.contains(w))
    }
}

/// Bullet, then numbered/upper-case heading, then paragraph.
/// A blank line is a paragraph; blank lines never reach section content.
pub fn classify(line: &str) -> LineKind {
    let t = line.trim();
    if t.is_empty() {
        return LineKind::Paragraph;
    }
    if t.starts_with(BULLET_MARKERS) {
        return LineKind::Bullet;
    }
    if NUMERAL_RE.is_match(t) || t == t.to_uppercase() {
        return LineKind::Heading;
    }
    LineKind::Paragraph
}

pub fn bullet_payload(line: &str) -> Option<&str> {
    let t = line.trim();
    let rest = t.strip_prefix(BULLET_MARKERS)?;
    Some(rest.trim())
}

/// Strip a leading `N.` numeral, if present.
pub fn strip_numeral(line: &str) -> Option<&str> {
    NUMERAL_RE.find(line).map(|m| &line[m.end()..])
}

/// Non-blank lines of a section body, classified.
pub fn content_lines(content: &str) -> impl Iterator<Item = Line<'_>> {
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(Line::parse)
}
