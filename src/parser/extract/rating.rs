use std::sync::LazyLock;

use regex::Regex;

// "B-TIER" reads as grade B; "B- grade" as B-.
static GRADE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:(?P<joined>[A-F])-(?i:tier|grade|rating)|(?P<grade>[A-F][+-]?)\s*(?i:tier|grade|rating))\b",
    )
    .unwrap()
});
static GLYPH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("✓|✗|⚠\u{FE0F}?").unwrap());

/// Explicit grade phrase first, then the first status glyph.
pub fn extract(content: &str) -> Option<String> {
    if let Some(caps) = GRADE_RE.captures(content) {
        let grade = caps.name("joined").or_else(|| caps.name("grade"))?;
        return Some(grade.as_str().to_string());
    }

    let glyph = GLYPH_RE.find(content)?;
    let grade = match glyph.as_str() {
        "✓" => "A",
        "✗" => "F",
        _ => "C",
    };
    Some(grade.to_string())
}
