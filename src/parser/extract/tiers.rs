use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::parser::lines::content_lines;

static S_TIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)S[-\s]?TIER|YOUR POCKET PICKS|ACTUALLY BUILT DIFFERENT").unwrap()
});
static B_TIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)B[-\s]?TIER|SITUATIONAL|DON'T INT YOUR PROMOS").unwrap()
});
static C_TIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)C[-\s]?TIER|DODGE LIST|RESPECTFULLY.*DON'T").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Z][a-zA-Z' ]+):").unwrap());
static WIN_RATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+\.?\d*)%\s*WR").unwrap());
static GAMES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*games").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    S,
    B,
    C,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionTierEntry {
    pub name: String,
    pub win_rate: Option<f64>,
    pub games: Option<u32>,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct TierRoster {
    pub s: Vec<ChampionTierEntry>,
    pub b: Vec<ChampionTierEntry>,
    pub c: Vec<ChampionTierEntry>,
}

impl TierRoster {
    pub fn tier(&self, tier: Tier) -> &[ChampionTierEntry] {
        match tier {
            Tier::S => &self.s,
            Tier::B => &self.b,
            Tier::C => &self.c,
        }
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut Vec<ChampionTierEntry> {
        match tier {
            Tier::S => &mut self.s,
            Tier::B => &mut self.b,
            Tier::C => &mut self.c,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty() && self.b.is_empty() && self.c.is_empty()
    }
}

/// Tier announced by a header line, S checked before B before C.
pub fn match_tier_header(line: &str) -> Option<Tier> {
    if S_TIER_RE.is_match(line) {
        Some(Tier::S)
    } else if B_TIER_RE.is_match(line) {
        Some(Tier::B)
    } else if C_TIER_RE.is_match(line) {
        Some(Tier::C)
    } else {
        None
    }
}

/// Parse a bullet payload of the form `Name: stats, note`.
pub fn match_entry(payload: &str) -> Option<ChampionTierEntry> {
    let caps = NAME_RE.captures(payload)?;
    let name = caps[1].trim().to_string();

    let win_rate = WIN_RATE_RE
        .captures(payload)
        .and_then(|c| c[1].parse::<f64>().ok());
    let games = GAMES_RE
        .captures(payload)
        .and_then(|c| c[1].parse::<u32>().ok());

    let rest = payload.split_once(':').map(|(_, r)| r).unwrap_or("");
    Some(ChampionTierEntry {
        name,
        win_rate,
        games,
        note: note_from(rest),
    })
}

/// Commentary left after removing the win-rate and games fragments.
fn note_from(rest: &str) -> String {
    let stripped = WIN_RATE_RE.replace_all(rest, "");
    let stripped = GAMES_RE.replace_all(&stripped, "");
    stripped
        .split(',')
        .map(|part| part.trim_matches(|c: char| c.is_whitespace() || "()-–|".contains(c)))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Any line naming a tier switches to it and emits nothing, bulleted or not.
/// Other bullets under a tier become entries.
pub fn extract(content: &str) -> TierRoster {
    let mut roster = TierRoster::default();
    let mut current: Option<Tier> = None;

    for line in content_lines(content) {
        if let Some(tier) = match_tier_header(line.text) {
            current = Some(tier);
            continue;
        }
        let Some(tier) = current.filter(|_| line.is_bullet()) else {
            continue;
        };
        if let Some(entry) = match_entry(line.payload()) {
            trace!(?tier, name = %entry.name, "champion entry");
            roster.tier_mut(tier).push(entry);
        }
    }

    roster
}
