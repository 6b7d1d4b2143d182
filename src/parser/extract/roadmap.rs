use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::parser::lines::content_lines;

static PHASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)DAYS?\s*(?P<d1>\d+)\s*[-–]\s*(?P<d2>\d+)|WEEKS?\s*(?P<w1>\d+)\s*[-–]\s*(?P<w2>\d+)")
        .unwrap()
});
static EXPECTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Expected\s*Results?:\s*(.+)").unwrap());

const MIN_GOAL_LEN: usize = 10;
const MAX_GOAL_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    pub start: u32,
    pub end: u32,
    pub title: String,
    pub goals: Vec<String>,
    pub metrics: Vec<String>,
}

/// Day range named by a phase header. `WEEK a-b` covers days `(a-1)*7+1 ..= b*7`.
pub fn match_phase_header(line: &str) -> Option<(u32, u32)> {
    let caps = PHASE_RE.captures(line)?;
    if let (Some(a), Some(b)) = (caps.name("d1"), caps.name("d2")) {
        let start = a.as_str().parse().ok()?;
        let end = b.as_str().parse().ok()?;
        return Some((start, end));
    }
    let a: u32 = caps.name("w1")?.as_str().parse().ok()?;
    let b: u32 = caps.name("w2")?.as_str().parse().ok()?;
    let start = a.checked_sub(1)?.checked_mul(7)?.checked_add(1)?;
    let end = b.checked_mul(7)?;
    Some((start, end))
}

pub fn match_expected_result(line: &str) -> Option<&str> {
    EXPECTED_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// A line naming a day or week range opens a phase, bulleted or not, and is
/// never a goal. `Expected Results:` attaches to the open phase, including
/// the one the same line just opened.
pub fn extract(content: &str) -> Vec<RoadmapPhase> {
    let mut phases: Vec<RoadmapPhase> = Vec::new();

    for line in content_lines(content) {
        let header = match_phase_header(line.text);
        if let Some((start, end)) = header {
            trace!(start, end, "roadmap phase");
            phases.push(RoadmapPhase {
                start,
                end,
                title: line.payload().to_string(),
                goals: Vec::new(),
                metrics: Vec::new(),
            });
        }

        let Some(phase) = phases.last_mut() else { continue };
        if header.is_none() && line.is_bullet() {
            let goal = line.payload();
            if (MIN_GOAL_LEN..MAX_GOAL_LEN).contains(&goal.chars().count()) {
                phase.goals.push(goal.to_string());
            }
        }
        if let Some(result) = match_expected_result(line.text) {
            phase.metrics.push(result.to_string());
        }
    }

    phases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_phase() {
        let phases = extract("DAYS 1-7\n- Fix wave management\nExpected Results: +1 CS/min");
        assert_eq!(
            phases,
            vec![RoadmapPhase {
                start: 1,
                end: 7,
                title: "DAYS 1-7".into(),
                goals: vec!["Fix wave management".into()],
                metrics: vec!["+1 CS/min".into()],
            }]
        );
    }

    #[test]
    fn weeks_become_days() {
        assert_eq!(match_phase_header("WEEK 3-4: Climb"), Some((15, 28)));
        assert_eq!(match_phase_header("Week 1–2"), Some((1, 14)));
        assert_eq!(match_phase_header("week 0-1"), None);
    }

    #[test]
    fn en_dash_and_case() {
        assert_eq!(match_phase_header("days 8–14 (consolidate)"), Some((8, 14)));
        assert_eq!(match_phase_header("Day 15 - 30"), Some((15, 30)));
        assert_eq!(match_phase_header("No phase here"), None);
    }

    #[test]
    fn oversized_numbers_do_not_open_a_phase() {
        assert_eq!(match_phase_header("DAYS 1-99999999999"), None);
        assert!(extract("DAYS 1-99999999999\n- A goal that is long enough").is_empty());
    }

    #[test]
    fn phases_in_order_and_never_reopened() {
        let content = "\
DAYS 1-7: Foundation
- Ward every back before 10 minutes
- short
DAYS 8-14: Pressure
- Take first tower with jungle
Expected Results: first tower in 60% of games
Expected Result: fewer early deaths";
        let phases = extract(content);
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].title, "DAYS 1-7: Foundation");
        assert_eq!(phases[0].goals, vec!["Ward every back before 10 minutes"]);
        assert!(phases[0].metrics.is_empty());
        assert_eq!((phases[1].start, phases[1].end), (8, 14));
        assert_eq!(
            phases[1].metrics,
            vec!["first tower in 60% of games", "fewer early deaths"]
        );
    }

    #[test]
    fn lines_before_first_phase_are_ignored() {
        let phases = extract("- Preamble goal that is long\nExpected Results: nothing\nWEEK 1-1\n- Now it counts for real");
        assert_eq!(phases.len(), 1);
        assert_eq!((phases[0].start, phases[0].end), (1, 7));
        assert_eq!(phases[0].goals, vec!["Now it counts for real"]);
        assert!(phases[0].metrics.is_empty());
    }

    #[test]
    fn bulleted_expected_result_is_goal_and_metric() {
        let phases = extract("DAYS 1-3\n- Expected Results: two more kills");
        assert_eq!(phases[0].goals, vec!["Expected Results: two more kills"]);
        assert_eq!(phases[0].metrics, vec!["two more kills"]);
    }

    #[test]
    fn bulleted_phase_headers_open_phases() {
        let phases = extract(
            "- DAYS 1-7: Foundation\n- Ward every time you back\n- WEEK 2-3: Climb\n- Play two focused games per day",
        );
        assert_eq!(phases.len(), 2);
        assert_eq!((phases[0].start, phases[0].end), (1, 7));
        assert_eq!(phases[0].title, "DAYS 1-7: Foundation");
        assert_eq!(phases[0].goals, vec!["Ward every time you back"]);
        assert_eq!((phases[1].start, phases[1].end), (8, 21));
        assert_eq!(phases[1].goals, vec!["Play two focused games per day"]);
    }

    #[test]
    fn expected_result_naming_a_range_keeps_its_metric() {
        let phases = extract("DAYS 1-7\n- Ward every time you back\nExpected Results: +2 CS by days 8-14");
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].goals, vec!["Ward every time you back"]);
        assert_eq!((phases[1].start, phases[1].end), (8, 14));
        assert_eq!(phases[1].metrics, vec!["+2 CS by days 8-14"]);
        assert!(phases[1].goals.is_empty());
    }
}
