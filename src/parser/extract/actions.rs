use crate::parser::lines::content_lines;

pub const MAX_ACTION_ITEMS: usize = 5;
const MIN_LEN: usize = 10;
const MAX_LEN: usize = 150;

/// Bullet payloads of reasonable length, at most five per section.
pub fn extract(content: &str) -> Vec<String> {
    content_lines(content)
        .filter(|line| line.is_bullet())
        .map(|line| line.payload())
        .filter(|text| (MIN_LEN..MAX_LEN).contains(&text.chars().count()))
        .take(MAX_ACTION_ITEMS)
        .map(str::to_string)
        .collect()
}

/// Every bullet line, regardless of length.
pub fn count_tips(content: &str) -> usize {
    content_lines(content).filter(|line| line.is_bullet()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_bullets_in_bounds() {
        let long = format!("- {}", "x".repeat(150));
        let content = format!(
            "Intro paragraph that is long enough\n- short\n- Ward the river before dragon\n{long}\n• Track the enemy jungler"
        );
        assert_eq!(
            extract(&content),
            vec!["Ward the river before dragon", "Track the enemy jungler"]
        );
    }

    #[test]
    fn lower_bound_is_inclusive() {
        assert_eq!(extract("- 0123456789"), vec!["0123456789"]);
        assert!(extract("- 012345678").is_empty());
    }

    #[test]
    fn capped_at_five() {
        let content = (1..=8)
            .map(|i| format!("- Action item number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let items = extract(&content);
        assert_eq!(items.len(), MAX_ACTION_ITEMS);
        assert_eq!(items[4], "Action item number 5");
    }

    #[test]
    fn tip_count_ignores_length() {
        assert_eq!(count_tips("- a\n- b\nplain\n• c"), 3);
    }
}
