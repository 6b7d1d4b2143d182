pub mod extract;
pub mod highlight;
pub mod lines;
pub mod sections;

use serde::Serialize;
use tracing::debug;

use crate::catalog::HeaderCatalog;
use extract::SectionView;
use sections::FlushPolicy;

/// Structured form of one report, sections in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightDocument {
    pub sections: Vec<SectionView>,
}

impl InsightDocument {
    /// Two-pass pipeline: report text → sections → enriched section views.
    pub fn parse(text: &str, catalog: &HeaderCatalog, policy: FlushPolicy) -> Self {
        let sections: Vec<SectionView> = sections::segment(text, catalog, policy)
            .into_iter()
            .map(|section| extract::enrich(section, catalog))
            .collect();
        debug!(sections = sections.len(), "report parsed");
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, key: &str) -> Option<&SectionView> {
        self.sections.iter().find(|v| v.section.key == key)
    }
}

/// Parse with the built-in catalog and the default flush policy.
pub fn parse_report(text: &str) -> InsightDocument {
    InsightDocument::parse(text, &HeaderCatalog::default(), FlushPolicy::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty_document() {
        assert!(parse_report("").is_empty());
        assert!(parse_report("\n\n   \n").is_empty());
    }

    #[test]
    fn lookup_by_key() {
        let doc = parse_report("CHAMPION POOL\nS-TIER\n- Ahri: 65% WR, 12 games, pocket pick");
        let pool = doc.section("CHAMPION POOL").unwrap();
        assert_eq!(pool.section.title, "CHAMPION POOL");
        assert!(doc.section("ROADMAP").is_none());
    }

    #[test]
    fn custom_catalog_is_honored() {
        let catalog = HeaderCatalog::new(vec![crate::catalog::HeaderDescriptor {
            key: "LANING".into(),
            color: "#000000".into(),
            priority: crate::catalog::Priority::Medium,
            short_name: "Lane".into(),
        }])
        .unwrap();
        let doc = InsightDocument::parse(
            "EXECUTIVE SUMMARY\nignored\nLANING PHASE:\n- Trade when their jungler is topside",
            &catalog,
            FlushPolicy::NonEmpty,
        );
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].section.title, "LANING PHASE");
        assert_eq!(doc.sections[0].short_name.as_deref(), Some("Lane"));
    }
}
