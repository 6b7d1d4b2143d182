pub mod actions;
pub mod benchmarks;
pub mod metrics;
pub mod practice;
pub mod rating;
pub mod roadmap;
pub mod tiers;

use serde::Serialize;
use tracing::trace;

use super::sections::Section;
use crate::catalog::{HeaderCatalog, Priority};
use benchmarks::BenchmarkPair;
use metrics::Metric;
use practice::PracticeMethod;
use roadmap::RoadmapPhase;
use tiers::TierRoster;

const PREVIEW_CHARS: usize = 80;

/// Section-specific structure; which variant applies depends on the section key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Enrichment {
    ChampionTiers(TierRoster),
    PracticeMethod(PracticeMethod),
    Roadmap(Vec<RoadmapPhase>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecialKind {
    ChampionPool,
    Practice,
    Roadmap,
}

fn special_kind(section: &Section) -> Option<SpecialKind> {
    match section.key.as_str() {
        "CHAMPION POOL" => Some(SpecialKind::ChampionPool),
        "PRACTICE STRUCTURE" | "CRITICAL IMPROVEMENT" | "IMPROVEMENT" => {
            Some(SpecialKind::Practice)
        }
        "ROADMAP" => Some(SpecialKind::Roadmap),
        _ if section.title.contains("30/60/90") => Some(SpecialKind::Roadmap),
        _ => None,
    }
}

/// One section plus everything mined from its content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    #[serde(flatten)]
    pub section: Section,
    pub color: Option<String>,
    pub priority: Option<Priority>,
    pub short_name: Option<String>,
    pub preview: Option<String>,
    pub tip_count: usize,
    pub action_items: Vec<String>,
    pub metrics: Vec<Metric>,
    pub rating: Option<String>,
    pub benchmarks: Vec<BenchmarkPair>,
    pub enrichment: Option<Enrichment>,
}

pub fn enrich(section: Section, catalog: &HeaderCatalog) -> SectionView {
    let descriptor = catalog.get(&section.key);
    let content = section.content.as_str();

    let enrichment = special_kind(&section).map(|kind| match kind {
        SpecialKind::ChampionPool => Enrichment::ChampionTiers(tiers::extract(content)),
        SpecialKind::Practice => Enrichment::PracticeMethod(practice::extract(content)),
        SpecialKind::Roadmap => Enrichment::Roadmap(roadmap::extract(content)),
    });

    let view = SectionView {
        color: descriptor.map(|d| d.color.clone()),
        priority: descriptor.map(|d| d.priority),
        short_name: descriptor.map(|d| d.short_name.clone()),
        preview: preview(content),
        tip_count: actions::count_tips(content),
        action_items: actions::extract(content),
        metrics: metrics::extract(content),
        rating: rating::extract(content),
        benchmarks: benchmarks::extract(content),
        enrichment,
        section,
    };
    trace!(
        title = %view.section.title,
        actions = view.action_items.len(),
        benchmarks = view.benchmarks.len(),
        "section enriched"
    );
    view
}

/// First non-blank line, cut to 80 characters with a trailing ellipsis.
pub fn preview(content: &str) -> Option<String> {
    let first = content.lines().map(str::trim).find(|l| !l.is_empty())?;
    if first.chars().count() > PREVIEW_CHARS {
        let cut: String = first.chars().take(PREVIEW_CHARS).collect();
        Some(format!("{}...", cut))
    } else {
        Some(first.to_string())
    }
}

// ── Tests ──
