//! Turns a free-form player performance report into titled sections and the
//! typed structures mined from them (action items, metrics, grades, champion
//! tiers, the 3-2-1 practice method, roadmap phases, benchmark pairs).
//!
//! Parsing is total: any input, including the empty string, produces a
//! document. Missing patterns yield empty lists or `None`, never errors.

pub mod catalog;
pub mod parser;
pub mod settings;

pub use catalog::{CatalogError, HeaderCatalog, HeaderDescriptor, Priority};
pub use parser::extract::{Enrichment, SectionView};
pub use parser::sections::{segment, FlushPolicy, Section};
pub use parser::{parse_report, InsightDocument};
pub use settings::{Settings, SettingsError};
