use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

/// Presentation metadata attached to one recognizable section header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDescriptor {
    pub key: String,
    pub color: String,
    pub priority: Priority,
    pub short_name: String,
}

impl HeaderDescriptor {
    fn new(key: &str, color: &str, priority: Priority, short_name: &str) -> Self {
        Self {
            key: key.to_string(),
            color: color.to_string(),
            priority,
            short_name: short_name.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog has no headers")]
    Empty,
    #[error("catalog entry #{0} has an empty key")]
    EmptyKey(usize),
    #[error("catalog key {0:?} is listed more than once")]
    DuplicateKey(String),
}

/// Ordered header table. Lookup is substring containment, first entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeaderCatalog {
    headers: Vec<HeaderDescriptor>,
}

impl Default for HeaderCatalog {
    fn default() -> Self {
        use Priority::*;
        Self {
            headers: vec![
                HeaderDescriptor::new("EXECUTIVE SUMMARY", "#C89B3C", High, "Overview"),
                HeaderDescriptor::new("STRENGTHS ANALYSIS", "#10b981", High, "Strengths"),
                HeaderDescriptor::new("WEAKNESSES", "#FFA726", High, "Weaknesses"),
                // Must stay ahead of IMPROVEMENT.
                HeaderDescriptor::new("CRITICAL IMPROVEMENT", "#ef4444", High, "Focus Areas"),
                HeaderDescriptor::new("PRACTICE STRUCTURE", "#8b5cf6", Medium, "Practice Plan"),
                HeaderDescriptor::new("CHAMPION POOL", "#ec4899", High, "Champions"),
                HeaderDescriptor::new("ROLE-SPECIFIC", "#3b82f6", Medium, "Role Guide"),
                HeaderDescriptor::new("MACRO", "#06b6d4", High, "Macro"),
                HeaderDescriptor::new("ROADMAP", "#10b981", High, "Growth Path"),
                HeaderDescriptor::new("OBJECTIVES", "#06b6d4", High, "Objectives"),
                HeaderDescriptor::new("IMPROVEMENT", "#f59e0b", Medium, "Improve"),
            ],
        }
    }
}

impl HeaderCatalog {
    pub fn new(headers: Vec<HeaderDescriptor>) -> Result<Self, CatalogError> {
        if headers.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for (i, h) in headers.iter().enumerate() {
            if h.key.trim().is_empty() {
                return Err(CatalogError::EmptyKey(i));
            }
            if !seen.insert(h.key.as_str()) {
                return Err(CatalogError::DuplicateKey(h.key.clone()));
            }
        }
        Ok(Self { headers })
    }

    /// Load a catalog from a JSON array of descriptors.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let headers: Vec<HeaderDescriptor> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Self::new(headers)
    }

    /// First descriptor whose key occurs anywhere in `line`.
    pub fn match_line(&self, line: &str) -> Option<&HeaderDescriptor> {
        self.headers.iter().find(|h| line.contains(h.key.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&HeaderDescriptor> {
        self.headers.iter().find(|h| h.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderDescriptor> {
        self.headers.iter()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_order_prefers_critical_improvement() {
        let catalog = HeaderCatalog::default();
        let h = catalog.match_line("3. CRITICAL IMPROVEMENT AREAS:").unwrap();
        assert_eq!(h.key, "CRITICAL IMPROVEMENT");
        let h = catalog.match_line("IMPROVEMENT PLAN").unwrap();
        assert_eq!(h.key, "IMPROVEMENT");
    }

    #[test]
    fn first_listed_key_wins() {
        let catalog = HeaderCatalog::default();
        // Contains both MACRO and OBJECTIVES; MACRO is listed first.
        let h = catalog.match_line("OBJECTIVES & MACRO PLAY").unwrap();
        assert_eq!(h.key, "MACRO");
    }

    #[test]
    fn match_is_case_sensitive() {
        let catalog = HeaderCatalog::default();
        assert!(catalog.match_line("Executive summary").is_none());
    }

    #[test]
    fn rejects_duplicate_and_empty_keys() {
        let h = HeaderDescriptor::new("ROADMAP", "#fff", Priority::High, "Road");
        assert!(matches!(
            HeaderCatalog::new(vec![h.clone(), h.clone()]),
            Err(CatalogError::DuplicateKey(k)) if k == "ROADMAP"
        ));
        let blank = HeaderDescriptor::new("  ", "#fff", Priority::High, "Blank");
        assert!(matches!(
            HeaderCatalog::new(vec![h, blank]),
            Err(CatalogError::EmptyKey(1))
        ));
        assert!(matches!(HeaderCatalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"[{{"key":"LANING","color":"#123456","priority":"medium","short_name":"Lane"}}]"##
        )
        .unwrap();
        let catalog = HeaderCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let h = catalog.get("LANING").unwrap();
        assert_eq!(h.priority, Priority::Medium);
        assert_eq!(h.priority.as_str(), "medium");
        assert_eq!(h.short_name, "Lane");
    }

    #[test]
    fn bad_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            HeaderCatalog::from_json_file(file.path()),
            Err(CatalogError::Parse { .. })
        ));
    }
}
