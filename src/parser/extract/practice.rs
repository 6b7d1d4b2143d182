use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::parser::lines::{content_lines, strip_numeral};

static IMMEDIATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)3\s*Immediate\s*Changes").unwrap());
static WEEKLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)2\s*Practice\s*Drills").unwrap());
static VOD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)1\s*VOD\s*Review").unwrap());

pub const MAX_IMMEDIATE: usize = 3;
pub const MAX_WEEKLY: usize = 2;

/// The 3-2-1 method: three immediate changes, two drills, one VOD focus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PracticeMethod {
    pub immediate: Vec<String>,
    pub weekly: Vec<String>,
    pub vod: Option<String>,
}

impl PracticeMethod {
    pub fn is_empty(&self) -> bool {
        self.immediate.is_empty() && self.weekly.is_empty() && self.vod.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Immediate,
    Weekly,
    Vod,
}

pub fn match_bucket_header(line: &str) -> Option<Bucket> {
    if IMMEDIATE_RE.is_match(line) {
        Some(Bucket::Immediate)
    } else if WEEKLY_RE.is_match(line) {
        Some(Bucket::Weekly)
    } else if VOD_RE.is_match(line) {
        Some(Bucket::Vod)
    } else {
        None
    }
}

pub fn extract(content: &str) -> PracticeMethod {
    let mut method = PracticeMethod::default();
    let mut bucket: Option<Bucket> = None;

    for line in content_lines(content) {
        if let Some(next) = match_bucket_header(line.text) {
            bucket = Some(next);
            continue;
        }

        let (Some(bucket), Some(item)) = (bucket, strip_numeral(line.text)) else {
            continue;
        };
        let item = item.to_string();
        match bucket {
            Bucket::Immediate if method.immediate.len() < MAX_IMMEDIATE => {
                method.immediate.push(item)
            }
            Bucket::Weekly if method.weekly.len() < MAX_WEEKLY => method.weekly.push(item),
            Bucket::Vod if method.vod.is_none() => method.vod = Some(item),
            _ => {}
        }
    }

    method
}
