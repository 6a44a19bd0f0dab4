//! Field-name canonicalization: platform exports mix PascalCase, camelCase,
//! and snake_case key conventions; everything downstream expects
//! lower_snake_case.

use crate::domain::model::Record;
use once_cell::sync::Lazy;
use regex::Regex;

// HTMLVideo -> HTML_Video, XMLParser -> XML_Parser
static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"));

// campaignId -> campaign_Id, cost2CPM -> cost2_CPM
static LOWER_UPPER_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid regex"));

/// Rewrites every key of `record` through [`snake_case`]. Values are copied
/// unchanged; nested arrays and objects are not recursed into.
///
/// Two distinct keys can normalize to the same output key (`AdId` and `ad_id`);
/// when that happens the last one written in iteration order wins.
pub fn normalize(record: &Record) -> Record {
    record
        .iter()
        .map(|(key, value)| (snake_case(key), value.clone()))
        .collect()
}

/// Converts a single key to lower_snake_case, handling acronym runs:
/// `HTMLVideoAds` -> `html_video_ads`, `CPMOptimized` -> `cpm_optimized`,
/// `AdGroupId` -> `ad_group_id`.
pub fn snake_case(key: &str) -> String {
    let split = ACRONYM_BOUNDARY.replace_all(key, "${1}_${2}");
    let split = LOWER_UPPER_BOUNDARY.replace_all(&split, "${1}_${2}");
    split.to_lowercase()
}
