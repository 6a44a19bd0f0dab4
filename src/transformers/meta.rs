use crate::core::dates::{DateUnifier, DateUnifierConfig};
use crate::core::fields;
use crate::domain::model::{Batch, Record};
use crate::domain::ports::ChannelTransformer;
use crate::utils::values::{is_truthy, number_value, safe_number};
use serde_json::Value;

/// Action-style arrays Meta reports as `[{action_type, value}, ...]`, flattened
/// into prefixed top-level fields.
const ACTION_ARRAYS: [(&str, &str); 3] = [
    ("actions", "action_"),
    ("conversions", "conversion_"),
    ("cost_per_action_type", "cpa_"),
];

/// Meta (Facebook) insights exports. Meta may report a date range, so genuine
/// `date_start`/`date_stop` pairs survive date unification.
#[derive(Debug)]
pub struct MetaTransformer {
    dates: DateUnifier,
}

impl MetaTransformer {
    pub fn new() -> Self {
        Self {
            dates: DateUnifier::new(DateUnifierConfig {
                preserve_ranges: true,
                delete_original_fields: true,
            }),
        }
    }
}

impl Default for MetaTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelTransformer for MetaTransformer {
    fn transform(&self, records: Batch) -> Batch {
        tracing::info!("Applying Meta transformations to {} records", records.len());

        records
            .into_iter()
            .map(|record| {
                let mut transformed = fields::normalize(&record);
                for (field, prefix) in ACTION_ARRAYS {
                    flatten_action_array(&mut transformed, field, prefix);
                }
                self.dates.standardize(transformed)
            })
            .collect()
    }
}

/// Unpacks `field` (an array of `{action_type, value}` objects) into
/// `<prefix><action_type>` numeric fields and removes the array. Entries
/// missing either member are skipped; non-array values are left alone.
fn flatten_action_array(record: &mut Record, field: &str, prefix: &str) {
    if !matches!(record.get(field), Some(Value::Array(_))) {
        return;
    }
    let Some(Value::Array(entries)) = record.remove(field) else {
        return;
    };

    for entry in entries {
        let Some(obj) = entry.as_object() else {
            continue;
        };
        let action_type = obj
            .get("action_type")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty());
        let value = obj.get("value").filter(|v| is_truthy(v));
        if let (Some(action_type), Some(value)) = (action_type, value) {
            record.insert(
                format!("{prefix}{action_type}"),
                number_value(safe_number(value, 0.0)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn test_flattens_actions() {
        let transformer = MetaTransformer::new();
        let out = transformer.transform(vec![record(json!({
            "actions": [
                {"action_type": "like", "value": "10"},
                {"action_type": "comment", "value": 3}
            ],
            "impressions": 100
        }))]);
        assert_eq!(out[0].get("action_like"), Some(&json!(10)));
        assert_eq!(out[0].get("action_comment"), Some(&json!(3)));
        assert!(!out[0].contains_key("actions"));
        assert_eq!(out[0].get("impressions"), Some(&json!(100)));
    }

    #[test]
    fn test_flattens_conversions_and_cpa() {
        let transformer = MetaTransformer::new();
        let out = transformer.transform(vec![record(json!({
            "conversions": [{"action_type": "purchase", "value": "2"}],
            "cost_per_action_type": [{"action_type": "purchase", "value": "12.5"}]
        }))]);
        assert_eq!(out[0].get("conversion_purchase"), Some(&json!(2)));
        assert_eq!(out[0].get("cpa_purchase"), Some(&json!(12.5)));
        assert!(!out[0].contains_key("conversions"));
        assert!(!out[0].contains_key("cost_per_action_type"));
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let transformer = MetaTransformer::new();
        let out = transformer.transform(vec![record(json!({
            "actions": [
                {"action_type": "like"},
                {"value": "5"},
                "not-an-object",
                {"action_type": "share", "value": "7"}
            ]
        }))]);
        assert_eq!(out[0].get("action_share"), Some(&json!(7)));
        assert_eq!(out[0].len(), 1);
    }

    #[test]
    fn test_non_array_actions_left_alone() {
        let transformer = MetaTransformer::new();
        let out = transformer.transform(vec![record(json!({"actions": "oops"}))]);
        assert_eq!(out[0].get("actions"), Some(&json!("oops")));
    }

    #[test]
    fn test_date_range_preserved() {
        let transformer = MetaTransformer::new();
        let out = transformer.transform(vec![record(json!({
            "date_start": "2024-01-01",
            "date_stop": "2024-01-05"
        }))]);
        assert_eq!(out[0].get("date"), Some(&json!("2024-01-01")));
        assert_eq!(out[0].get("date_start"), Some(&json!("2024-01-01")));
        assert_eq!(out[0].get("date_stop"), Some(&json!("2024-01-05")));
    }

    #[test]
    fn test_single_day_range_collapsed() {
        let transformer = MetaTransformer::new();
        let out = transformer.transform(vec![record(json!({
            "date_start": "2024-01-01",
            "date_stop": "2024-01-01"
        }))]);
        assert_eq!(
            out[0],
            record(json!({"date": "2024-01-01"}))
        );
    }

    #[test]
    fn test_keys_normalized() {
        let transformer = MetaTransformer::new();
        let out = transformer.transform(vec![record(json!({"CampaignName": "x"}))]);
        assert_eq!(out[0].get("campaign_name"), Some(&json!("x")));
    }
}
