use crate::core::dates::DateUnifier;
use crate::domain::model::Batch;
use crate::domain::ports::ChannelTransformer;

/// Fallback transformer for unknown channels: records pass through with only
/// date-field unification applied, no keys rewritten, nothing added or
/// removed.
#[derive(Debug, Default)]
pub struct NoOpTransformer {
    dates: DateUnifier,
}

impl NoOpTransformer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChannelTransformer for NoOpTransformer {
    fn transform(&self, records: Batch) -> Batch {
        tracing::info!("No platform transformations applied");
        self.dates.standardize_many(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_noop_only_unifies_dates() {
        let transformer = NoOpTransformer::new();
        let batch = vec![json!({"CampaignId": 1, "day": "2024-01-01"})
            .as_object()
            .unwrap()
            .clone()];
        let out = transformer.transform(batch);
        // Keys untouched, only the date fields collapse.
        assert_eq!(
            out[0],
            json!({"CampaignId": 1, "date": "2024-01-01"})
                .as_object()
                .unwrap()
                .clone()
        );
    }

    #[test]
    fn test_noop_without_dates_is_identity() {
        let transformer = NoOpTransformer::new();
        let record = json!({"AnyField": "x"}).as_object().unwrap().clone();
        let out = transformer.transform(vec![record.clone()]);
        assert_eq!(out, vec![record]);
    }
}
