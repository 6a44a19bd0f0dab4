use crate::core::registry::TransformerRegistry;
use crate::domain::model::Batch;

/// Resolves the transformer for `channel` and applies it to the whole batch,
/// eagerly and synchronously. Infallible: unknown channels fall back to the
/// no-op transformer and malformed records degrade field by field.
pub fn apply_transformations(
    registry: &TransformerRegistry,
    records: Batch,
    channel: &str,
) -> Batch {
    tracing::debug!(
        "Transforming {} records for channel '{}'",
        records.len(),
        channel
    );
    registry.get(channel).transform(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{RegistryOptions, TransformerRegistry};
    use serde_json::json;

    #[test]
    fn test_batch_length_and_order_preserved() {
        let registry = TransformerRegistry::with_defaults(RegistryOptions::default());
        let batch: Batch = (0..5)
            .map(|i| {
                json!({"campaignId": i, "day": format!("2024-01-0{}", i + 1)})
                    .as_object()
                    .unwrap()
                    .clone()
            })
            .collect();

        let out = apply_transformations(&registry, batch, "google");
        assert_eq!(out.len(), 5);
        for (i, record) in out.iter().enumerate() {
            assert_eq!(record.get("campaign_id"), Some(&json!(i)));
            assert_eq!(
                record.get("date"),
                Some(&json!(format!("2024-01-0{}", i + 1)))
            );
        }
    }

    #[test]
    fn test_empty_batch() {
        let registry = TransformerRegistry::default();
        assert!(apply_transformations(&registry, Vec::new(), "meta").is_empty());
    }

    #[test]
    fn test_unknown_channel_still_transforms() {
        let registry = TransformerRegistry::default();
        let out = apply_transformations(
            &registry,
            vec![json!({"day": "2024-01-01"}).as_object().unwrap().clone()],
            "bogus",
        );
        assert_eq!(out[0].get("date"), Some(&json!("2024-01-01")));
    }
}
