use crate::core::dates::DateUnifier;
use crate::core::fields;
use crate::domain::model::Batch;
use crate::domain::ports::ChannelTransformer;
use serde_json::Value;

/// TikTok Ads exports. No unit conversions are currently defined; records get
/// canonical keys, source tags, and date unification.
#[derive(Debug, Default)]
pub struct TikTokTransformer {
    dates: DateUnifier,
}

impl TikTokTransformer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChannelTransformer for TikTokTransformer {
    fn transform(&self, records: Batch) -> Batch {
        tracing::info!(
            "Applying TikTok transformations to {} records",
            records.len()
        );

        records
            .into_iter()
            .map(|record| {
                let mut transformed = fields::normalize(&record);
                transformed.insert(
                    "data_source".to_string(),
                    Value::String("tiktok".to_string()),
                );
                transformed.insert("currency".to_string(), Value::String("USD".to_string()));
                self.dates.standardize(transformed)
            })
            .collect()
    }
}
