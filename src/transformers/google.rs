use crate::core::dates::{DateUnifier, DateUnifierConfig};
use crate::core::fields;
use crate::domain::model::Batch;
use crate::domain::ports::ChannelTransformer;
use crate::utils::values::{number_value, safe_number};
use serde_json::Value;

/// Google Ads reports monetary amounts in micros (one-millionth of the
/// account currency unit).
const MICROS_FIELDS: [(&str, &str); 3] = [
    ("cost_micros", "cost"),
    ("average_cpc_micros", "average_cpc"),
    ("average_cpm_micros", "average_cpm"),
];

const MICROS_PER_UNIT: f64 = 1_000_000.0;

#[derive(Debug)]
pub struct GoogleTransformer {
    dates: DateUnifier,
}

impl GoogleTransformer {
    pub fn new() -> Self {
        Self {
            dates: DateUnifier::new(DateUnifierConfig {
                preserve_ranges: false,
                delete_original_fields: true,
            }),
        }
    }
}

impl Default for GoogleTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelTransformer for GoogleTransformer {
    fn transform(&self, records: Batch) -> Batch {
        tracing::info!(
            "Applying Google transformations to {} records",
            records.len()
        );

        records
            .into_iter()
            .map(|record| {
                let mut transformed = fields::normalize(&record);

                for (micros_field, target_field) in MICROS_FIELDS {
                    if let Some(value) = transformed.remove(micros_field) {
                        transformed.insert(
                            target_field.to_string(),
                            number_value(safe_number(&value, 0.0) / MICROS_PER_UNIT),
                        );
                    }
                }

                transformed.insert(
                    "data_source".to_string(),
                    Value::String("google_ads".to_string()),
                );
                transformed.insert("currency".to_string(), Value::String("USD".to_string()));

                self.dates.standardize(transformed)
            })
            .collect()
    }
}
