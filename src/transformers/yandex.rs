use crate::core::dates::{DateUnifier, DateUnifierConfig};
use crate::core::fields;
use crate::domain::model::{Batch, Record};
use crate::domain::ports::ChannelTransformer;
use crate::utils::values::{number_value, safe_number};
use serde_json::Value;

/// Yandex Direct reports monetary amounts in microroubles.
const MICROROUBLES_PER_ROUBLE: f64 = 1_000_000.0;

/// Count and identifier fields coerced to numbers.
const COUNT_FIELDS: [&str; 7] = [
    "impressions",
    "clicks",
    "conversions",
    "campaign_id",
    "ad_group_id",
    "ad_id",
    "criterion_id",
];

/// Monetary fields rescaled from microroubles to roubles.
const MONETARY_FIELDS: [&str; 6] = [
    "cost",
    "avg_cpc",
    "avg_cpm",
    "cost_per_conversion",
    "revenue",
    "profit",
];

/// Rate fields that Yandex sometimes reports as percentages (5) and sometimes
/// as fractions (0.05). Values above 1 are assumed to be percentages and are
/// divided by 100; values at or below 1 are left as-is. The heuristic cannot
/// tell a genuine 100% rate written as `100` from one written as `1.0`.
const PERCENTAGE_FIELDS: [&str; 3] = ["ctr", "conversion_rate", "impression_share"];

/// Yandex Direct report exports.
#[derive(Debug)]
pub struct YandexTransformer {
    compute_derived_metrics: bool,
    dates: DateUnifier,
}

impl YandexTransformer {
    /// `compute_derived_metrics` enables recomputation of CPC/CPM/CTR-style
    /// ratios from the base counters, overwriting any reported values.
    pub fn new(compute_derived_metrics: bool) -> Self {
        Self {
            compute_derived_metrics,
            dates: DateUnifier::new(DateUnifierConfig {
                preserve_ranges: false,
                delete_original_fields: true,
            }),
        }
    }
}

impl ChannelTransformer for YandexTransformer {
    fn transform(&self, records: Batch) -> Batch {
        tracing::info!(
            "Applying Yandex Direct transformations to {} records",
            records.len()
        );

        records
            .into_iter()
            .map(|record| {
                let mut transformed = fields::normalize(&record);

                for field in COUNT_FIELDS {
                    coerce_in_place(&mut transformed, field, |v| v);
                }
                for field in MONETARY_FIELDS {
                    coerce_in_place(&mut transformed, field, |v| v / MICROROUBLES_PER_ROUBLE);
                }
                for field in PERCENTAGE_FIELDS {
                    coerce_in_place(&mut transformed, field, |v| {
                        if v > 1.0 {
                            v / 100.0
                        } else {
                            v
                        }
                    });
                }

                // Ad-group fields double as adset fields for cross-platform joins.
                copy_field(&mut transformed, "ad_group_id", "adset_id");
                copy_field(&mut transformed, "ad_group_name", "adset_name");

                if let Some(Value::String(device)) = transformed.get("device") {
                    let device = device.to_lowercase();
                    transformed.insert("device".to_string(), Value::String(device));
                }

                transformed.insert(
                    "data_source".to_string(),
                    Value::String("yandex_direct".to_string()),
                );
                transformed.insert("currency".to_string(), Value::String("RUB".to_string()));

                if self.compute_derived_metrics {
                    compute_derived_metrics(&mut transformed);
                }

                self.dates.standardize(transformed)
            })
            .collect()
    }
}

/// Numeric coercion applied in place: absent fields and empty strings stay
/// untouched, everything else goes through `safe_number` and `rescale`.
fn coerce_in_place(record: &mut Record, field: &str, rescale: impl Fn(f64) -> f64) {
    let Some(value) = record.get(field) else {
        return;
    };
    if matches!(value, Value::String(s) if s.is_empty()) {
        return;
    }
    let coerced = rescale(safe_number(value, 0.0));
    record.insert(field.to_string(), number_value(coerced));
}

fn copy_field(record: &mut Record, from: &str, to: &str) {
    if let Some(value) = record.get(from).cloned() {
        record.insert(to.to_string(), value);
    }
}

fn metric(record: &Record, field: &str) -> f64 {
    record.get(field).map_or(0.0, |v| safe_number(v, 0.0))
}

/// Recomputes ratio metrics from the base counters. Each ratio is only set
/// when its denominator is positive.
fn compute_derived_metrics(record: &mut Record) {
    let cost = metric(record, "cost");
    let clicks = metric(record, "clicks");
    let impressions = metric(record, "impressions");
    let conversions = metric(record, "conversions");
    let revenue = metric(record, "revenue");

    if clicks > 0.0 {
        record.insert("avg_cpc".to_string(), number_value(cost / clicks));
        record.insert(
            "conversion_rate".to_string(),
            number_value(conversions / clicks),
        );
    }
    if impressions > 0.0 {
        record.insert(
            "avg_cpm".to_string(),
            number_value(cost / impressions * 1000.0),
        );
        record.insert("ctr".to_string(), number_value(clicks / impressions));
    }
    if conversions > 0.0 {
        record.insert(
            "cost_per_conversion".to_string(),
            number_value(cost / conversions),
        );
    }
    if cost > 0.0 {
        record.insert("roas".to_string(), number_value(revenue / cost));
        record.insert(
            "roi".to_string(),
            number_value((revenue - cost) / cost * 100.0),
        );
    }
}
