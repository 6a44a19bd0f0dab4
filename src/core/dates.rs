//! Date-field unification: platforms report their reporting period under
//! different field names (`Date` for Yandex, `date_start`/`date_stop` for
//! Meta, `day` in some Google exports). Downstream code reads a single
//! canonical `date` field.

use crate::domain::model::{Batch, Record};
use crate::utils::values::{is_truthy, value_as_string};
use serde_json::Value;

/// Candidate date fields, in priority order. The first one present with a
/// truthy value supplies the canonical `date`.
const DATE_FIELDS: [&str; 5] = ["date", "Date", "date_start", "day", "date_stop"];

#[derive(Debug, Clone, Copy)]
pub struct DateUnifierConfig {
    /// Keep `date_start`/`date_stop` when they describe a genuine range
    /// (present and unequal) instead of a single day.
    pub preserve_ranges: bool,
    /// Remove the original candidate fields once `date` is set.
    pub delete_original_fields: bool,
}

impl Default for DateUnifierConfig {
    fn default() -> Self {
        Self {
            preserve_ranges: true,
            delete_original_fields: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DateUnifier {
    config: DateUnifierConfig,
}

impl DateUnifier {
    pub fn new(config: DateUnifierConfig) -> Self {
        Self { config }
    }

    /// Collapses the recognized date fields of `record` into a canonical
    /// `date` field. Records without any date-like field pass through
    /// untouched. Idempotent.
    pub fn standardize(&self, mut record: Record) -> Record {
        let date_value = DATE_FIELDS
            .iter()
            .filter_map(|field| record.get(*field))
            .find(|value| is_truthy(value))
            .map(value_as_string);

        if let Some(date) = date_value {
            record.insert("date".to_string(), Value::String(date));
            self.cleanup_date_fields(&mut record);
        }

        record
    }

    /// Applies [`standardize`](Self::standardize) to each record, preserving
    /// order.
    pub fn standardize_many(&self, records: Batch) -> Batch {
        records
            .into_iter()
            .map(|record| self.standardize(record))
            .collect()
    }

    fn cleanup_date_fields(&self, record: &mut Record) {
        if !self.config.delete_original_fields {
            return;
        }

        for field in DATE_FIELDS {
            if field == "date" {
                continue;
            }

            if self.config.preserve_ranges && (field == "date_start" || field == "date_stop") {
                let start = record.get("date_start").filter(|v| is_truthy(v));
                let stop = record.get("date_stop").filter(|v| is_truthy(v));
                if let (Some(start), Some(stop)) = (start, stop) {
                    if start != stop {
                        continue;
                    }
                }
            }

            record.remove(field);
        }
    }

    /// True iff any recognized date field is present, truthy or not.
    pub fn has_date_fields(&self, record: &Record) -> bool {
        DATE_FIELDS.iter().any(|field| record.contains_key(*field))
    }

    /// Returns the first present truthy candidate as a string, without
    /// mutating the record.
    pub fn extract_date(&self, record: &Record) -> Option<String> {
        DATE_FIELDS
            .iter()
            .filter_map(|field| record.get(*field))
            .find(|value| is_truthy(value))
            .map(value_as_string)
    }
}
