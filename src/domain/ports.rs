use crate::domain::model::Batch;

/// One transformer per advertising platform.
///
/// `transform` is pure and total over its input batch: it never fails for
/// malformed input, degrading unknown or missing fields to "absent" instead.
/// No record's transformation may depend on any other record in the batch.
pub trait ChannelTransformer: Send + Sync {
    fn transform(&self, records: Batch) -> Batch;
}
