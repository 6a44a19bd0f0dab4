use serde_json::{Map, Value};

/// A single advertising-performance record: an unordered mapping from string
/// keys to JSON values. There is no fixed schema; keys vary by platform and by
/// record.
pub type Record = Map<String, Value>;

/// An ordered sequence of records. Order is preserved through the pipeline:
/// record *i* in the input maps to record *i* in the output.
pub type Batch = Vec<Record>;
