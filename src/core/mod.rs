pub mod dates;
pub mod fields;
pub mod pipeline;
pub mod registry;

pub use crate::domain::model::{Batch, Record};
pub use crate::domain::ports::ChannelTransformer;
pub use crate::utils::error::Result;
