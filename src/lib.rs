pub mod config;
pub mod core;
pub mod domain;
pub mod transformers;
pub mod utils;

pub use config::CliConfig;
pub use core::pipeline::apply_transformations;
pub use core::registry::{RegistryOptions, TransformerRegistry};
pub use domain::model::{Batch, Record};
pub use domain::ports::ChannelTransformer;
pub use utils::error::{NormalizerError, Result};
