pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::EventSource;
pub use core::{handler::Handler, transformer::ProductTransformer};
pub use domain::model::{InvocationContext, Record, ResponseEnvelope, TransformedProduct};
pub use domain::ports::Transformer;
pub use utils::error::{Result, TransformerError};
