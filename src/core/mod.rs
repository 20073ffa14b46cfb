pub mod handler;
pub mod sample;
pub mod transformer;

pub use crate::domain::model::Record;
pub use crate::domain::ports::Transformer;
pub use crate::utils::error::Result;
