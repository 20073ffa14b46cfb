use crate::domain::model::Record;
use serde::Serialize;

/// A pure mapping from an input record to a serializable output.
/// Implementations must be total: every input record produces an output.
pub trait Transformer: Send + Sync {
    type Output: Serialize;

    fn transform(&self, input: Record) -> Self::Output;
}
