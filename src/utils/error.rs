use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformerError {
    #[error("Malformed request envelope: expected a JSON object, got {found}")]
    MalformedEnvelope { found: String },

    #[error("Invalid product_data: expected a JSON object, got {found}")]
    InvalidProductData { found: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TransformerError>;

/// JSON 類型名稱，用於錯誤訊息
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
