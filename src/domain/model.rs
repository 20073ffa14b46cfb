use crate::utils::error::{json_type_name, TransformerError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const STATUS_OK: u16 = 200;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// A loosely structured product record. Keys keep their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Removes `key` from the record, returning `default` only when the key
    /// is missing. A present value, `null` included, is returned as-is.
    pub fn take_or(&mut self, key: &str, default: Value) -> Value {
        self.data.remove(key).unwrap_or(default)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(data: Map<String, Value>) -> Self {
        Self::new(data)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformedProduct {
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub size: Value,
    pub manufacturer_number: Value,
    pub details: ProductDetails,
    pub metadata: ProductMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetails {
    pub custom_fields: Value,
    pub specifications: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMetadata {
    pub created_at: Value,
    pub updated_at: Value,
}

/// 請求信封：只關心 `product_data`，其餘鍵忽略
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestEnvelope {
    pub product_data: Record,
}

impl TryFrom<Value> for RequestEnvelope {
    type Error = TransformerError;

    fn try_from(event: Value) -> Result<Self, Self::Error> {
        let mut envelope = match event {
            Value::Object(map) => map,
            other => {
                return Err(TransformerError::MalformedEnvelope {
                    found: json_type_name(&other).to_string(),
                })
            }
        };

        let product_data = match envelope.remove("product_data") {
            None => Record::default(),
            Some(Value::Object(map)) => Record::new(map),
            Some(other) => {
                return Err(TransformerError::InvalidProductData {
                    found: json_type_name(&other).to_string(),
                })
            }
        };

        Ok(Self { product_data })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl ResponseEnvelope {
    pub fn json(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());

        Self {
            status_code,
            body,
            headers,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Metadata supplied by the hosting environment. It never affects the response.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    pub request_id: Option<String>,
    pub function_name: Option<String>,
}
