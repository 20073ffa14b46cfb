use crate::core::Transformer;
use crate::domain::model::{
    ErrorBody, InvocationContext, RequestEnvelope, ResponseEnvelope, STATUS_INTERNAL_ERROR,
    STATUS_OK,
};
use crate::utils::error::Result;
use serde_json::Value;

/// Boundary adapter: request envelope in, response envelope out.
/// Every failure is turned into a 500 response, nothing escapes `handle`.
pub struct Handler<T: Transformer> {
    transformer: T,
}

impl<T: Transformer> Handler<T> {
    pub fn new(transformer: T) -> Self {
        Self { transformer }
    }

    pub fn handle(&self, event: Value, context: &InvocationContext) -> ResponseEnvelope {
        let span = tracing::info_span!(
            "invocation",
            request_id = context.request_id.as_deref().unwrap_or("-"),
            function_name = context.function_name.as_deref().unwrap_or("-")
        );
        let _guard = span.enter();

        match self.process(event) {
            Ok(body) => {
                tracing::info!("✅ Product transformed (status {})", STATUS_OK);
                ResponseEnvelope::json(STATUS_OK, body)
            }
            Err(e) => {
                tracing::error!("❌ Product transformation failed: {}", e);
                ResponseEnvelope::json(STATUS_INTERNAL_ERROR, error_body(&e.to_string()))
            }
        }
    }

    fn process(&self, event: Value) -> Result<String> {
        // 抽取 -> 轉換 -> 序列化
        let envelope = RequestEnvelope::try_from(event)?;
        tracing::debug!(
            "Extracted product_data with {} keys",
            envelope.product_data.data.len()
        );

        let transformed = self.transformer.transform(envelope.product_data);
        let body = serde_json::to_string(&transformed)?;
        Ok(body)
    }
}

fn error_body(message: &str) -> String {
    let body = ErrorBody {
        error: message.to_string(),
    };
    // ErrorBody 只有字串欄位
    serde_json::to_string(&body).unwrap_or_else(|_| {
        serde_json::json!({ "error": "failed to serialize error message" }).to_string()
    })
}
