#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use product_transformer::utils::logger;
#[cfg(feature = "lambda")]
use product_transformer::{Handler, InvocationContext, ProductTransformer, ResponseEnvelope};
#[cfg(feature = "lambda")]
use serde_json::Value;

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &Handler<ProductTransformer>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let context = InvocationContext {
        request_id: Some(event.context.request_id.clone()),
        function_name: Some(event.context.env_config.function_name.clone()),
    };

    // 失敗已轉為 500 回應，這裡不會回傳 Err
    Ok(handler.handle(event.payload, &context))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let handler = &Handler::new(ProductTransformer::new());
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(handler, event).await
    }))
    .await
}
