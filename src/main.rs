use anyhow::Context;
use clap::Parser;
use product_transformer::utils::{logger, validation::Validate};
use product_transformer::{CliConfig, Handler, InvocationContext, ProductTransformer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting product-transformer CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = config.event_source();
    let event = source
        .load()
        .await
        .with_context(|| format!("failed to load request envelope from {:?}", source))?;

    let handler = Handler::new(ProductTransformer::new());
    let response = handler.handle(event, &InvocationContext::default());

    if !response.is_success() {
        tracing::warn!("Handler returned status {}", response.status_code);
    }

    let output = if config.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}
