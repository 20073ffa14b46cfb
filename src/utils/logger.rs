use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "product_transformer=debug,info"
    } else {
        "product_transformer=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // stdout 保留給回應輸出
                .with_target(false)
                .compact(),
        )
        .init();
}

/// One JSON object per event. Fields of the current span (`request_id`,
/// `function_name` on the handler's `invocation` span) are attached to every line.
pub fn lambda_format_layer<S, W>(make_writer: W) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(make_writer)
        .with_target(false)
        .without_time() // CloudWatch 自帶時間戳
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
}

pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(lambda_format_layer(std::io::stdout))
        .init();
}

/// In-memory log sink for asserting on formatted output.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl CapturedLogs {
    pub(crate) fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

#[cfg(test)]
impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
