use crate::core::sample::sample_event;
use crate::utils::error::Result;
use serde_json::Value;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Where the CLI reads its request envelope from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    Sample,
    Stdin,
    File(PathBuf),
}

impl EventSource {
    pub async fn load(&self) -> Result<Value> {
        let raw = match self {
            EventSource::Sample => return Ok(sample_event()),
            EventSource::Stdin => {
                let mut buffer = String::new();
                tokio::io::stdin().read_to_string(&mut buffer).await?;
                buffer
            }
            EventSource::File(path) => tokio::fs::read_to_string(path).await?,
        };

        tracing::debug!("Read {} bytes of request JSON from {:?}", raw.len(), self);
        let event = serde_json::from_str(&raw)?;
        Ok(event)
    }
}
