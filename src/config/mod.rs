pub mod cli;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use cli::EventSource;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "product-transformer")]
#[command(about = "Remaps a product record into the canonical nested JSON shape")]
pub struct CliConfig {
    #[arg(
        long,
        help = "Request envelope JSON file, '-' for stdin (defaults to the built-in sample)"
    )]
    pub input: Option<String>,

    #[arg(long, help = "Pretty-print the response envelope")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn event_source(&self) -> EventSource {
        match self.input.as_deref() {
            None => EventSource::Sample,
            Some("-") => EventSource::Stdin,
            Some(path) => EventSource::File(path.into()),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }

        tracing::debug!("✅ CLI configuration validation passed");
        Ok(())
    }
}
