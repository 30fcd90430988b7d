//! Tracing subscriber setup.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Logging settings resolved from the command line
#[derive(Debug, Clone, Copy)]
pub struct LogSettings {
    pub verbosity: Verbosity,
    pub json: bool,
}

impl LogSettings {
    /// Filter with the verbosity as default directive; `RUST_LOG` overrides it
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.verbosity.level_filter().into())
            .from_env_lossy()
    }

    /// Install the global subscriber. Fails if one is already installed.
    pub fn init(&self) -> Result<()> {
        let filter = self.env_filter();
        let installed = if self.json {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .try_init()
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .try_init()
        };

        installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
    }
}
