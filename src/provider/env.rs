//! Environment variable SAS provider.

use async_trait::async_trait;
use tracing::debug;

use crate::config::Configuration;
use crate::provider::SasTokenProvider;
use crate::token::SasToken;
use crate::{Error, Result};

/// Environment variable the token is read from by default.
pub const DEFAULT_ENV_VAR: &str = "AZURE_SAS_TOKEN";

/// Provider that reads the SAS token from an environment variable.
///
/// The variable is read exactly once, when the host calls `initialize`; the
/// value is then served unchanged for the rest of the process lifetime. There
/// is no refresh or expiry handling: operators supply a token valid for as
/// long as the process is expected to run.
pub struct EnvSasProvider {
    env_var: String,
    token: Option<SasToken>,
}

impl EnvSasProvider {
    /// Create a provider using the default `AZURE_SAS_TOKEN` variable.
    pub fn new() -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_string(),
            token: None,
        }
    }

    /// Create a provider reading a custom environment variable.
    pub fn from_var(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            token: None,
        }
    }

    /// Whether `initialize` has completed successfully.
    pub fn is_initialized(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for EnvSasProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SasTokenProvider for EnvSasProvider {
    fn name(&self) -> &'static str {
        "environment"
    }

    async fn initialize(&mut self, _config: &Configuration, _filesystem_uri: &str) -> Result<()> {
        // An empty value can never authorize a request; treat it like an
        // absent variable.
        let value = std::env::var(&self.env_var).unwrap_or_default();
        if value.is_empty() {
            return Err(Error::config(format!("`{}` is not set", self.env_var)));
        }

        self.token = Some(SasToken::new(value));
        debug!(env_var = %self.env_var, "loaded SAS token from environment");
        Ok(())
    }

    async fn fetch(
        &self,
        _account: &str,
        _path: &str,
        _operation: &str,
        _authorization_context: &str,
    ) -> Result<SasToken> {
        self.token.clone().ok_or(Error::NotInitialized {
            provider: self.name(),
        })
    }
}
