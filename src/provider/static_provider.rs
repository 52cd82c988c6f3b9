//! Static SAS provider.

use async_trait::async_trait;

use crate::Result;
use crate::config::Configuration;
use crate::provider::SasTokenProvider;
use crate::token::SasToken;

/// Provider with an explicitly supplied token.
///
/// For hosts that obtain the token programmatically (a deployment system, a
/// test harness) instead of through the process environment. The provider is
/// ready as soon as it is constructed; `initialize` is a no-op kept for the
/// host contract.
pub struct StaticSasProvider {
    token: SasToken,
}

impl StaticSasProvider {
    pub fn new(token: impl Into<SasToken>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl SasTokenProvider for StaticSasProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn initialize(&mut self, _config: &Configuration, _filesystem_uri: &str) -> Result<()> {
        Ok(())
    }

    async fn fetch(
        &self,
        _account: &str,
        _path: &str,
        _operation: &str,
        _authorization_context: &str,
    ) -> Result<SasToken> {
        Ok(self.token.clone())
    }
}
