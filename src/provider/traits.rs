//! SAS token provider trait.

use async_trait::async_trait;

use crate::Result;
use crate::config::Configuration;
use crate::token::SasToken;

/// The credential-supply contract invoked by the blob filesystem client.
///
/// The host constructs a provider, calls [`initialize`](Self::initialize)
/// exactly once before issuing any storage request, then calls
/// [`fetch`](Self::fetch) once per outgoing request, potentially from many
/// tasks at once. `initialize` takes `&mut self`: setup has exclusive access,
/// and once the provider is shared (e.g. behind an `Arc`) only the `&self`
/// methods remain callable, so concurrent fetches never observe a provider
/// mid-initialization.
///
/// The trait is object-safe; hosts typically hold a
/// `Box<dyn SasTokenProvider>` chosen from configuration.
#[async_trait]
pub trait SasTokenProvider: Send + Sync {
    /// Provider name for debugging.
    fn name(&self) -> &'static str;

    /// Establish the credential source.
    ///
    /// `config` is the host's settings object and `filesystem_uri` names the
    /// filesystem being mounted; providers that derive per-resource tokens
    /// would use both, the ones in this crate ignore them.
    async fn initialize(&mut self, config: &Configuration, filesystem_uri: &str) -> Result<()>;

    /// Return the SAS token authorizing one outgoing request.
    ///
    /// The four arguments describe the request being signed. This crate's
    /// providers return the same token regardless of what is being accessed.
    async fn fetch(
        &self,
        account: &str,
        path: &str,
        operation: &str,
        authorization_context: &str,
    ) -> Result<SasToken>;
}
