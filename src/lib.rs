//! # azure-sas-provider
//!
//! SAS token supply for Azure blob storage filesystem clients.
//!
//! A blob filesystem client that signs its requests with shared access
//! signatures delegates credential supply to a plugin: the host constructs a
//! provider, initializes it once during startup, then asks it for a token on
//! every outgoing storage request. This crate implements that plugin contract
//! with a provider that reads one token from the process environment and
//! serves it for the lifetime of the process.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use azure_sas_provider::{Configuration, EnvSasProvider, SasTokenProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), azure_sas_provider::Error> {
//!     let mut provider = EnvSasProvider::new();
//!     provider
//!         .initialize(&Configuration::new(), "abfss://data@myaccount.dfs.core.windows.net/")
//!         .await?;
//!
//!     let token = provider
//!         .fetch("myaccount", "/container/blob.csv", "read", "")
//!         .await?;
//!     let url = format!(
//!         "https://myaccount.blob.core.windows.net/container/blob.csv?{}",
//!         token.expose()
//!     );
//!     println!("{}", url);
//!     Ok(())
//! }
//! ```
//!
//! Hosts that obtain the token some other way can inject it directly with
//! [`StaticSasProvider`].

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod prelude;
pub mod provider;
pub mod token;

// Re-exports for convenience
pub use config::Configuration;
pub use provider::{DEFAULT_ENV_VAR, EnvSasProvider, SasTokenProvider, StaticSasProvider};
pub use token::SasToken;

/// Error type for SAS provider operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A token was requested before `initialize` completed successfully.
    #[error("SAS provider `{provider}` has not been initialized")]
    NotInitialized { provider: &'static str },
}

/// Error category for unified error handling.
///
/// The host storage client maps authorization failures to its access-denied
/// path and treats configuration failures as fatal at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Authorization failures surfaced on the request path
    Authorization,
    /// Configuration or setup errors surfaced at startup
    Configuration,
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) => ErrorCategory::Configuration,
            Error::NotInitialized { .. } => ErrorCategory::Authorization,
        }
    }

    pub fn is_authorization_error(&self) -> bool {
        self.category() == ErrorCategory::Authorization
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}

pub type Result<T> = std::result::Result<T, Error>;
