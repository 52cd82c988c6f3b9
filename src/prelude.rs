//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use azure_sas_provider::prelude::*;
//! ```

pub use crate::Error;
pub use crate::ErrorCategory;
pub use crate::Result;

pub use crate::config::Configuration;
pub use crate::provider::{EnvSasProvider, SasTokenProvider, StaticSasProvider};
pub use crate::token::SasToken;
