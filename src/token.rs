//! SAS token type.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// An opaque shared access signature.
///
/// The token is a bearer credential: anyone holding it can use it. It is
/// stored behind [`SecretString`] so it is zeroized on drop and never shows
/// up in `Debug` output; callers read it with [`expose`](Self::expose) at the
/// point where it is attached to an outgoing request.
#[derive(Clone)]
pub struct SasToken(SecretString);

impl SasToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Reveal the token for attaching to a request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for SasToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for SasToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Debug for SasToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SasToken").field(&"[redacted]").finish()
    }
}
