//! Auth Capability
//!
//! The identity provider is external to this workspace; everything the
//! clients need from it is a signed-in flag and a bearer token. That
//! capability is modeled as an injected trait so components never reach
//! into ambient global state for session information.

use async_trait::async_trait;

/// Capability supplying sign-in state and bearer tokens.
///
/// Implementations wrap whatever identity provider the embedding host
/// uses. Token retrieval is async because real providers mint or refresh
/// tokens on demand; `None` means no token is currently available.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Whether a user session is currently active.
    fn is_signed_in(&self) -> bool;

    /// Returns a bearer token for the active session, if any.
    ///
    /// Callers must not cache the returned token; providers may rotate it
    /// between calls.
    async fn token(&self) -> Option<String>;
}

/// Provider for the signed-out state: never signed in, never yields a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignedOut;

#[async_trait]
impl TokenProvider for SignedOut {
    fn is_signed_in(&self) -> bool {
        false
    }

    async fn token(&self) -> Option<String> {
        None
    }
}

/// Provider backed by a fixed token.
///
/// Useful for tests and for embedding hosts that manage their own session
/// lifetime and hand the library an already-minted token.
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Creates a provider that always yields the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    fn is_signed_in(&self) -> bool {
        true
    }

    async fn token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}
