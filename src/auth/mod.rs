//! Ambient credentials and request signing for the search domain.

pub mod credentials;
pub mod signer;

use thiserror::Error;

pub use aws_credential_types::Credentials;
pub use credentials::{AmbientCredentials, CredentialSource, StaticCredentials};
pub use signer::RequestSigner;

/// Errors raised while resolving credentials or signing a request.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The loaded AWS configuration carries no credentials provider.
    #[error("No credentials provider is configured")]
    MissingProvider,
    /// The credentials provider chain failed to produce credentials.
    #[error("Failed to resolve credentials: {0}")]
    Resolve(String),
    /// The request could not be signed.
    #[error("Failed to sign request: {0}")]
    Signing(String),
}
