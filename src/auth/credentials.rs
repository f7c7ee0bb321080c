//! Credential sources consulted once per invocation.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_credential_types::Credentials;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};

use super::AuthError;

/// Supplies short-lived credentials used to sign search requests.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Resolve the credentials for the current invocation.
    async fn resolve(&self) -> Result<Credentials, AuthError>;
}

/// Credentials taken from the execution identity through the default provider chain.
pub struct AmbientCredentials {
    provider: SharedCredentialsProvider,
}

impl AmbientCredentials {
    /// Use the credentials provider carried by a loaded SDK configuration.
    pub fn from_sdk_config(config: &SdkConfig) -> Result<Self, AuthError> {
        let provider = config
            .credentials_provider()
            .ok_or(AuthError::MissingProvider)?;
        Ok(Self { provider })
    }
}

#[async_trait]
impl CredentialSource for AmbientCredentials {
    async fn resolve(&self) -> Result<Credentials, AuthError> {
        let credentials = self
            .provider
            .provide_credentials()
            .await
            .map_err(|err| AuthError::Resolve(err.to_string()))?;
        tracing::debug!(
            has_session_token = credentials.session_token().is_some(),
            expiry = ?credentials.expiry(),
            "Resolved ambient credentials"
        );
        Ok(credentials)
    }
}

/// Fixed credentials, for local runs and tests.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Build a source that always returns the given key pair.
    pub fn new(
        access_key_id: &str,
        secret_access_key: &str,
        session_token: Option<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(
                access_key_id,
                secret_access_key,
                session_token,
                None,
                "static",
            ),
        }
    }
}

#[async_trait]
impl CredentialSource for StaticCredentials {
    async fn resolve(&self) -> Result<Credentials, AuthError> {
        Ok(self.credentials.clone())
    }
}
