//! AWS Signature Version 4 signing of search requests.

use std::time::SystemTime;

use aws_credential_types::Credentials;
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningSettings, sign};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;

use super::AuthError;

/// Signs requests for one region and service with a fixed set of credentials.
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    region: &'a str,
    service: &'a str,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer bound to resolved credentials.
    pub fn new(credentials: &'a Credentials, region: &'a str, service: &'a str) -> Self {
        Self {
            credentials,
            region,
            service,
        }
    }

    /// Sign a request, returning the headers to add to it.
    ///
    /// `headers` must contain every header that is sent and should be covered by the
    /// signature; `body` must be the exact payload sent.
    pub fn sign(
        &self,
        method: &str,
        url: &str,
        headers: &[(&str, &str)],
        body: &[u8],
    ) -> Result<Vec<(String, String)>, AuthError> {
        self.sign_at(method, url, headers, body, SystemTime::now())
    }

    fn sign_at(
        &self,
        method: &str,
        url: &str,
        headers: &[(&str, &str)],
        body: &[u8],
        time: SystemTime,
    ) -> Result<Vec<(String, String)>, AuthError> {
        let identity: Identity = self.credentials.clone().into();
        let params = v4::SigningParams::builder()
            .identity(&identity)
            .region(self.region)
            .name(self.service)
            .time(time)
            .settings(SigningSettings::default())
            .build()
            .map_err(|err| AuthError::Signing(err.to_string()))?
            .into();

        let signable = SignableRequest::new(
            method,
            url,
            headers.iter().copied(),
            SignableBody::Bytes(body),
        )
        .map_err(|err| AuthError::Signing(err.to_string()))?;

        let (instructions, _signature) = sign(signable, &params)
            .map_err(|err| AuthError::Signing(err.to_string()))?
            .into_parts();

        Ok(instructions
            .headers()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }
}
