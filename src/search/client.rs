//! HTTP client wrapper for writing documents to the search engine.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};

use crate::auth::{Credentials, RequestSigner};
use crate::config::Config;
use crate::document::ParsedDocument;
use crate::search::types::{IndexError, IndexReceipt, IndexTarget};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Lightweight signed HTTP client for the search domain.
pub struct SearchIndexService {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) region: String,
    pub(crate) service: String,
}

impl SearchIndexService {
    /// Construct a new client from the deployment configuration.
    pub fn new(config: &Config) -> Result<Self, IndexError> {
        let client = Client::builder()
            .user_agent(concat!("upload-to-search/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = normalize_base_url(&config.search_host).map_err(IndexError::InvalidUrl)?;
        tracing::debug!(
            url = %base_url,
            region = %config.signing_region,
            service = %config.signing_service,
            "Initialized search HTTP client"
        );

        Ok(Self {
            client,
            base_url,
            region: config.signing_region.clone(),
            service: config.signing_service.clone(),
        })
    }

    /// Create or replace a document at the given target.
    ///
    /// Any non-success status is returned as [`IndexError::UnexpectedStatus`] together with the
    /// response body. No retry is attempted.
    pub async fn upsert_document(
        &self,
        credentials: &Credentials,
        target: &IndexTarget,
        document: &ParsedDocument,
    ) -> Result<IndexReceipt, IndexError> {
        let url = self.document_url(target)?;
        let body = serde_json::to_vec(document)?;

        let signer = RequestSigner::new(credentials, &self.region, &self.service);
        let signed_headers = signer.sign(
            Method::POST.as_str(),
            url.as_str(),
            &[(CONTENT_TYPE.as_str(), JSON_CONTENT_TYPE)],
            &body,
        )?;

        let mut request = self
            .client
            .request(Method::POST, url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        for (name, value) in signed_headers {
            request = request.header(name, value);
        }

        let response = request.body(body).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            tracing::debug!(id = %target.id, %status, "Document upserted");
            Ok(IndexReceipt { status, body })
        } else {
            Err(IndexError::UnexpectedStatus { status, body })
        }
    }

    fn document_url(&self, target: &IndexTarget) -> Result<Url, IndexError> {
        let endpoint = format_endpoint(&self.base_url, &target.path());
        Url::parse(&endpoint).map_err(|err| IndexError::InvalidUrl(err.to_string()))
    }
}

fn normalize_base_url(url: &str) -> Result<String, String> {
    let mut parsed = Url::parse(url).map_err(|err| err.to_string())?;
    let path = parsed.path().trim_end_matches('/').to_string();
    parsed.set_path(&path);
    Ok(parsed.to_string())
}

fn format_endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
