//! Upload handler coordinating storage reads, parsing, and search writes.

use std::sync::Arc;

use crate::{
    auth::{CredentialSource, Credentials},
    config::{Config, IndexFailurePolicy},
    document::parse_document,
    event::{NotificationEvent, NotificationRecord},
    handler::types::{HandlerError, InvocationResponse},
    metrics::InvocationMetrics,
    search::{IndexError, IndexTarget, SearchIndexService},
    storage::ObjectStore,
};

/// Indexes newly created objects into the search engine.
///
/// Records are processed strictly in order. Credential, fetch, and parse failures abort the
/// remaining batch; upsert failures follow [`IndexFailurePolicy`]. Construct once at cold
/// start and reuse across invocations; credentials are resolved again on every invocation.
pub struct UploadHandler {
    config: Config,
    store: Arc<dyn ObjectStore>,
    credentials: Arc<dyn CredentialSource>,
    search: SearchIndexService,
}

impl UploadHandler {
    /// Build a handler from configuration and injected backends.
    pub fn new(
        config: Config,
        store: Arc<dyn ObjectStore>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Result<Self, IndexError> {
        let search = SearchIndexService::new(&config)?;
        Ok(Self {
            config,
            store,
            credentials,
            search,
        })
    }

    /// Handle one invocation and report the fixed completion response.
    pub async fn handle(
        &self,
        event: NotificationEvent,
    ) -> Result<InvocationResponse, HandlerError> {
        self.process(event).await?;
        Ok(InvocationResponse::done())
    }

    /// Process every record in the batch, returning the invocation counters.
    pub async fn process(
        &self,
        event: NotificationEvent,
    ) -> Result<InvocationMetrics, HandlerError> {
        tracing::info!(records = event.records.len(), "Handling storage notification");
        let credentials = self.credentials.resolve().await?;

        let mut metrics = InvocationMetrics::new();
        for record in &event.records {
            self.process_record(record, &credentials, &mut metrics).await?;
        }

        tracing::info!(
            records_processed = metrics.records_processed,
            documents_indexed = metrics.documents_indexed,
            index_failures = metrics.index_failures,
            "Invocation complete"
        );
        Ok(metrics)
    }

    async fn process_record(
        &self,
        record: &NotificationRecord,
        credentials: &Credentials,
        metrics: &mut InvocationMetrics,
    ) -> Result<(), HandlerError> {
        let location = record.location();
        tracing::info!(bucket = %location.bucket, key = %location.key, "Fetching object");

        let bytes = match self.store.fetch(&location.bucket, &location.key).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!(bucket = %location.bucket, key = %location.key, error = %err, "Error fetching object");
                return Err(err.into());
            }
        };

        let document = parse_document(&bytes).map_err(|source| HandlerError::Parse {
            bucket: location.bucket.clone(),
            key: location.key.clone(),
            source,
        })?;
        metrics.record_processed();

        let target = IndexTarget::for_key(
            &self.config.index_name,
            &self.config.document_type,
            &location.key,
        );
        tracing::debug!(id = %target.id, path = %target.path(), "Sending document to search engine");

        match self
            .search
            .upsert_document(credentials, &target, &document)
            .await
        {
            Ok(receipt) => {
                metrics.record_indexed();
                tracing::info!(id = %target.id, status = %receipt.status, response = %receipt.body, "Search engine response");
                Ok(())
            }
            Err(err) => match self.config.index_failure_policy {
                IndexFailurePolicy::LogAndContinue => {
                    metrics.record_index_failure();
                    tracing::error!(id = %target.id, error = %err, "Error posting document to search engine");
                    Ok(())
                }
                IndexFailurePolicy::FailFast => {
                    tracing::error!(id = %target.id, error = %err, "Error posting document to search engine; aborting batch");
                    Err(err.into())
                }
            },
        }
    }
}
