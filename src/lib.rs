#![deny(missing_docs)]

//! Core library for the upload-to-search Lambda handler.

/// Credential resolution and request signing.
pub mod auth;
/// Environment-driven configuration management.
pub mod config;
/// Plain-text document parsing.
pub mod document;
/// Storage notification payloads.
pub mod event;
/// Invocation pipeline.
pub mod handler;
/// Object key decoding and document id encoding.
pub mod keys;
/// Structured logging and tracing setup.
pub mod logging;
/// Per-invocation counters.
pub mod metrics;
/// Search engine HTTP client.
pub mod search;
/// Object storage access.
pub mod storage;
