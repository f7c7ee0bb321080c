//! Per-invocation pipeline: fetch, parse, and index every notified object.

mod service;
pub mod types;

pub use service::UploadHandler;
pub use types::{HandlerError, InvocationResponse};
