//! Collector module for submitting the form over HTTP

mod client;
mod error;
mod payload;
mod traits;

pub use client::CollectorClient;
pub use error::{Result, SubmitError};
pub use payload::{field_id, SubmissionPayload};
pub use traits::CollectorApi;

#[cfg(test)]
pub use traits::MockCollectorApi;
