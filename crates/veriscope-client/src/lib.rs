//! Streaming client for the investigation backend: NDJSON line framing,
//! request submission, and the run state machine.

pub mod api;
pub mod controller;
pub mod decode;
pub mod error;

pub use api::ApiClient;
pub use controller::Investigator;
pub use decode::LineDecoder;
pub use error::ClientError;
