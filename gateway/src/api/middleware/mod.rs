//! API middleware components

pub mod logging;

pub use logging::{ApiLogger, RequestId, REQUEST_ID_HEADER};
