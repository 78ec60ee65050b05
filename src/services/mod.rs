//! Application service layer.
//!
//! Services contain the aggregation logic and sit between the HTTP handlers
//! and the provider client.

mod validation_service;

pub use validation_service::{ValidationService, ValidationServiceImpl};
