//! Data models for lead validation.
//!
//! This module contains the transient request and result records exchanged
//! between the form controller and the validation endpoint. Nothing here is
//! persisted; every value lives for a single request/response cycle.

pub mod country;
pub mod request;
pub mod result;

pub use country::{Country, SUPPORTED_COUNTRIES};
pub use request::{ValidationRequest, DEFAULT_COUNTRY};
pub use result::{AggregateResult, EmailResult, PhoneResult, UNKNOWN_LINE_TYPE};
