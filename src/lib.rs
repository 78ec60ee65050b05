//! Lead Validator - scores sales leads by verifying their email and phone number.
//!
//! A small HTTP service forwards each lead to an email verification provider
//! and a phone verification provider, normalizes their answers, and returns a
//! 0-100 quality score. A form controller drives the service from the client
//! side.
//!
//! # Architecture
//!
//! - **models**: Request and result records
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the verification providers
//! - **normalize**: Provider payload normalization with field-name fallbacks
//! - **scoring**: Score computation and quality tiers
//! - **services**: Lead validation orchestration
//! - **server**: HTTP endpoint
//! - **form**: Client-side form controller and result rendering

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod normalize;
pub mod scoring;
pub mod server;
pub mod services;

pub use client::{
    AsyncProviderClient, AsyncProviderClientImpl, ProviderClient, ProviderResponse,
};
pub use config::Config;
pub use error::{ApiError, ConfigError, FormError, ProviderError, TransportError};
pub use form::{
    FormController, FormState, HttpTransport, LeadForm, ResultPanel, ValidateTransport,
};
pub use models::{AggregateResult, EmailResult, PhoneResult, ValidationRequest};
pub use scoring::QualityTier;
pub use server::{build_router, AppState};
pub use services::{ValidationService, ValidationServiceImpl};
