//! Normalization of provider payloads into fixed result shapes.
//!
//! Providers name the same attribute differently across versions
//! (`valid`/`isValid`, flat vs nested `formatted`). Each normalized attribute
//! is described by an ordered list of [`FieldPath`]s, and the normalizers are
//! pure functions of the provider outcome and the submitted input, so they
//! can be tested without any network.

pub mod email;
pub mod fields;
pub mod phone;

pub use email::{email_domain, normalize_email};
pub use fields::FieldPath;
pub use phone::normalize_phone;
