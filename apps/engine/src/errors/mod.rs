//! Error handling for the Half Suit engine.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, IllegalActionKind, NotFoundKind};
pub use error_code::ErrorCode;
