//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] thrown when an expense amount is not a positive value
//!   with at most two decimals.
//! - [`MissingField`] thrown when a required text field is empty.
//! - [`KeyNotFound`] thrown when an expense is not found.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`MissingField`]: EngineError::MissingField
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    InvalidAmount(String),
    #[error("{0}")]
    MissingField(String),
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::MissingField(a), Self::MissingField(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
