//! Error type for controller operations.

use crate::store::StoreError;
use thiserror::Error;

/// A missing id is not an error here; operations report it through their
/// return value instead.
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}
