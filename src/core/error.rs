use thiserror::Error;

use super::types::DutyStatus;

/// Errors that can occur anywhere in the billing engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BillingError {
    /// One or more item validation rules failed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A duty cannot be converted into a billing item.
    #[error("duty not eligible: {0}")]
    DutyNotEligible(#[from] DutyNotEligible),

    /// A renderer failed to produce its artifact. Isolated to the one
    /// export requested; the computed invoice is unaffected.
    #[error("render failed: {0}")]
    Render(String),

    /// The backing store rejected a read or write.
    #[error("store error: {0}")]
    Store(String),
}

/// A structured item validation failure. Always recoverable — surfaced to
/// the caller for correction, never partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No non-blank items remain after filtering empty form rows.
    #[error("invoice must contain at least one non-empty billing item")]
    EmptyInvoice,

    /// A single item failed a field-level rule. `index` refers to the
    /// item's position in the caller's original list.
    #[error("billing item {index}: {field} {message}")]
    Item {
        index: usize,
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    pub(crate) fn item(index: usize, field: &'static str, message: impl Into<String>) -> Self {
        Self::Item {
            index,
            field,
            message: message.into(),
        }
    }
}

/// Why a duty cannot be billed. The caller must re-fetch the duty before
/// retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DutyNotEligible {
    /// Only completed duties can be billed.
    #[error("duty is not completed (status: {0})")]
    NotCompleted(DutyStatus),

    /// The duty's billed flag has already been set; at most one billing
    /// record is ever created per duty.
    #[error("duty has already been billed")]
    AlreadyBilled,
}
