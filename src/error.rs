//! Registration errors.

use crate::kind::KindId;
use thiserror::Error;

/// Characters a file suffix may not contain.
pub const RESERVED_SUFFIX_CHARS: &[char] = &[';', '#', '@', '/', '\\'];

/// Why a kind was refused by the registry.
///
/// Every variant is local and final; nothing here is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing id")]
    MissingId,

    #[error("duplicate id: {id}")]
    DuplicateId { id: KindId },

    #[error("missing suffix for kind {id}")]
    MissingSuffix { id: KindId },

    #[error("invalid suffix {suffix:?} for kind {id}: {reason}")]
    InvalidSuffix {
        id: KindId,
        suffix: String,
        reason: InvalidSuffixReason,
    },

    #[error("suffix already registered: {suffix:?} for kind {id} conflicts with {existing}")]
    SuffixAlreadyRegistered {
        id: KindId,
        suffix: String,
        existing: KindId,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSuffixReason {
    #[error("reserved character {0:?}")]
    ReservedChar(char),

    #[error("no letters or digits")]
    NoTokens,
}

impl ValidationError {
    /// Id of the kind that was rejected, when it had one.
    pub fn kind_id(&self) -> Option<&KindId> {
        match self {
            ValidationError::MissingId => None,
            ValidationError::DuplicateId { id }
            | ValidationError::MissingSuffix { id }
            | ValidationError::InvalidSuffix { id, .. }
            | ValidationError::SuffixAlreadyRegistered { id, .. } => Some(id),
        }
    }
}
