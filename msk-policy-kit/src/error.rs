//! Error types for ARN decomposition and synthesis.

use thiserror::Error;

/// Errors produced by the ARN codec.
///
/// Both variants indicate a caller bug or an upstream configuration problem
/// (a cluster that was never provisioned, a provider ARN-format change).
/// Neither is retryable and neither is recovered locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArnError {
    /// The input string does not match the colon/slash ARN grammar.
    #[error("malformed ARN {input:?}: {reason}")]
    MalformedArn { input: String, reason: String },

    /// A derived resource type outside the `{topic, group}` set was requested.
    #[error("invalid derived resource type {given:?}: expected \"topic\" or \"group\"")]
    InvalidResourceType { given: String },
}

impl ArnError {
    pub(crate) fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedArn {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type ArnResult<T> = Result<T, ArnError>;
