//! Error types for the referral evaluation CLI.

use referral_bonus::{PolicyValidationError, PurchaseValidationError, UserValidationError};
use thiserror::Error;

/// Errors surfaced while configuring or running an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Layered configuration could not be loaded.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Description of the loader failure.
        message: String,
    },
    /// The configured policy breaks a policy constraint.
    #[error("invalid referral policy: {source}")]
    Policy {
        /// Underlying policy error.
        #[from]
        #[source]
        source: PolicyValidationError,
    },
    /// The inviter flags do not describe a valid user.
    #[error("invalid inviter: {source}")]
    InvalidInviter {
        /// Underlying validation error.
        #[source]
        source: UserValidationError,
    },
    /// The invitee flags do not describe a valid user.
    #[error("invalid invitee: {source}")]
    InvalidInvitee {
        /// Underlying validation error.
        #[source]
        source: UserValidationError,
    },
    /// The purchase flags do not describe a valid purchase.
    #[error("invalid purchase: {source}")]
    InvalidPurchase {
        /// Underlying validation error.
        #[from]
        #[source]
        source: PurchaseValidationError,
    },
    /// The outcome could not be rendered as JSON.
    #[error("failed to render outcome: {message}")]
    Render {
        /// Serializer error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_inviter_includes_source() {
        let err = CliError::InvalidInviter {
            source: UserValidationError::EmptyId,
        };
        assert_eq!(err.to_string(), "invalid inviter: user id must not be empty");
    }

    #[test]
    fn config_errors_include_loader_message() {
        let err = CliError::Config {
            message: "invalid type".to_owned(),
        };
        assert_eq!(err.to_string(), "failed to load configuration: invalid type");
    }

    #[test]
    fn purchase_errors_convert() {
        let err = CliError::from(PurchaseValidationError::EmptyCurrency);
        assert_eq!(
            err.to_string(),
            "invalid purchase: currency code must not be empty"
        );
    }
}
