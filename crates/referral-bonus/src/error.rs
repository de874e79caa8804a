//! Error types for the referral-bonus crate.
//!
//! Two layers are kept apart here. Construction errors
//! ([`UserValidationError`], [`PurchaseValidationError`],
//! [`PolicyValidationError`]) reject values that break a field constraint.
//! [`ReferralError`] is the business-rule failure carried inside a failed
//! [`crate::ReferralOutcome`]; evaluation never returns it as `Err`.

use thiserror::Error;

/// Business-rule failures reported through a failed referral outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ReferralError {
    /// The purchase amount was negative.
    #[error("Invalid purchase amount")]
    InvalidPurchaseAmount,
}

/// Constraint violations raised when constructing a [`crate::User`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The user identifier was empty or whitespace-only.
    #[error("user id must not be empty")]
    EmptyId,
    /// The point balance was below zero.
    #[error("points must not be negative, got {value}")]
    NegativePoints {
        /// The rejected balance.
        value: i64,
    },
}

/// Constraint violations raised when constructing a [`crate::Purchase`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseValidationError {
    /// The currency code was empty or whitespace-only.
    #[error("currency code must not be empty")]
    EmptyCurrency,
    /// A strict constructor received a negative amount.
    #[error("purchase amount must not be negative, got {amount}")]
    NegativeAmount {
        /// The rejected amount, rendered exactly.
        amount: String,
    },
}

/// Constraint violations raised when constructing a [`crate::ReferralPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyValidationError {
    /// The qualifying purchase threshold was below zero.
    #[error("minimum purchase amount must not be negative, got {amount}")]
    NegativeMinimumPurchase {
        /// The rejected threshold, rendered exactly.
        amount: String,
    },
}

/// Failures surfaced by a [`crate::ReferralRelationships`] lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationshipLookupError {
    /// The backing relationship source could not answer.
    #[error("referral relationship lookup failed: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
    },
}

impl RelationshipLookupError {
    /// Convenience constructor for [`RelationshipLookupError::Unavailable`].
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_purchase_amount_formats_correctly() {
        assert_eq!(
            ReferralError::InvalidPurchaseAmount.to_string(),
            "Invalid purchase amount"
        );
    }

    #[test]
    fn user_empty_id_formats_correctly() {
        assert_eq!(
            UserValidationError::EmptyId.to_string(),
            "user id must not be empty"
        );
    }

    #[test]
    fn user_negative_points_formats_correctly() {
        let err = UserValidationError::NegativePoints { value: -5 };
        assert_eq!(err.to_string(), "points must not be negative, got -5");
    }

    #[test]
    fn purchase_empty_currency_formats_correctly() {
        assert_eq!(
            PurchaseValidationError::EmptyCurrency.to_string(),
            "currency code must not be empty"
        );
    }

    #[test]
    fn purchase_negative_amount_formats_correctly() {
        let err = PurchaseValidationError::NegativeAmount {
            amount: "-10.0".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "purchase amount must not be negative, got -10.0"
        );
    }

    #[test]
    fn policy_negative_minimum_formats_correctly() {
        let err = PolicyValidationError::NegativeMinimumPurchase {
            amount: "-1".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "minimum purchase amount must not be negative, got -1"
        );
    }

    #[test]
    fn relationship_unavailable_formats_correctly() {
        let err = RelationshipLookupError::unavailable("store offline");
        assert_eq!(
            err.to_string(),
            "referral relationship lookup failed: store offline"
        );
    }
}
