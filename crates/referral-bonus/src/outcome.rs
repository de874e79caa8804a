//! Result of evaluating a referral purchase.

use serde::Serialize;

use crate::error::ReferralError;
use crate::user::User;

/// Outcome of a single referral evaluation.
///
/// ## Invariants
/// - An error is present if and only if the outcome is unsuccessful.
/// - `points_awarded` is zero whenever the outcome is unsuccessful.
///
/// The constructors are the only way to build an outcome, so both
/// invariants hold for every value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ReferralOutcomeDto")]
pub struct ReferralOutcome {
    inviter: User,
    points_awarded: u32,
    error: Option<ReferralError>,
}

impl ReferralOutcome {
    /// A successful evaluation that granted `points` to the returned inviter.
    #[must_use]
    pub const fn awarded(inviter: User, points: u32) -> Self {
        Self {
            inviter,
            points_awarded: points,
            error: None,
        }
    }

    /// A successful evaluation that granted nothing.
    #[must_use]
    pub const fn no_award(inviter: User) -> Self {
        Self::awarded(inviter, 0)
    }

    /// A rejected evaluation. The inviter is returned unchanged.
    #[must_use]
    pub const fn rejected(inviter: User, error: ReferralError) -> Self {
        Self {
            inviter,
            points_awarded: 0,
            error: Some(error),
        }
    }

    /// Whether the evaluation completed without a business-rule failure.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.error.is_none()
    }

    /// The inviter after evaluation, carrying any updated balance.
    #[must_use]
    pub const fn inviter(&self) -> &User {
        &self.inviter
    }

    /// Consume the outcome, returning the inviter.
    #[must_use]
    pub fn into_inviter(self) -> User {
        self.inviter
    }

    /// Points granted by this evaluation; zero or the policy bonus.
    #[must_use]
    pub const fn points_awarded(&self) -> u32 {
        self.points_awarded
    }

    /// The business-rule failure, when unsuccessful.
    #[must_use]
    pub const fn error(&self) -> Option<ReferralError> {
        self.error
    }

    /// Human-readable failure message, when unsuccessful.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|error| error.to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReferralOutcomeDto {
    success: bool,
    inviter: User,
    points_awarded: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl From<ReferralOutcome> for ReferralOutcomeDto {
    fn from(value: ReferralOutcome) -> Self {
        Self {
            success: value.success(),
            error_message: value.error_message(),
            points_awarded: value.points_awarded,
            inviter: value.inviter,
        }
    }
}
