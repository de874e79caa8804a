//! Driven port for referral relationship lookups.
//!
//! Evaluation itself takes a pre-computed relationship flag. Callers that
//! hold referral links elsewhere implement [`ReferralRelationships`] and use
//! [`crate::ReferralService::evaluate_with_relationships`]; tests can use the
//! deterministic [`InMemoryReferralRelationships`].

use std::collections::HashMap;

use crate::error::RelationshipLookupError;
use crate::user::UserId;

/// Answers whether one user referred another.
pub trait ReferralRelationships: Send + Sync {
    /// Return `true` when `inviter` referred `invitee`.
    ///
    /// # Errors
    ///
    /// Returns [`RelationshipLookupError`] when the source cannot answer.
    fn has_referral(
        &self,
        inviter: &UserId,
        invitee: &UserId,
    ) -> Result<bool, RelationshipLookupError>;
}

/// In-memory relationship table keyed by the referred user.
///
/// Each user is referred by at most one inviter; recording a second link
/// for the same invitee replaces the first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferralRelationships {
    referred_by: HashMap<UserId, UserId>,
}

impl InMemoryReferralRelationships {
    /// Create an empty relationship table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `inviter` referred `invitee`, returning the replaced
    /// inviter if one was already recorded.
    pub fn record(&mut self, inviter: UserId, invitee: UserId) -> Option<UserId> {
        self.referred_by.insert(invitee, inviter)
    }

    /// The inviter recorded for `invitee`, if any.
    #[must_use]
    pub fn inviter_of(&self, invitee: &UserId) -> Option<&UserId> {
        self.referred_by.get(invitee)
    }
}

impl ReferralRelationships for InMemoryReferralRelationships {
    fn has_referral(
        &self,
        inviter: &UserId,
        invitee: &UserId,
    ) -> Result<bool, RelationshipLookupError> {
        Ok(self.inviter_of(invitee) == Some(inviter))
    }
}
