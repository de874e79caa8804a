//! Referral bonus decision logic.
//!
//! Evaluation applies these rules in order; the first match wins:
//!
//! 1. A negative purchase amount is rejected with
//!    [`ReferralError::InvalidPurchaseAmount`].
//! 2. Without a referral relationship nothing is awarded.
//! 3. An amount at or below the policy threshold awards nothing.
//! 4. Otherwise the inviter receives the policy bonus.
//!
//! Inputs are borrowed and never modified; an award is reflected only in the
//! inviter copy carried by the returned [`ReferralOutcome`].

use tracing::{debug, warn};

use crate::error::{ReferralError, RelationshipLookupError};
use crate::outcome::ReferralOutcome;
use crate::policy::ReferralPolicy;
use crate::purchase::Purchase;
use crate::relationships::ReferralRelationships;
use crate::user::User;

/// Domain port for evaluating a referred user's purchase.
pub trait ReferralEvaluator {
    /// Decide whether `inviter` earns a bonus for `purchase`.
    ///
    /// `invitee` is carried for traceability and does not affect the
    /// outcome. Evaluation never fails: business-rule rejections are
    /// reported through an unsuccessful [`ReferralOutcome`].
    fn evaluate(
        &self,
        inviter: &User,
        invitee: &User,
        purchase: &Purchase,
        has_relationship: bool,
    ) -> ReferralOutcome;
}

/// Referral evaluator applying a [`ReferralPolicy`].
///
/// # Examples
///
/// ```
/// use referral_bonus::{Purchase, ReferralEvaluator, ReferralService, User};
/// use rust_decimal::Decimal;
///
/// let inviter = User::try_new("user-a", 50).expect("valid inviter");
/// let invitee = User::try_new("user-b", 0).expect("valid invitee");
/// let purchase = Purchase::usd(Decimal::new(-100, 1));
///
/// let outcome = ReferralService::new().evaluate(&inviter, &invitee, &purchase, true);
///
/// assert!(!outcome.success());
/// assert_eq!(outcome.error_message().as_deref(), Some("Invalid purchase amount"));
/// assert_eq!(outcome.inviter(), &inviter);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferralService {
    policy: ReferralPolicy,
}

impl ReferralService {
    /// Create an evaluator using the default bonus and threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_policy(ReferralPolicy::STANDARD)
    }

    /// Create an evaluator applying a custom policy.
    #[must_use]
    pub const fn with_policy(policy: ReferralPolicy) -> Self {
        Self { policy }
    }

    /// The policy this evaluator applies.
    #[must_use]
    pub const fn policy(&self) -> &ReferralPolicy {
        &self.policy
    }

    /// Resolve the referral relationship, then evaluate.
    ///
    /// # Errors
    ///
    /// Returns [`RelationshipLookupError`] when the relationship source cannot
    /// answer. No evaluation takes place in that case.
    pub fn evaluate_with_relationships<R>(
        &self,
        relationships: &R,
        inviter: &User,
        invitee: &User,
        purchase: &Purchase,
    ) -> Result<ReferralOutcome, RelationshipLookupError>
    where
        R: ReferralRelationships + ?Sized,
    {
        let has_relationship = relationships.has_referral(inviter.id(), invitee.id())?;
        Ok(self.evaluate(inviter, invitee, purchase, has_relationship))
    }
}

impl ReferralEvaluator for ReferralService {
    fn evaluate(
        &self,
        inviter: &User,
        invitee: &User,
        purchase: &Purchase,
        has_relationship: bool,
    ) -> ReferralOutcome {
        if purchase.is_negative() {
            warn!(
                inviter = %inviter.id(),
                invitee = %invitee.id(),
                amount = %purchase.amount(),
                currency = %purchase.currency(),
                "rejected referral purchase with negative amount"
            );
            return ReferralOutcome::rejected(
                inviter.clone(),
                ReferralError::InvalidPurchaseAmount,
            );
        }

        if !has_relationship {
            debug!(
                inviter = %inviter.id(),
                invitee = %invitee.id(),
                "no referral relationship; no bonus awarded"
            );
            return ReferralOutcome::no_award(inviter.clone());
        }

        if !self.policy.qualifies(purchase.amount()) {
            debug!(
                inviter = %inviter.id(),
                invitee = %invitee.id(),
                amount = %purchase.amount(),
                threshold = %self.policy.minimum_purchase_amount(),
                "purchase does not exceed threshold; no bonus awarded"
            );
            return ReferralOutcome::no_award(inviter.clone());
        }

        let bonus = self.policy.bonus_points();
        let updated = inviter.with_awarded_points(bonus);
        debug!(
            inviter = %inviter.id(),
            invitee = %invitee.id(),
            amount = %purchase.amount(),
            currency = %purchase.currency(),
            points_awarded = bonus,
            balance = %updated.points(),
            "referral bonus awarded"
        );
        ReferralOutcome::awarded(updated, bonus)
    }
}
