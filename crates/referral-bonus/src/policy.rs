//! Referral award rules.

use rust_decimal::Decimal;

use crate::error::PolicyValidationError;

/// Points granted to the inviter for a qualifying purchase.
pub const REFERRAL_BONUS_POINTS: u32 = 100;

/// Purchase amount a purchase must strictly exceed to qualify (50.0).
pub const MINIMUM_PURCHASE_AMOUNT: Decimal = Decimal::from_parts(500, 0, 0, false, 1);

/// Bonus size and qualifying threshold applied during evaluation.
///
/// ## Invariants
/// - `minimum_purchase_amount` is never negative.
///
/// # Examples
///
/// ```
/// use referral_bonus::{MINIMUM_PURCHASE_AMOUNT, REFERRAL_BONUS_POINTS, ReferralPolicy};
///
/// let policy = ReferralPolicy::default();
/// assert_eq!(policy.bonus_points(), REFERRAL_BONUS_POINTS);
/// assert_eq!(policy.minimum_purchase_amount(), MINIMUM_PURCHASE_AMOUNT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferralPolicy {
    bonus_points: u32,
    minimum_purchase_amount: Decimal,
}

impl ReferralPolicy {
    /// The fixed bonus of [`REFERRAL_BONUS_POINTS`] above
    /// [`MINIMUM_PURCHASE_AMOUNT`].
    pub const STANDARD: Self = Self {
        bonus_points: REFERRAL_BONUS_POINTS,
        minimum_purchase_amount: MINIMUM_PURCHASE_AMOUNT,
    };

    /// Build a policy with a custom bonus and threshold.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyValidationError::NegativeMinimumPurchase`] when the
    /// threshold is below zero.
    pub fn try_new(
        bonus_points: u32,
        minimum_purchase_amount: Decimal,
    ) -> Result<Self, PolicyValidationError> {
        if minimum_purchase_amount < Decimal::ZERO {
            return Err(PolicyValidationError::NegativeMinimumPurchase {
                amount: minimum_purchase_amount.to_string(),
            });
        }
        Ok(Self {
            bonus_points,
            minimum_purchase_amount,
        })
    }

    /// Points granted for a qualifying purchase.
    #[must_use]
    pub const fn bonus_points(&self) -> u32 {
        self.bonus_points
    }

    /// Threshold a purchase must strictly exceed.
    #[must_use]
    pub const fn minimum_purchase_amount(&self) -> Decimal {
        self.minimum_purchase_amount
    }

    /// Whether `amount` clears the threshold. The threshold itself does not.
    #[must_use]
    pub fn qualifies(&self, amount: Decimal) -> bool {
        amount > self.minimum_purchase_amount
    }
}

impl Default for ReferralPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}
