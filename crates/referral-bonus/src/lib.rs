//! Referral bonus evaluation for loyalty point awards.
//!
//! This crate decides whether a referring user earns bonus points when the
//! user they referred completes a purchase. Evaluation is a pure function
//! over immutable values: it performs no I/O, keeps no state, and returns a
//! [`ReferralOutcome`] rather than failing.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - Validated value types for [`User`] and [`Purchase`]
//! - The single-operation [`ReferralEvaluator`] port and its
//!   [`ReferralService`] implementation
//! - A [`ReferralPolicy`] carrying the bonus and threshold constants
//! - A [`ReferralRelationships`] port for callers that resolve referral
//!   links before evaluating
//!
//! # Example
//!
//! ```
//! use referral_bonus::{Purchase, ReferralEvaluator, ReferralService, User};
//! use rust_decimal::Decimal;
//!
//! let inviter = User::try_new("user-a", 50).expect("valid inviter");
//! let invitee = User::try_new("user-b", 0).expect("valid invitee");
//! let purchase = Purchase::usd(Decimal::new(600, 1));
//!
//! let outcome = ReferralService::new().evaluate(&inviter, &invitee, &purchase, true);
//!
//! assert!(outcome.success());
//! assert_eq!(outcome.points_awarded(), 100);
//! assert_eq!(outcome.inviter().points().value(), 150);
//! ```

mod error;
mod evaluator;
mod outcome;
mod policy;
mod purchase;
mod relationships;
mod user;

pub use error::{
    PolicyValidationError, PurchaseValidationError, ReferralError, RelationshipLookupError,
    UserValidationError,
};
pub use evaluator::{ReferralEvaluator, ReferralService};
pub use outcome::ReferralOutcome;
pub use policy::{MINIMUM_PURCHASE_AMOUNT, REFERRAL_BONUS_POINTS, ReferralPolicy};
pub use purchase::{CurrencyCode, DEFAULT_CURRENCY, Purchase};
pub use relationships::{InMemoryReferralRelationships, ReferralRelationships};
pub use user::{Points, User, UserId};
