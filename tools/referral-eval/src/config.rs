//! Referral policy configuration loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use referral_bonus::{MINIMUM_PURCHASE_AMOUNT, ReferralPolicy};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::CliError;

/// Configuration overrides for the referral policy.
///
/// Values come from `REFERRAL_*` environment variables or a configuration
/// file; anything unset falls back to the standard policy.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REFERRAL")]
pub struct ReferralSettings {
    /// Points granted for a qualifying purchase.
    #[ortho_config(default = 100)]
    pub bonus_points: u32,
    /// Exact decimal a purchase must strictly exceed to qualify.
    ///
    /// Accepts both numeric and string forms, so `40`, `75.50` and `"75.50"`
    /// all load.
    pub minimum_purchase_amount: Option<Decimal>,
}

impl ReferralSettings {
    /// Load settings from the environment and configuration files only.
    ///
    /// Command-line flags belong to [`crate::CliArgs`], so the loader sees
    /// just the program name.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when a source cannot be read or parsed.
    pub fn load_layered() -> Result<Self, CliError> {
        Self::load_from_iter([OsString::from(crate::PROGRAM_NAME)]).map_err(|err| {
            CliError::Config {
                message: err.to_string(),
            }
        })
    }

    /// Return the configured bonus.
    #[must_use]
    pub const fn bonus_points(&self) -> u32 {
        self.bonus_points
    }

    /// Return the configured threshold, falling back to the default.
    #[must_use]
    pub fn minimum_purchase_amount(&self) -> Decimal {
        self.minimum_purchase_amount.unwrap_or(MINIMUM_PURCHASE_AMOUNT)
    }

    /// Build the policy these settings describe.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Policy`] when the threshold is negative.
    pub fn policy(&self) -> Result<ReferralPolicy, CliError> {
        Ok(ReferralPolicy::try_new(
            self.bonus_points(),
            self.minimum_purchase_amount(),
        )?)
    }
}
