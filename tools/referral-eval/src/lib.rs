//! Developer CLI support for evaluating referral bonus awards.
//!
//! The binary delegates to these functions so argument handling, policy
//! configuration, and rendering can be exercised in tests without spawning a
//! subprocess.

mod config;
mod error;

use clap::Parser;
use referral_bonus::{
    DEFAULT_CURRENCY, Purchase, ReferralEvaluator, ReferralOutcome, ReferralPolicy,
    ReferralService, User,
};
use rust_decimal::Decimal;
use tracing::info;

pub use config::ReferralSettings;
pub use error::CliError;

/// Name reported by the binary and passed to the configuration loader.
pub const PROGRAM_NAME: &str = "referral-eval";

/// `referral-eval` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "referral-eval",
    about = "Evaluate whether an inviter earns a referral bonus for a purchase",
    version
)]
pub struct CliArgs {
    /// Identifier of the referring user.
    #[arg(long = "inviter-id", value_name = "id")]
    pub inviter_id: String,
    /// Current point balance of the referring user.
    #[arg(
        long = "inviter-points",
        value_name = "points",
        default_value_t = 0,
        allow_hyphen_values = true
    )]
    pub inviter_points: i64,
    /// Identifier of the referred user making the purchase.
    #[arg(long = "invitee-id", value_name = "id")]
    pub invitee_id: String,
    /// Current point balance of the referred user.
    #[arg(
        long = "invitee-points",
        value_name = "points",
        default_value_t = 0,
        allow_hyphen_values = true
    )]
    pub invitee_points: i64,
    /// Exact purchase amount, e.g. `60.0`.
    #[arg(
        long = "amount",
        value_name = "decimal",
        allow_hyphen_values = true,
        value_parser = parse_amount
    )]
    pub amount: Decimal,
    /// Currency code carried through unchanged.
    #[arg(long = "currency", value_name = "code", default_value = DEFAULT_CURRENCY)]
    pub currency: String,
    /// Whether the inviter referred the invitee.
    #[arg(long = "has-relationship")]
    pub has_relationship: bool,
}

fn parse_amount(raw: &str) -> Result<Decimal, String> {
    Decimal::from_str_exact(raw.trim()).map_err(|err| format!("invalid decimal '{raw}': {err}"))
}

/// Build validated inputs from `args` and evaluate them under `policy`.
///
/// # Errors
///
/// Returns [`CliError`] when the arguments describe an invalid user or
/// purchase. A negative amount is not an error; it yields a rejected
/// outcome.
pub fn evaluate_args(
    args: &CliArgs,
    policy: ReferralPolicy,
) -> Result<ReferralOutcome, CliError> {
    let inviter = User::try_new(args.inviter_id.as_str(), args.inviter_points)
        .map_err(|source| CliError::InvalidInviter { source })?;
    let invitee = User::try_new(args.invitee_id.as_str(), args.invitee_points)
        .map_err(|source| CliError::InvalidInvitee { source })?;
    let purchase = Purchase::new(args.amount, args.currency.as_str())?;

    let outcome = ReferralService::with_policy(policy).evaluate(
        &inviter,
        &invitee,
        &purchase,
        args.has_relationship,
    );
    info!(
        inviter = %inviter.id(),
        invitee = %invitee.id(),
        success = outcome.success(),
        points_awarded = outcome.points_awarded(),
        "referral purchase evaluated"
    );
    Ok(outcome)
}

/// Load layered settings, then evaluate `args`.
///
/// # Errors
///
/// Returns [`CliError`] when configuration or inputs are invalid.
pub fn run(args: &CliArgs) -> Result<ReferralOutcome, CliError> {
    let policy = ReferralSettings::load_layered()?.policy()?;
    evaluate_args(args, policy)
}

/// Render an outcome as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CliError::Render`] if serialization fails.
pub fn render_outcome(outcome: &ReferralOutcome) -> Result<String, CliError> {
    serde_json::to_string_pretty(outcome).map_err(|err| CliError::Render {
        message: err.to_string(),
    })
}
