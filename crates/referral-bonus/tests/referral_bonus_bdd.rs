//! Behavioural tests for referral bonus evaluation.
//!
//! These tests validate the evaluator against Gherkin scenarios covering
//! awards, the exclusive threshold, missing relationships, rejected amounts,
//! and relationship lookups.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use referral_bonus::{
    InMemoryReferralRelationships, Purchase, ReferralEvaluator, ReferralOutcome, ReferralService,
    User,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use rust_decimal::Decimal;

// ============================================================================
// Test fixtures
// ============================================================================

const INVITER_ID: &str = "user-a";
const INVITEE_ID: &str = "user-b";

/// Test world holding the participants and evaluation results.
#[derive(Default, ScenarioState)]
struct World {
    inviter: Slot<User>,
    has_relationship: Slot<bool>,
    relationships: Slot<InMemoryReferralRelationships>,
    outcome: Slot<ReferralOutcome>,
    second_outcome: Slot<ReferralOutcome>,
}

impl World {
    /// Extracts the inviter from the world state.
    fn inviter(&self) -> User {
        self.inviter.get().expect("inviter should be set")
    }

    /// Extracts the first evaluation outcome from the world state.
    fn outcome(&self) -> ReferralOutcome {
        self.outcome.get().expect("outcome should be recorded")
    }

    /// Extracts the relationship flag from the world state.
    fn has_relationship(&self) -> bool {
        self.has_relationship
            .get()
            .expect("relationship flag should be set")
    }

    /// Extracts the relationship table from the world state.
    fn relationships(&self) -> InMemoryReferralRelationships {
        self.relationships
            .get()
            .expect("relationship table should be set")
    }
}

fn invitee() -> User {
    User::try_new(INVITEE_ID, 0).expect("valid invitee")
}

fn purchase(amount: Decimal, currency: &str) -> Purchase {
    Purchase::new(amount, currency).expect("valid purchase")
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("an inviter with {points} points")]
fn an_inviter_with_points(world: &World, points: i64) {
    let inviter = User::try_new(INVITER_ID, points).expect("valid inviter");
    world.inviter.set(inviter);
}

#[given("the inviter referred the invitee")]
fn the_inviter_referred_the_invitee(world: &World) {
    world.has_relationship.set(true);
}

#[given("the inviter did not refer the invitee")]
fn the_inviter_did_not_refer_the_invitee(world: &World) {
    world.has_relationship.set(false);
}

#[given("a relationship table recording that the inviter referred the invitee")]
fn a_relationship_table_recording_the_referral(world: &World) {
    let mut table = InMemoryReferralRelationships::new();
    table.record(world.inviter().id().clone(), invitee().id().clone());
    world.relationships.set(table);
}

#[given("an empty relationship table")]
fn an_empty_relationship_table(world: &World) {
    world.relationships.set(InMemoryReferralRelationships::new());
}

// ============================================================================
// When steps
// ============================================================================

#[when("the invitee makes a purchase of {amount} {currency}")]
fn the_invitee_makes_a_purchase(world: &World, amount: Decimal, currency: String) {
    let outcome = ReferralService::new().evaluate(
        &world.inviter(),
        &invitee(),
        &purchase(amount, &currency),
        world.has_relationship(),
    );
    world.outcome.set(outcome);
}

#[when("the invitee's purchase of {amount} {currency} is evaluated twice")]
fn the_purchase_is_evaluated_twice(world: &World, amount: Decimal, currency: String) {
    let service = ReferralService::new();
    let inviter = world.inviter();
    let invitee = invitee();
    let bought = purchase(amount, &currency);
    let has_relationship = world.has_relationship();

    let first = service.evaluate(&inviter, &invitee, &bought, has_relationship);
    let second = service.evaluate(&inviter, &invitee, &bought, has_relationship);

    world.outcome.set(first);
    world.second_outcome.set(second);
}

#[when("the invitee's purchase of {amount} {currency} is evaluated against the table")]
fn the_purchase_is_evaluated_against_the_table(world: &World, amount: Decimal, currency: String) {
    let outcome = ReferralService::new()
        .evaluate_with_relationships(
            &world.relationships(),
            &world.inviter(),
            &invitee(),
            &purchase(amount, &currency),
        )
        .expect("in-memory lookup succeeds");
    world.outcome.set(outcome);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the evaluation succeeds")]
fn the_evaluation_succeeds(world: &World) {
    let outcome = world.outcome();
    assert!(outcome.success(), "Expected success: {outcome:?}");
    assert_eq!(outcome.error_message(), None);
}

#[then("the evaluation is rejected with message {message}")]
fn the_evaluation_is_rejected_with_message(world: &World, message: String) {
    let outcome = world.outcome();
    assert!(!outcome.success(), "Expected failure: {outcome:?}");
    assert_eq!(outcome.error_message(), Some(message));
}

#[then("the inviter is awarded {points} points")]
fn the_inviter_is_awarded_points(world: &World, points: u32) {
    assert_eq!(world.outcome().points_awarded(), points);
}

#[then("the inviter has {points} points")]
fn the_inviter_has_points(world: &World, points: u64) {
    assert_eq!(world.outcome().inviter().points().value(), points);
}

#[then("both evaluations produce identical outcomes")]
fn both_evaluations_produce_identical_outcomes(world: &World) {
    let second = world
        .second_outcome
        .get()
        .expect("second outcome should be recorded");
    assert_eq!(world.outcome(), second, "Evaluation should be deterministic");
}

#[then("the original inviter still has {points} points")]
fn the_original_inviter_still_has_points(world: &World, points: u64) {
    assert_eq!(world.inviter().points().value(), points);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/referral_bonus.feature",
    name = "Successful referral bonus"
)]
fn successful_referral_bonus(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/referral_bonus.feature",
    name = "Purchase amount too low"
)]
fn purchase_amount_too_low(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/referral_bonus.feature",
    name = "No referral relationship"
)]
fn no_referral_relationship(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/referral_bonus.feature",
    name = "Invalid purchase amount"
)]
fn invalid_purchase_amount(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/referral_bonus.feature",
    name = "Purchase exactly at the threshold"
)]
fn purchase_exactly_at_the_threshold(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/referral_bonus.feature",
    name = "Repeated evaluation yields the same outcome"
)]
fn repeated_evaluation_yields_the_same_outcome(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/referral_bonus.feature",
    name = "Relationship resolved from recorded referrals"
)]
fn relationship_resolved_from_recorded_referrals(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/referral_bonus.feature",
    name = "Relationship table without a matching referral"
)]
fn relationship_table_without_a_matching_referral(world: World) {
    let _ = world;
}
