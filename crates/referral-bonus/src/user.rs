//! Referral participant data model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UserValidationError;

/// Opaque user identifier, unique within the caller's domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError::EmptyId`] when the identifier is empty
    /// or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.into())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.trim().is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Non-negative loyalty point balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(u64);

impl Points {
    /// An empty balance.
    pub const ZERO: Self = Self(0);

    /// Wrap an unsigned balance.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw balance.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Add an award to the balance, saturating at [`u64::MAX`].
    #[must_use]
    pub const fn saturating_add(self, award: u32) -> Self {
        Self(self.0.saturating_add(award as u64))
    }
}

impl TryFrom<i64> for Points {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| UserValidationError::NegativePoints { value })
    }
}

impl From<u64> for Points {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A referral participant: either the inviter or the invitee.
///
/// ## Invariants
/// - `id` is non-empty once trimmed of whitespace.
/// - `points` is never negative.
///
/// Values are immutable; balance changes produce a new [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    points: Points,
}

impl User {
    /// Build a new [`User`] from validated components.
    #[must_use]
    pub const fn new(id: UserId, points: Points) -> Self {
        Self { id, points }
    }

    /// Fallible constructor enforcing identifier and balance invariants.
    ///
    /// Prefer [`User::new`] when components are already validated.
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError`] when the identifier is blank or the
    /// balance is negative.
    pub fn try_new(id: impl Into<String>, points: i64) -> Result<Self, UserValidationError> {
        let user_id = UserId::new(id)?;
        let balance = Points::try_from(points)?;
        Ok(Self::new(user_id, balance))
    }

    /// Stable user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Current loyalty point balance.
    #[must_use]
    pub const fn points(&self) -> Points {
        self.points
    }

    /// Return a copy of this user with `award` added to the balance.
    #[must_use]
    pub fn with_awarded_points(&self, award: u32) -> Self {
        Self {
            id: self.id.clone(),
            points: self.points.saturating_add(award),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UserDto {
    id: String,
    #[serde(default)]
    points: RawPoints,
}

/// Wire form of a balance.
///
/// Balances serialise as unsigned integers; signed input is still accepted
/// so negative values are reported rather than failing as a type mismatch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum RawPoints {
    Balance(u64),
    Signed(i64),
}

impl Default for RawPoints {
    fn default() -> Self {
        Self::Balance(0)
    }
}

impl TryFrom<RawPoints> for Points {
    type Error = UserValidationError;

    fn try_from(value: RawPoints) -> Result<Self, Self::Error> {
        match value {
            RawPoints::Balance(balance) => Ok(Self::new(balance)),
            RawPoints::Signed(signed) => Self::try_from(signed),
        }
    }
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, points } = value;
        Self {
            id: id.into(),
            points: RawPoints::Balance(points.value()),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let id = UserId::new(value.id)?;
        let points = Points::try_from(value.points)?;
        Ok(Self::new(id, points))
    }
}
