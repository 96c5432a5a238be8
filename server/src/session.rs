//! Session and content identifiers plus protocol defaults.
//!
//! Both identifiers are UUIDs minted by the server. A session identifier
//! names a stored template; a content identifier names one rendered document
//! and doubles as the seeding identifier for deterministic regeneration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Session lifetime applied when a request does not specify one.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

/// Upper bound accepted for a requested session lifetime.
pub const MAX_SESSION_TTL_MINUTES: i64 = 1440;

/// Lifetime of a cached rendered document.
pub const DEFAULT_CONTENT_TTL_MINUTES: i64 = 15;

/// Content type served when a session does not configure one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Rejections raised when parsing identifiers from request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    /// The session parameter is not a UUID.
    #[error("session identifier must be a UUID")]
    InvalidSessionId,
    /// The content parameter is not a UUID.
    #[error("content identifier must be a UUID")]
    InvalidContentId,
}

/// Identifier of a stored template session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Uuid)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Mint a fresh random session identifier.
    #[must_use]
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = IdParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| IdParseError::InvalidSessionId)
    }
}

/// Identifier of one rendered document.
///
/// The string form of this identifier is the seeding identifier passed to
/// the renderer, so a content identifier alone is enough to reproduce its
/// document for a given template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Uuid)]
pub struct ContentId(Uuid);

impl ContentId {
    /// Mint a fresh random content identifier.
    #[must_use]
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ContentId {
    type Err = IdParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| IdParseError::InvalidContentId)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn session_id_round_trips_through_display() {
        let id = SessionId::mint();
        let parsed: SessionId = id.to_string().parse().expect("display form parses");
        assert_eq!(parsed, id);
    }

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case("123e4567-e89b-12d3-a456-42661417400")]
    fn malformed_session_ids_are_rejected(#[case] value: &str) {
        assert_eq!(
            value.parse::<SessionId>(),
            Err(IdParseError::InvalidSessionId)
        );
    }

    #[rstest]
    fn malformed_content_ids_are_rejected() {
        assert_eq!(
            "nope".parse::<ContentId>(),
            Err(IdParseError::InvalidContentId)
        );
    }

    #[rstest]
    fn minted_identifiers_are_unique() {
        assert_ne!(ContentId::mint(), ContentId::mint());
    }

    #[rstest]
    fn parse_error_messages_name_the_parameter() {
        assert_eq!(
            IdParseError::InvalidSessionId.to_string(),
            "session identifier must be a UUID"
        );
        assert_eq!(
            IdParseError::InvalidContentId.to_string(),
            "content identifier must be a UUID"
        );
    }
}
