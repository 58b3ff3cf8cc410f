//! Domain types for the guessing game with strong typing.
//!
//! This module holds the newtype identifiers, the round lifecycle and the
//! pure comparison rules. Nothing in here touches the database.

pub mod compare;
pub mod season;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use compare::{Direction, GuessComparison, Membership, ScoreHint, SeasonHint};
pub use season::{Season, StartSeason};

/// MyAnimeList identifier of an anime.
///
/// This newtype wrapper keeps anime ids apart from row ids such as guess or
/// genre keys.
///
/// # Examples
///
/// ```rust
/// use guess_anime::domain::AnimeId;
///
/// let id = AnimeId::new(5114);
/// assert_eq!(id.value(), 5114);
/// assert_eq!(id.to_string(), "5114");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AnimeId(i32);

impl AnimeId {
    /// Creates a new `AnimeId` from a raw i32 value.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `id` is negative. Request input is validated
    /// before construction.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        debug_assert!(id >= 0, "AnimeId should be non-negative");
        Self(id)
    }

    /// Returns the underlying i32 value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for AnimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AnimeId> for i32 {
    fn from(id: AnimeId) -> Self {
        id.0
    }
}

impl From<i32> for AnimeId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl Serialize for AnimeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for AnimeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i32::deserialize(deserializer)?;
        Ok(Self::new(id))
    }
}

/// When a round stops accepting guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEndPolicy {
    /// The first correct guess ends the round.
    #[default]
    EndOnCorrect,
    /// Any guess ends the round, right or wrong.
    EndOnAnyGuess,
    /// Guessing stays open until the session is replaced.
    Continue,
}

/// Lifecycle of a round.
///
/// `Idle` → `Active` when a session row is written, `Active` → `Finished`
/// when the [`RoundEndPolicy`] says so, and back to `Idle` or a fresh
/// `Active` when the session is deleted or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundState {
    Idle,
    Active {
        answer: AnimeId,
        guesses: usize,
    },
    Finished {
        answer: AnimeId,
        guesses: usize,
        solved: bool,
    },
}

impl RoundState {
    /// Derives the state from the persisted session and guess history.
    #[must_use]
    pub const fn derive(
        answer: Option<AnimeId>,
        guesses: usize,
        solved: bool,
        policy: RoundEndPolicy,
    ) -> Self {
        let Some(answer) = answer else {
            return Self::Idle;
        };

        let finished = match policy {
            RoundEndPolicy::EndOnCorrect => solved,
            RoundEndPolicy::EndOnAnyGuess => guesses > 0,
            RoundEndPolicy::Continue => false,
        };

        if finished {
            Self::Finished {
                answer,
                guesses,
                solved,
            }
        } else {
            Self::Active { answer, guesses }
        }
    }

    #[must_use]
    pub const fn answer(&self) -> Option<AnimeId> {
        match self {
            Self::Idle => None,
            Self::Active { answer, .. } | Self::Finished { answer, .. } => Some(*answer),
        }
    }

    #[must_use]
    pub const fn accepts_guesses(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}
