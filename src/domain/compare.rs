//! Per-field comparison of a guess against the round's answer.
//!
//! These are the hint rules shown next to each guess. They are derived on
//! every request from stored data and hold no state of their own.

use serde::Serialize;
use std::cmp::Ordering;

use super::AnimeId;
use super::season::StartSeason;
use crate::models::anime::Anime;

/// Where the answer lies relative to the guessed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The answer is later / higher.
    Up,
    /// The answer is earlier / lower.
    Down,
    Same,
}

impl From<Ordering> for Direction {
    fn from(answer_vs_guess: Ordering) -> Self {
        match answer_vs_guess {
            Ordering::Greater => Self::Up,
            Ordering::Less => Self::Down,
            Ordering::Equal => Self::Same,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonHint {
    pub season_matches: bool,
    pub year_matches: bool,
    pub year_direction: Option<Direction>,
}

impl SeasonHint {
    #[must_use]
    pub const fn exact(&self) -> bool {
        self.season_matches && self.year_matches
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    pub value: String,
    pub present: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreHint {
    pub matches: bool,
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessComparison {
    pub anime_id: AnimeId,
    pub title: String,
    pub correct: bool,
    pub start_season: SeasonHint,
    pub genres: Vec<Membership>,
    pub studios: Vec<Membership>,
    pub source_matches: bool,
    pub media_type_matches: bool,
    pub mean: ScoreHint,
}

/// Compares one guessed anime with the answer.
#[must_use]
pub fn compare(guess: &Anime, answer: &Anime) -> GuessComparison {
    GuessComparison {
        anime_id: AnimeId::new(guess.mal_id),
        title: guess.title.clone(),
        correct: guess.mal_id == answer.mal_id,
        start_season: compare_season(
            guess.start_season.as_deref(),
            answer.start_season.as_deref(),
        ),
        genres: memberships(&guess.genres, &answer.genres),
        studios: memberships(&guess.studios, &answer.studios),
        source_matches: guess.source == answer.source,
        media_type_matches: guess.media_type == answer.media_type,
        mean: compare_score(guess.mean, answer.mean),
    }
}

/// Substring containment of the guessed season name and year in the
/// answer's season string, plus a year direction.
#[must_use]
pub fn compare_season(guess: Option<&str>, answer: Option<&str>) -> SeasonHint {
    let (Some(guess), Some(answer)) = (guess, answer) else {
        return SeasonHint {
            season_matches: false,
            year_matches: false,
            year_direction: None,
        };
    };

    let guessed = StartSeason::parse(guess);
    let answer_lower = answer.to_lowercase();

    let season_matches = !guessed.name.is_empty() && answer_lower.contains(&guessed.name);
    let year_matches = guessed
        .year
        .is_some_and(|year| answer_lower.contains(&year.to_string()));

    let year_direction = match (guessed.year, StartSeason::parse(answer).year) {
        (Some(guessed_year), Some(answer_year)) => Some(answer_year.cmp(&guessed_year).into()),
        _ => None,
    };

    SeasonHint {
        season_matches,
        year_matches,
        year_direction,
    }
}

fn memberships(guessed: &[String], answer: &[String]) -> Vec<Membership> {
    guessed
        .iter()
        .map(|value| Membership {
            value: value.clone(),
            present: answer.contains(value),
        })
        .collect()
}

#[must_use]
pub fn compare_score(guess: Option<f64>, answer: Option<f64>) -> ScoreHint {
    match (guess, answer) {
        (Some(guess), Some(answer)) => ScoreHint {
            matches: (guess - answer).abs() < f64::EPSILON,
            direction: answer.partial_cmp(&guess).map(Direction::from),
        },
        (None, None) => ScoreHint {
            matches: true,
            direction: None,
        },
        _ => ScoreHint {
            matches: false,
            direction: None,
        },
    }
}
