//! Release season strings of the form `"<season> <year>"`.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Self::Winter),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" | "autumn" => Ok(Self::Fall),
            other => Err(format!("unknown season: {other}")),
        }
    }
}

/// A parsed start season.
///
/// Parsing is lenient: the name is kept verbatim (lowercased) even when it is
/// not one of the four known seasons, and a missing or non-numeric year
/// yields `year: None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartSeason {
    pub name: String,
    pub year: Option<i32>,
}

impl StartSeason {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let year = parts.next().and_then(|y| y.parse().ok());
        Self { name, year }
    }

    #[must_use]
    pub fn season(&self) -> Option<Season> {
        self.name.parse().ok()
    }
}

impl fmt::Display for StartSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} {}", self.name, year),
            None => f.write_str(&self.name),
        }
    }
}

/// Formats the `"<season> <year>"` string stored in the catalogue.
#[must_use]
pub fn format_start_season(season: Season, year: i32) -> String {
    format!("{season} {year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_season_and_year() {
        let parsed = StartSeason::parse("spring 2012");
        assert_eq!(parsed.name, "spring");
        assert_eq!(parsed.year, Some(2012));
        assert_eq!(parsed.season(), Some(Season::Spring));
    }

    #[test]
    fn tolerates_missing_year_and_odd_casing() {
        let parsed = StartSeason::parse("  Fall ");
        assert_eq!(parsed.name, "fall");
        assert_eq!(parsed.year, None);
        assert_eq!(parsed.to_string(), "fall");
    }

    #[test]
    fn unknown_names_are_kept() {
        let parsed = StartSeason::parse("monsoon 1999");
        assert_eq!(parsed.season(), None);
        assert_eq!(parsed.to_string(), "monsoon 1999");
    }

    #[test]
    fn autumn_is_fall() {
        assert_eq!("Autumn".parse::<Season>(), Ok(Season::Fall));
    }

    #[test]
    fn formats_catalogue_string() {
        assert_eq!(format_start_season(Season::Winter, 2024), "winter 2024");
    }
}
