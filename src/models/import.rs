//! Catalogue records accepted by the import command.
//!
//! Both the camelCase shape served by the API and a MyAnimeList detail
//! response (nested `alternative_titles` and `main_picture`) are accepted.

use serde::Deserialize;

use crate::domain::season::{Season, format_start_season};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeRecord {
    #[serde(alias = "mal_id", alias = "id")]
    pub mal_id: i32,
    pub title: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, alias = "start_season")]
    pub start_season: Option<StartSeasonField>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default, alias = "media_type")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, alias = "main_picture")]
    pub main_picture: Option<Picture>,
    #[serde(default, alias = "alternative_titles")]
    pub alternative_titles: AlternativeTitles,
    #[serde(default)]
    pub genres: Vec<NamedField>,
    #[serde(default)]
    pub studios: Vec<NamedField>,
}

impl AnimeRecord {
    #[must_use]
    pub fn start_season_string(&self) -> Option<String> {
        self.start_season.as_ref().map(StartSeasonField::to_catalogue_string)
    }

    /// Every title this anime should be searchable by, main title first,
    /// without blanks or repeats.
    #[must_use]
    pub fn searchable_titles(&self) -> Vec<String> {
        let aliases = self.alternative_titles.titles();
        let mut titles: Vec<String> = Vec::with_capacity(aliases.len() + 1);
        for title in std::iter::once(&self.title).chain(aliases) {
            let trimmed = title.trim();
            if !trimmed.is_empty() && !titles.iter().any(|t| t == trimmed) {
                titles.push(trimmed.to_string());
            }
        }
        titles
    }

    /// The flat `thumbnail`, falling back to the large then medium picture.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<String> {
        self.thumbnail
            .as_deref()
            .or_else(|| {
                self.main_picture
                    .as_ref()
                    .and_then(|p| p.large.as_deref().or(p.medium.as_deref()))
            })
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    }

    #[must_use]
    pub fn genre_names(&self) -> Vec<String> {
        names(&self.genres)
    }

    #[must_use]
    pub fn studio_names(&self) -> Vec<String> {
        names(&self.studios)
    }
}

/// A plain list of aliases, or MyAnimeList's
/// `{ "synonyms": [..], "en": .., "ja": .. }` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AlternativeTitles {
    List(Vec<String>),
    Mal {
        #[serde(default)]
        synonyms: Vec<String>,
        #[serde(default)]
        en: Option<String>,
        #[serde(default)]
        ja: Option<String>,
    },
}

impl Default for AlternativeTitles {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl AlternativeTitles {
    /// English and Japanese titles come before the synonyms.
    #[must_use]
    pub fn titles(&self) -> Vec<&String> {
        match self {
            Self::List(titles) => titles.iter().collect(),
            Self::Mal { synonyms, en, ja } => en
                .iter()
                .chain(ja.iter())
                .chain(synonyms.iter())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Picture {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// `"spring 2012"` or `{ "season": "spring", "year": 2012 }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StartSeasonField {
    Text(String),
    Parts { season: String, year: i32 },
}

impl StartSeasonField {
    #[must_use]
    pub fn to_catalogue_string(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_lowercase(),
            Self::Parts { season, year } => season.parse::<Season>().map_or_else(
                |_| format!("{} {year}", season.trim().to_lowercase()),
                |season| format_start_season(season, *year),
            ),
        }
    }
}

/// A bare name or a `{ "id": .., "name": .. }` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NamedField {
    Name(String),
    Object { name: String },
}

impl NamedField {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Object { name } => name,
        }
    }
}

fn names(fields: &[NamedField]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(fields.len());
    for field in fields {
        let name = field.name().trim();
        if !name.is_empty() && !out.iter().any(|n| n == name) {
            out.push(name.to_string());
        }
    }
    out
}
