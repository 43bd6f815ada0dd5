//! Horse record and request payloads. JSON field names follow the frontend (`rasa`, `wiek`, `dostepnosc_do_jazdy`).

use serde::{Deserialize, Serialize};

/// Maximum breed length; matches the `rasa VARCHAR(100)` column.
pub const BREED_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Horse {
    pub id: i32,
    #[serde(rename = "rasa")]
    #[sqlx(rename = "rasa")]
    pub breed: String,
    #[serde(rename = "wiek")]
    #[sqlx(rename = "wiek")]
    pub age: i32,
    #[serde(rename = "dostepnosc_do_jazdy")]
    #[sqlx(rename = "dostepnosc_do_jazdy")]
    pub available_for_riding: bool,
}

/// Body of POST and PUT. PUT must repeat the stored breed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorseInput {
    #[serde(rename = "rasa")]
    pub breed: String,
    #[serde(rename = "wiek")]
    pub age: i32,
    #[serde(rename = "dostepnosc_do_jazdy")]
    pub available_for_riding: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvailabilityFilter {
    #[default]
    All,
    Available,
    Unavailable,
}

impl AvailabilityFilter {
    /// Only the exact strings `true` and `false` filter; anything else lists every horse.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("true") => AvailabilityFilter::Available,
            Some("false") => AvailabilityFilter::Unavailable,
            _ => AvailabilityFilter::All,
        }
    }

    /// `None` means no filter.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            AvailabilityFilter::All => None,
            AvailabilityFilter::Available => Some(true),
            AvailabilityFilter::Unavailable => Some(false),
        }
    }

    pub fn matches(self, horse: &Horse) -> bool {
        self.as_bool().map_or(true, |b| horse.available_for_riding == b)
    }
}

/// Query string of `GET /konie`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub dostepnosc: Option<String>,
}
