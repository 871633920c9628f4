use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetailError {
    #[error("detail slice is not loading but has no game")]
    MissingGame,
    #[error("detail slice is not loading but has no screenshots")]
    MissingScreenshots,
    #[error("failed to parse catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Platform {
    pub id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlatformEntry {
    pub platform: Platform,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Game {
    pub name: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<PlatformEntry>>,
    pub background_image: String,
    #[serde(default)]
    pub description_raw: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Screenshot {
    pub id: u64,
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ScreenshotSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Screenshot>>,
}

/// The detail slice as the store holds it: three loosely coupled fields.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DetailSlice {
    #[serde(default)]
    pub screen: Option<ScreenshotSet>,
    #[serde(default)]
    pub game: Option<Game>,
    #[serde(rename = "isLoading", default)]
    pub is_loading: bool,
}

/// What the overlay renders from. `Loaded` always carries both halves.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Loading,
    Loaded {
        game: Game,
        screen: ScreenshotSet,
    },
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }
}

impl TryFrom<DetailSlice> for DetailState {
    type Error = DetailError;

    fn try_from(slice: DetailSlice) -> Result<Self, Self::Error> {
        if slice.is_loading {
            return Ok(DetailState::Loading);
        }
        let game = slice.game.ok_or(DetailError::MissingGame)?;
        let screen = slice.screen.ok_or(DetailError::MissingScreenshots)?;
        Ok(DetailState::Loaded { game, screen })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
}

/// Bootstrap document embedded in the host page.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub games: Vec<GameSummary>,
    #[serde(default)]
    pub details: HashMap<u64, DetailSlice>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, DetailError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unknown ids are still loading as far as the overlay is concerned.
    pub fn detail_for(&self, id: u64) -> Result<DetailState, DetailError> {
        match self.details.get(&id) {
            Some(slice) => DetailState::try_from(slice.clone()),
            None => Ok(DetailState::Loading),
        }
    }
}
