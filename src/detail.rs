use crate::icons::{star_row, PlatformIcon, StarIcon, STAR_COUNT};
use crate::media::{small_image, DETAIL_IMAGE_WIDTH};
use crate::scroll::{ScrollLock, ScrollTarget};
use crate::state::{DetailState, Game, ScreenshotSet};

/// Class that marks the dimmed layer behind the card.
pub const BACKDROP_CLASS: &str = "shadow";
pub const MAX_PLATFORM_ICONS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformBadge {
    pub name: String,
    pub icon: PlatformIcon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// Everything the overlay shows, resolved ahead of rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailCard {
    pub name: String,
    pub rating: f64,
    pub stars: [StarIcon; STAR_COUNT],
    pub platforms: Vec<PlatformBadge>,
    pub hero_src: String,
    pub hero_alt: String,
    pub description: String,
    pub gallery: Vec<GalleryImage>,
}

impl DetailCard {
    pub fn new(game: &Game, screen: &ScreenshotSet) -> Self {
        let platforms = game
            .platforms
            .iter()
            .flatten()
            .take(MAX_PLATFORM_ICONS)
            .map(|entry| PlatformBadge {
                name: entry.platform.name.clone(),
                icon: PlatformIcon::for_platform(&entry.platform.name),
            })
            .collect();

        let gallery = screen
            .results
            .iter()
            .flatten()
            .map(|shot| GalleryImage {
                src: small_image(&shot.image, DETAIL_IMAGE_WIDTH),
                alt: shot.image.clone(),
            })
            .collect();

        Self {
            name: game.name.clone(),
            rating: game.rating,
            stars: star_row(game.rating),
            platforms,
            hero_src: small_image(&game.background_image, DETAIL_IMAGE_WIDTH),
            hero_alt: game.background_image.clone(),
            description: game.description_raw.clone(),
            gallery,
        }
    }

    /// `None` while loading: the overlay renders nothing at all.
    pub fn from_state(state: &DetailState) -> Option<Self> {
        match state {
            DetailState::Loading => None,
            DetailState::Loaded { game, screen } => Some(Self::new(game, screen)),
        }
    }
}

pub fn is_backdrop_class(class_name: &str) -> bool {
    class_name.split_whitespace().any(|c| c == BACKDROP_CLASS)
}

/// Releases the lock when the click landed on the backdrop itself.
/// Returns whether the overlay should be dismissed.
pub fn release_on_backdrop<T: ScrollTarget>(
    target_class: &str,
    lock: &mut Option<ScrollLock<T>>,
) -> bool {
    if !is_backdrop_class(target_class) {
        return false;
    }
    if let Some(mut held) = lock.take() {
        held.release();
    }
    true
}
