//! Shared element transition names.
//!
//! The list card and the detail overlay emit the same `view-transition-name`
//! for the same `path_id`, so the browser morphs one into the other when the
//! route changes. Names must be CSS identifiers, hence the prefix and the
//! character filter.

const NO_TRANSITION: &str = "none";

pub fn card_transition_name(path_id: &str) -> String {
    format!("game-{}", sanitize(path_id))
}

pub fn title_transition_name(path_id: &str) -> String {
    format!("title-{}", sanitize(path_id))
}

pub fn image_transition_name(path_id: &str) -> String {
    format!("image-{}", sanitize(path_id))
}

/// The three names one game carries: card, title and cover image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionNames {
    pub card: String,
    pub title: String,
    pub image: String,
}

impl TransitionNames {
    pub fn for_path(path_id: &str) -> Self {
        Self {
            card: card_transition_name(path_id),
            title: title_transition_name(path_id),
            image: image_transition_name(path_id),
        }
    }

    /// Opted out: another element currently carries this game's names.
    pub fn none() -> Self {
        Self {
            card: NO_TRANSITION.to_string(),
            title: NO_TRANSITION.to_string(),
            image: NO_TRANSITION.to_string(),
        }
    }
}

fn sanitize(path_id: &str) -> String {
    path_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
