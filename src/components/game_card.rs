use leptos::prelude::*;
use leptos_router::components::A;

use crate::media::{small_image, CARD_IMAGE_WIDTH};
use crate::state::GameSummary;
use crate::transition::TransitionNames;

const CARD_STYLE: &str = "min-height: 30vh; box-shadow: 0 5px 20px rgba(0, 0, 0, 0.2); \
                          text-align: center; border-radius: 1rem; cursor: pointer; overflow: hidden;";
const THUMB_STYLE: &str = "width: 100%; height: 40vh; object-fit: cover;";

/// While `selected`, the names move to the open overlay: a name may only be
/// carried by one element at a time.
fn card_names(path_id: &str, selected: bool) -> TransitionNames {
    if selected {
        TransitionNames::none()
    } else {
        TransitionNames::for_path(path_id)
    }
}

/// List entry for one game, linking to its detail route.
#[component]
pub fn GameCard(game: GameSummary, #[prop(optional)] selected: bool) -> impl IntoView {
    let path_id = game.id.to_string();
    let names = card_names(&path_id, selected);
    let thumbnail = game.background_image.as_deref().map(|url| {
        view! {
            <img
                src=small_image(url, CARD_IMAGE_WIDTH)
                alt=game.name.clone()
                style=format!("{} view-transition-name: {};", THUMB_STYLE, names.image)
            />
        }
    });

    view! {
        <div
            class="game"
            style=format!("{} view-transition-name: {};", CARD_STYLE, names.card)
        >
            <A href=format!("/game/{}", path_id)>
                <h3 style=format!("view-transition-name: {};", names.title)>{game.name.clone()}</h3>
                <p>{game.released.clone().unwrap_or_default()}</p>
                {thumbnail}
            </A>
        </div>
    }
}
