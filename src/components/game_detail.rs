use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::detail::{release_on_backdrop, DetailCard, BACKDROP_CLASS};
use crate::scroll::{DocumentBody, ScrollLock};
use crate::state::DetailState;
use crate::transition::TransitionNames;

const BACKDROP_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; min-height: 100vh; \
                              overflow-y: scroll; background: rgba(0, 0, 0, 0.5); z-index: 5;";
const CARD_STYLE: &str = "position: absolute; left: 10%; width: 80%; border-radius: 1rem; \
                          padding: 2rem 5rem; background: white; color: black; z-index: 10;";
const STATS_STYLE: &str = "display: flex; align-items: center; justify-content: space-between;";
const STAR_STYLE: &str = "width: 1.5rem; height: 1.5rem; display: inline;";
const PLATFORMS_STYLE: &str = "display: flex; justify-content: space-evenly;";
const PLATFORM_ICON_STYLE: &str = "width: 1.5rem; height: 1.5rem; margin-left: 3rem;";
const IMAGE_STYLE: &str = "width: 100%;";

/// Modal detail view for one game.
///
/// Renders nothing while `state` is loading. Once loaded, the overlay holds a
/// [`ScrollLock`] on the page body until it is dismissed or unmounted.
/// `path_id` correlates the card, title and hero image with the matching
/// list card.
#[component]
pub fn GameDetail(
    #[prop(into)] path_id: String,
    #[prop(into)] state: Signal<DetailState>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        state.with(DetailCard::from_state).map(|card| {
            view! { <DetailOverlay path_id=path_id.clone() card=card on_dismiss=on_dismiss /> }
        })
    }
}

#[component]
fn DetailOverlay(path_id: String, card: DetailCard, on_dismiss: Callback<()>) -> impl IntoView {
    let scroll_lock = StoredValue::new(Some(ScrollLock::acquire(DocumentBody)));
    on_cleanup(move || {
        scroll_lock.try_update_value(|lock| lock.take());
    });

    let on_backdrop_click = move |ev: MouseEvent| {
        let target_class = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .map(|el| el.class_name())
            .unwrap_or_default();
        let dismiss = scroll_lock
            .try_update_value(|lock| release_on_backdrop(&target_class, lock))
            .unwrap_or(false);
        if dismiss {
            debug!("backdrop clicked, dismissing detail");
            on_dismiss.run(());
        }
    };

    let names = TransitionNames::for_path(&path_id);

    let stars = card
        .stars
        .iter()
        .map(|star| view! { <img src=star.asset() alt="star" style=STAR_STYLE /> })
        .collect::<Vec<_>>();

    let platforms = card
        .platforms
        .into_iter()
        .map(|badge| {
            view! {
                <img
                    src=badge.icon.asset()
                    alt=badge.name.clone()
                    title=badge.name
                    style=PLATFORM_ICON_STYLE
                />
            }
        })
        .collect::<Vec<_>>();

    let gallery = card
        .gallery
        .into_iter()
        .map(|image| view! { <img src=image.src alt=image.alt style=IMAGE_STYLE /> })
        .collect::<Vec<_>>();

    view! {
        <div class=BACKDROP_CLASS style=BACKDROP_STYLE on:click=on_backdrop_click>
            <div
                class="detail"
                style=format!(
                    "{} view-transition-name: {};",
                    CARD_STYLE,
                    names.card
                )
            >
                <div class="stats" style=STATS_STYLE>
                    <div class="rating">
                        <h3 style=format!(
                            "view-transition-name: {};",
                            names.title
                        )>{card.name}</h3>
                        <p>"Rating: " {card.rating}</p>
                        {stars}
                    </div>
                    <div class="info" style="text-align: center;">
                        <h3>"Platforms"</h3>
                        <div class="platforms" style=PLATFORMS_STYLE>
                            {platforms}
                        </div>
                    </div>
                </div>
                <div class="media" style="margin-top: 5rem;">
                    <img
                        src=card.hero_src
                        alt=card.hero_alt
                        style=format!("{} view-transition-name: {};", IMAGE_STYLE, names.image)
                    />
                </div>
                <div class="description" style="margin: 5rem 0;">
                    <p>{card.description}</p>
                </div>
                <div class="gallery">{gallery}</div>
            </div>
        </div>
    }
}
