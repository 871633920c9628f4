use crate::components::{GameCard, GameDetail};
use crate::state::{Catalog, DetailState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::path;
use tracing::{debug, error, info, warn};

const INITIAL_STATE_ID: &str = "initial-state";
const ROOT_PATH: &str = "/";
/// Route changes run inside the View Transition API so the shared names morph.
const ROUTE_TRANSITIONS: bool = true;

/// The catalog never changes after bootstrap, so it is stored, not signalled.
#[derive(Clone, Copy)]
pub struct CatalogCtx {
    pub catalog: StoredValue<Catalog>,
}

impl CatalogCtx {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn detail(&self, path_id: &str) -> DetailState {
        self.catalog.with_value(|c| select_detail(c, path_id))
    }
}

fn load_catalog() -> Catalog {
    let Some(json) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(INITIAL_STATE_ID))
        .and_then(|el| el.text_content())
    else {
        warn!(id = INITIAL_STATE_ID, "no initial state in page, catalog is empty");
        return Catalog::default();
    };

    match Catalog::from_json(&json) {
        Ok(catalog) => {
            info!(
                games = catalog.games.len(),
                details = catalog.details.len(),
                "catalog loaded"
            );
            catalog
        }
        Err(err) => {
            error!(%err, "initial state is not a valid catalog");
            Catalog::default()
        }
    }
}

fn select_detail(catalog: &Catalog, path_id: &str) -> DetailState {
    let Ok(id) = path_id.parse::<u64>() else {
        debug!(path_id, "non-numeric game id");
        return DetailState::Loading;
    };
    catalog.detail_for(id).unwrap_or_else(|err| {
        error!(%err, id, "malformed detail slice");
        DetailState::Loading
    })
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(CatalogCtx::new(load_catalog()));

    view! {
        <Router>
            <main style="padding: 0 5rem; font-family: sans-serif;">
                <Routes transition=ROUTE_TRANSITIONS fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/game/:id") view=GameRoute />
                </Routes>
            </main>
        </Router>
    }
}

/// The game list. Stays mounted under an open detail overlay.
#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<CatalogCtx>().expect("CatalogCtx is provided by App");
    let params = use_params_map();

    view! {
        <h2>"Games"</h2>
        <div
            class="games"
            style="display: grid; grid-template-columns: repeat(auto-fit, minmax(500px, 1fr)); \
                   grid-column-gap: 3rem; grid-row-gap: 5rem; min-height: 80vh;"
        >
            {move || {
                let open = params.read().get("id");
                ctx.catalog.with_value(|c| {
                    c.games
                        .iter()
                        .map(|game| {
                            let selected = open.as_deref() == Some(game.id.to_string().as_str());
                            view! { <GameCard game=game.clone() selected=selected /> }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </div>
    }
}

#[component]
fn GameRoute() -> impl IntoView {
    let ctx = use_context::<CatalogCtx>().expect("CatalogCtx is provided by App");
    let params = use_params_map();
    let path_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let state = Signal::derive(move || ctx.detail(&path_id.get()));

    let navigate = use_navigate();
    let on_dismiss = Callback::new(move |_: ()| navigate(ROOT_PATH, Default::default()));

    view! {
        <Home />
        {move || view! { <GameDetail path_id=path_id.get() state=state on_dismiss=on_dismiss /> }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "games": [{"id": 3498, "name": "Grand Theft Auto V"}],
        "details": {
            "3498": {
                "isLoading": false,
                "game": {
                    "name": "Grand Theft Auto V",
                    "rating": 4.47,
                    "background_image": "https://media.rawg.io/media/games/456/gta5.jpg",
                    "description_raw": "Rockstar Games went bigger."
                },
                "screen": {"results": []}
            },
            "12": {"isLoading": false, "game": null, "screen": {"results": []}},
            "13": {"isLoading": true}
        }
    }"#;

    #[test]
    fn selects_loaded_detail_by_path_id() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert!(!select_detail(&catalog, "3498").is_loading());
    }

    #[test]
    fn unknown_or_invalid_ids_stay_loading() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert!(select_detail(&catalog, "1").is_loading());
        assert!(select_detail(&catalog, "gta").is_loading());
        assert!(select_detail(&catalog, "").is_loading());
    }

    #[test]
    fn route_changes_use_view_transitions() {
        assert!(ROUTE_TRANSITIONS);
    }

    #[test]
    fn stored_catalog_selects_details() {
        let ctx = CatalogCtx::new(Catalog::from_json(CATALOG).unwrap());
        assert!(!ctx.detail("3498").is_loading());
        assert!(ctx.detail("12").is_loading());
        assert_eq!(ctx.catalog.with_value(|c| c.games.len()), 1);
    }

    #[test]
    fn malformed_and_loading_slices_render_nothing() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert!(select_detail(&catalog, "12").is_loading());
        assert!(select_detail(&catalog, "13").is_loading());
    }
}
