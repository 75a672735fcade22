//! Unified Favorites Page
//!
//! Fetches both collections together, reconciles them against the persisted
//! favorite-id lists, and renders the merged sequence. If either fetch
//! fails the merged result is empty rather than partially populated.
//! Removing an item updates the store and the in-memory list without a
//! re-fetch.

use futures::future;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analytics::Analytics;
use crate::api;
use crate::context::{use_app_context, Route};
use crate::favorites::{FavoriteKind, FavoritesStore};
use crate::reconcile::{reconcile, FavoriteItem};

#[component]
pub fn FavoritesList() -> impl IntoView {
    let ctx = use_app_context();
    let analytics = expect_context::<Analytics>();
    let store = FavoritesStore::browser();

    let (items, set_items) = signal(Vec::<FavoriteItem>::new());
    let (loading, set_loading) = signal(true);

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));
    let tracked_view = StoredValue::new(false);

    Effect::new(move |_| {
        if !tracked_view.get_value() {
            analytics.track("Favorites List Viewed", &[]);
            tracked_view.set_value(true);
        }
        set_loading.set(true);
        spawn_local(async move {
            let (houses, spells) = future::join(api::get_houses(), api::get_spells(None)).await;
            if !alive.try_get_value().unwrap_or(false) {
                return;
            }
            let merged = match (houses, spells) {
                (Ok(houses), Ok(spells)) => reconcile(
                    &houses,
                    &spells,
                    &store.list(FavoriteKind::House),
                    &store.list(FavoriteKind::Spell),
                ),
                (Err(err), _) | (_, Err(err)) => {
                    web_sys::console::warn_1(
                        &format!("favorites: failed to load collections: {err}").into(),
                    );
                    Vec::new()
                }
            };
            set_items.set(merged);
            set_loading.set(false);
        });
    });

    let unfavorite = move |item: FavoriteItem| {
        store.remove(item.kind, &item.id);
        set_items.update(|items| {
            items.retain(|existing| !(existing.kind == item.kind && existing.id == item.id));
        });
        analytics.track("Item Unfavorited", &[
            ("item_type", item.kind.label()),
            ("item_id", item.id.as_str()),
            ("item_name", item.name.as_str()),
            ("source", "favorites_list"),
        ]);
    };

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1 class="title">"Your Favorites"</h1>
                <p class="subtitle">"Houses and Spells you marked as favorite"</p>
            </div>

            <Show when=move || loading.get()>
                <div class="loader-wrap">
                    <div class="spinner"></div>
                    "Loading..."
                </div>
            </Show>

            <Show when=move || !loading.get() && items.with(Vec::is_empty)>
                <div class="empty">"No favorites yet."</div>
            </Show>

            <Show when=move || !loading.get()>
                <div class="houses-grid">
                    {move || items.get().into_iter().map(|item| {
                        let kind = item.kind;
                        let name = item.name.clone();
                        let detail_label = match kind {
                            FavoriteKind::House => "Founder: ",
                            FavoriteKind::Spell => "Creator: ",
                        };
                        let detail = item.detail.clone().unwrap_or_else(|| "—".to_string());
                        let nav_id = item.id.clone();
                        let removal = item.clone();
                        view! {
                            <article
                                class="house-card"
                                role="button"
                                on:click=move |_| {
                                    let route = match kind {
                                        FavoriteKind::House => Route::HouseDetail(nav_id.clone()),
                                        FavoriteKind::Spell => Route::SpellDetail(nav_id.clone()),
                                    };
                                    ctx.navigate(route);
                                }
                            >
                                <header class="house-card-header">
                                    <h3 class="house-name">{name}</h3>
                                    <span class="badge">{kind.label()}</span>
                                </header>

                                <div class="house-body">
                                    <p class="muted"><strong>{detail_label}</strong>{detail}</p>
                                </div>

                                <div class="card-actions">
                                    <button
                                        class="btn small"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            unfavorite(removal.clone());
                                        }
                                    >
                                        "Unfavorite"
                                    </button>
                                </div>
                            </article>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
