//! House Detail Page
//!
//! Renders one house and its favorite toggle. The toggle uses the entity's
//! own resolved identifier once the load settles; the route-supplied id is
//! only a pre-load fallback, since URL-derived house ids and canonical ids
//! can disagree.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analytics::{detail_back_event, detail_viewed_event, favorite_toggle_event, Analytics};
use crate::api;
use crate::assets;
use crate::components::DetailRow;
use crate::context::{use_app_context, Route};
use crate::favorites::{FavoriteKind, FavoriteState, FavoritesStore};
use crate::models::House;

#[component]
pub fn HouseDetail(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let analytics = expect_context::<Analytics>();
    let store = FavoritesStore::browser();

    let (house, set_house) = signal(None::<House>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (favorite, set_favorite) = signal(FavoriteState::Unknown);

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));
    let tracked_view = StoredValue::new(false);

    let route_id = StoredValue::new(id);

    Effect::new(move |_| {
        let id = route_id.get_value();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::get_house_detail(&id).await;
            if !alive.try_get_value().unwrap_or(false) {
                return;
            }
            match result {
                Ok(data) => {
                    let resolved = data.resolved_id().unwrap_or(id);
                    set_favorite.set(FavoriteState::from_membership(
                        store.is_favorited(FavoriteKind::House, &resolved),
                    ));
                    if !tracked_view.get_value() {
                        analytics.track(&detail_viewed_event(FavoriteKind::House), &[
                            ("house_id", resolved.as_str()),
                            ("house_name", data.display_name()),
                        ]);
                        tracked_view.set_value(true);
                    }
                    set_house.set(Some(data));
                }
                Err(err) => set_error.set(Some(err)),
            }
            set_loading.set(false);
        });
    });

    // Entity id wins once loaded; route id only before that
    let resolved_id = move || {
        house
            .get()
            .and_then(|h| h.resolved_id())
            .or_else(|| {
                let id = route_id.get_value();
                (!id.is_empty()).then_some(id)
            })
    };

    let on_toggle = move |_| {
        let Some(id) = resolved_id() else { return };
        let name = house
            .get()
            .map(|h| h.display_name().to_string())
            .unwrap_or_default();
        let now_favorited = match favorite.get() {
            FavoriteState::Favorited => {
                store.remove(FavoriteKind::House, &id);
                false
            }
            FavoriteState::NotFavorited => {
                store.add(FavoriteKind::House, &id);
                true
            }
            FavoriteState::Unknown => return,
        };
        set_favorite.set(FavoriteState::from_membership(now_favorited));
        analytics.track(&favorite_toggle_event(FavoriteKind::House, now_favorited), &[
            ("house_id", id.as_str()),
            ("house_name", name.as_str()),
        ]);
    };

    let on_back = move |_| {
        analytics.track(&detail_back_event(FavoriteKind::House), &[]);
        ctx.navigate(Route::Houses);
    };

    view! {
        <div class="page-container">
            <Show when=move || loading.get()>
                <div class="loader-wrap">
                    <div class="spinner"></div>
                    "Loading..."
                </div>
            </Show>

            {move || error.get().map(|err| view! { <div class="error">"Error: "{err}</div> })}

            <Show when=move || !loading.get() && error.with(Option::is_none) && house.with(Option::is_none)>
                <div class="empty">
                    "House not found. "
                    <a class="btn" on:click=move |_| ctx.navigate(Route::Houses)>"Back"</a>
                </div>
            </Show>

            {move || house.get().map(|house| {
                let name = house.display_name().to_string();
                let emblem = assets::house_emblem(&name);
                let colours = house.house_colours.clone().unwrap_or_else(|| "—".to_string());
                let founder = house.founder.clone().unwrap_or_else(|| "—".to_string());
                let animal = house.animal.clone().unwrap_or_else(|| "—".to_string());
                let element = house.element.clone().unwrap_or_else(|| "—".to_string());
                let ghost = house.ghost.clone().unwrap_or_else(|| "—".to_string());
                let common_room = house.common_room.clone().unwrap_or_else(|| "—".to_string());
                let heads: Vec<String> = house.heads.iter().map(|h| h.full_name()).collect();
                let traits: Vec<String> = house.traits.iter().map(|t| t.name.clone()).collect();
                view! {
                    <div class="detail-card">
                        <div class="detail-header">
                            <div>
                                <h1 class="detail-title">{name.clone()}</h1>
                                <div class="muted"><strong>"Colors: "</strong>{colours}</div>
                            </div>

                            <div class="detail-meta">
                                <DetailRow label="Founder" value=founder/>
                                <DetailRow label="Animal" value=animal/>
                                <DetailRow label="Element" value=element/>
                            </div>
                        </div>

                        <div class="detail-body">
                            <p><strong>"Ghost: "</strong>{ghost}</p>
                            <p><strong>"Common room: "</strong>{common_room}</p>

                            <div class="heads-traits-image">
                                <div class="ht-section">
                                    <p><strong>"Heads:"</strong></p>
                                    <ul>
                                        {if heads.is_empty() {
                                            vec![view! { <li>{"—".to_string()}</li> }]
                                        } else {
                                            heads.into_iter().map(|head| view! { <li>{head}</li> }).collect()
                                        }}
                                    </ul>
                                </div>

                                <div class="ht-section">
                                    <p><strong>"Traits:"</strong></p>
                                    <ul>
                                        {if traits.is_empty() {
                                            vec![view! { <li>{"—".to_string()}</li> }]
                                        } else {
                                            traits.into_iter().map(|t| view! { <li>{t}</li> }).collect()
                                        }}
                                    </ul>
                                </div>

                                <div class="ht-image">
                                    <img src=emblem alt=format!("{name} emblem") class="house-image"/>
                                </div>
                            </div>

                            <div class="detail-actions">
                                <button class="btn" on:click=on_toggle>
                                    {move || if favorite.get().is_favorited() { "★ Unfavorite" } else { "☆ Favorite" }}
                                </button>
                                <button class="btn" on:click=on_back>"← Back"</button>
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
