//! Spell Detail Page
//!
//! Renders one spell and its favorite toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analytics::{detail_back_event, detail_viewed_event, favorite_toggle_event, Analytics};
use crate::api;
use crate::context::{use_app_context, Route};
use crate::favorites::{FavoriteKind, FavoriteState, FavoritesStore};
use crate::models::{light_color, Spell};

#[component]
pub fn SpellDetail(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let analytics = expect_context::<Analytics>();
    let store = FavoritesStore::browser();

    let (spell, set_spell) = signal(None::<Spell>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (favorite, set_favorite) = signal(FavoriteState::Unknown);

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));
    let tracked_view = StoredValue::new(false);

    let route_id = StoredValue::new(id);

    Effect::new(move |_| {
        let id = route_id.get_value();
        if id.is_empty() {
            set_error.set(Some("Invalid spell id".to_string()));
            set_loading.set(false);
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let result = api::get_spell_detail(&id).await;
            if !alive.try_get_value().unwrap_or(false) {
                return;
            }
            match result {
                Ok(data) => {
                    set_favorite.set(FavoriteState::from_membership(
                        store.is_favorited(FavoriteKind::Spell, &data.id),
                    ));
                    if !tracked_view.get_value() {
                        analytics.track(&detail_viewed_event(FavoriteKind::Spell), &[
                            ("spell_id", data.id.as_str()),
                            ("spell_name", data.display_name()),
                        ]);
                        tracked_view.set_value(true);
                    }
                    set_spell.set(Some(data));
                }
                Err(err) => set_error.set(Some(err)),
            }
            set_loading.set(false);
        });
    });

    // Entity id wins once loaded; route id only before that
    let resolved_id = move || {
        spell.get().map(|s| s.id).or_else(|| {
            let id = route_id.get_value();
            (!id.is_empty()).then_some(id)
        })
    };

    let on_toggle = move |_| {
        let Some(id) = resolved_id() else { return };
        let name = spell
            .get()
            .map(|s| s.display_name().to_string())
            .unwrap_or_default();
        let now_favorited = match favorite.get() {
            FavoriteState::Favorited => {
                store.remove(FavoriteKind::Spell, &id);
                false
            }
            FavoriteState::NotFavorited => {
                store.add(FavoriteKind::Spell, &id);
                true
            }
            FavoriteState::Unknown => return,
        };
        set_favorite.set(FavoriteState::from_membership(now_favorited));
        analytics.track(&favorite_toggle_event(FavoriteKind::Spell, now_favorited), &[
            ("spell_id", id.as_str()),
            ("spell_name", name.as_str()),
        ]);
    };

    let on_back = move |_| {
        analytics.track(&detail_back_event(FavoriteKind::Spell), &[]);
        ctx.navigate(Route::Spells);
    };

    view! {
        <div class="page-container">
            <Show when=move || loading.get()>
                <div class="loader-wrap">
                    <div class="spinner"></div>
                    "Loading spell..."
                </div>
            </Show>

            {move || error.get().map(|err| view! { <div class="error">"Error: "{err}</div> })}

            <Show when=move || !loading.get() && error.with(Option::is_none) && spell.with(Option::is_none)>
                <div class="empty">
                    "Spell not found. "
                    <a class="btn" on:click=move |_| ctx.navigate(Route::Spells)>"Back"</a>
                </div>
            </Show>

            {move || spell.get().map(|spell| {
                let name = spell.display_name().to_string();
                let color = light_color(spell.light.as_deref());
                let spell_type = spell.spell_type.clone().unwrap_or_else(|| "—".to_string());
                let incantation = spell.incantation.clone();
                let light = spell.light.clone().unwrap_or_else(|| "—".to_string());
                let verbal = spell.verbal_label();
                let creator = spell.creator.clone();
                let effect = spell.effect.clone().unwrap_or_else(|| "—".to_string());
                view! {
                    <div class="detail-card">
                        <div class="detail-header">
                            <div class="detail-title-row">
                                <h1 class="detail-title">{name}</h1>
                                <span class="spell-badge" style:background=color>{spell_type}</span>
                            </div>

                            <div class="detail-meta">
                                {incantation.map(|incantation| view! {
                                    <div><strong>"Incantation: "</strong>{incantation}</div>
                                })}
                                <div><strong>"Light: "</strong>{light}</div>
                                <div><strong>"Verbal: "</strong>{verbal}</div>
                                {creator.map(|creator| view! {
                                    <div><strong>"Creator: "</strong>{creator}</div>
                                })}
                            </div>
                        </div>

                        <div class="detail-body">
                            <h3>"Effect"</h3>
                            <p class="effect-text">{effect}</p>

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
