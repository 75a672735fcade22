//! Spells List Page
//!
//! Re-fetches when the type filter changes and applies a client-side text
//! filter over name, incantation and effect. The search tracking event is
//! debounced: it fires once per 600 ms of typing inactivity, and a pending
//! timer is cancelled both by a newer keystroke and by view teardown.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analytics::Analytics;
use crate::api;
use crate::context::{use_app_context, Route};
use crate::models::{light_color, Spell, SPELL_TYPE_OPTIONS};

const SEARCH_DEBOUNCE_MS: u32 = 600;

#[component]
pub fn SpellsList() -> impl IntoView {
    let ctx = use_app_context();
    let analytics = expect_context::<Analytics>();

    let (spell_type, set_spell_type) = signal("Charm".to_string());
    let (spells, set_spells) = signal(Vec::<Spell>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (query, set_query) = signal(String::new());

    let alive = StoredValue::new(true);
    // Trailing-debounce timer for the search tracking event
    let pending_search = StoredValue::new_local(None::<Timeout>);
    let tracked_view = StoredValue::new(false);

    on_cleanup(move || {
        alive.set_value(false);
        pending_search.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
    });

    // Re-fetch on every type-filter change
    Effect::new(move |_| {
        let selected = spell_type.get();
        if !tracked_view.get_value() {
            analytics.track("Spells List Viewed", &[]);
            tracked_view.set_value(true);
        }
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let filter = (selected != "All").then_some(selected.as_str());
            let result = api::get_spells(filter).await;
            if !alive.try_get_value().unwrap_or(false) {
                return;
            }
            match result {
                Ok(data) => set_spells.set(data),
                Err(err) => set_error.set(Some(err)),
            }
            set_loading.set(false);
        });
    });

    // Recomputed per render; never mutates the fetched collection
    let visible = move || {
        let q = query.get().to_lowercase();
        spells
            .get()
            .into_iter()
            .filter(|spell| spell.matches_query(&q))
            .collect::<Vec<_>>()
    };

    let on_search_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());
        pending_search.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
        // The fired timer stays in the slot; the next keystroke or the
        // cleanup hook cancels it, which is a no-op once it has run.
        let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            analytics.track("Spells Search Performed", &[("query", value.as_str())]);
        });
        pending_search.set_value(Some(timer));
    };

    let on_type_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        analytics.track("Spells Filter Applied", &[("spell_type", value.as_str())]);
        set_spell_type.set(value);
    };

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1 class="title">"Spells"</h1>

                <div class="filter-bar">
                    <select class="select" prop:value=move || spell_type.get() on:change=on_type_change>
                        {SPELL_TYPE_OPTIONS.iter().map(|option| {
                            view! { <option value=*option>{*option}</option> }
                        }).collect_view()}
                    </select>

                    <input
                        class="search"
                        type="text"
                        placeholder="Search name, incantation or effect"
                        prop:value=move || query.get()
                        on:input=on_search_input
                    />
                </div>
            </div>

            <Show when=move || loading.get()>
                <div class="loader-wrap">
                    <div class="spinner"></div>
                    <div>"Loading spells..."</div>
                </div>
            </Show>

            {move || error.get().map(|err| view! { <div class="error">"Error: "{err}</div> })}

            <Show when=move || !loading.get() && error.with(Option::is_none)>
                <div class="houses-grid">
                    {move || visible().into_iter().map(|spell| {
                        let id = spell.id.clone();
                        let name = spell.display_name().to_string();
                        let color = light_color(spell.light.as_deref());
                        let spell_type = spell.spell_type.clone().unwrap_or_else(|| "—".to_string());
                        let incantation = spell.incantation.clone().unwrap_or_else(|| "—".to_string());
                        let effect = spell.effect.clone().unwrap_or_else(|| "—".to_string());
                        let light = spell.light.clone().unwrap_or_else(|| "—".to_string());
                        let verbal = spell.verbal_label();
                        let creator = spell.creator.clone().unwrap_or_else(|| "—".to_string());
                        let click_name = name.clone();
                        view! {
                            <article
                                class="spell-card"
                                role="button"
                                on:click=move |_| {
                                    analytics.track("Spell Card Clicked", &[
                                        ("spell_id", id.as_str()),
                                        ("spell_name", click_name.as_str()),
                                    ]);
                                    ctx.navigate(Route::SpellDetail(id.clone()));
                                }
                            >
                                <header class="house-card-header">
                                    <h3 class="house-name">{name}</h3>
                                    <span class="badge" style:background=color>{spell_type}</span>
                                </header>
                                <div class="house-body">
                                    <p class="muted"><strong>"Incantation: "</strong>{incantation}</p>
                                    <p class="muted"><strong>"Effect: "</strong>{effect}</p>
                                    <p class="values"><strong>"Light: "</strong>{light}" • "<strong>"Verbal: "</strong>{verbal}</p>
                                    <p class="muted"><strong>"Creator: "</strong>{creator}</p>
                                </div>
                            </article>
                        }
                    }).collect_view()}
                </div>

                <Show when=move || visible().is_empty()>
                    <div class="hint">"No spell found"</div>
                </Show>
            </Show>
        </div>
    }
}
