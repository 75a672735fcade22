//! Houses List Page
//!
//! Fetches the house collection once per mount and renders the card grid.
//! A card click emits one analytics event before navigating to the detail
//! route.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analytics::Analytics;
use crate::api;
use crate::context::{use_app_context, Route};
use crate::models::House;

#[component]
pub fn HousesList() -> impl IntoView {
    let ctx = use_app_context();
    let analytics = expect_context::<Analytics>();

    let (houses, set_houses) = signal(Vec::<House>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Fetch callbacks arriving after teardown must not touch state
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    // One list-view event per mounted instance
    let tracked_view = StoredValue::new(false);

    Effect::new(move |_| {
        if !tracked_view.get_value() {
            analytics.track("Houses List Viewed", &[]);
            tracked_view.set_value(true);
        }
        set_loading.set(true);
        spawn_local(async move {
            let result = api::get_houses().await;
            if !alive.try_get_value().unwrap_or(false) {
                return;
            }
            match result {
                Ok(data) => set_houses.set(data),
                Err(err) => set_error.set(Some(err)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1 class="title">"Here is where the magic happens..."</h1>
                <p class="subtitle">"Get to know all the houses"</p>
            </div>

            <Show when=move || loading.get()>
                <div class="loader-wrap">
                    <div class="spinner"></div>
                    <div>"Loading houses..."</div>
                </div>
            </Show>

            {move || error.get().map(|err| view! { <div class="error">"Error: "{err}</div> })}

            <Show when=move || !loading.get() && error.with(Option::is_none)>
                <div class="houses-grid">
                    {move || houses.get().into_iter().map(|house| {
                        let id = house.resolved_id();
                        let name = house.display_name().to_string();
                        let colours = house.house_colours.clone().unwrap_or_else(|| "—".to_string());
                        let founder = house.founder.clone().unwrap_or_else(|| "—".to_string());
                        let animal = house.animal.clone().unwrap_or_else(|| "—".to_string());
                        let element = house.element.clone().unwrap_or_else(|| "—".to_string());
                        let ghost = house.ghost.clone().unwrap_or_else(|| "—".to_string());
                        let common_room = house.common_room.clone().unwrap_or_else(|| "—".to_string());
                        let heads = house.heads_line();
                        let traits = house.traits_preview();
                        let click_id = id.clone();
                        let click_name = name.clone();
                        view! {
                            <article
                                class="house-card"
                                role="button"
                                on:click=move |_| {
                                    let Some(id) = click_id.clone() else { return; };
                                    analytics.track("House Card Clicked", &[
                                        ("house_id", id.as_str()),
                                        ("house_name", click_name.as_str()),
                                    ]);
                                    ctx.navigate(Route::HouseDetail(id));
                                }
                            >
                                <header class="house-card-header">
                                    <h3 class="house-name">{name}</h3>
                                    <span class="badge">{colours}</span>
                                </header>

                                <div class="house-body">
                                    <p class="muted"><strong>"Founder: "</strong>{founder}</p>
                                    <p class="muted"><strong>"Animal: "</strong>{animal}" • "<strong>"Element: "</strong>{element}</p>
                                    <p class="muted"><strong>"Ghost: "</strong>{ghost}</p>
                                    <p class="muted"><strong>"Common room: "</strong>{common_room}</p>
                                    <p class="values"><strong>"Heads: "</strong>{heads}</p>
                                    <p class="values"><strong>"Traits: "</strong>{traits}</p>
                                </div>
                            </article>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
