//! Hogwarts Compendium App
//!
//! Root component: header navigation plus a route-switched main area. The
//! current route lives in a signal provided via context and is mirrored
//! into the URL hash; hash changes from the browser (back button, manual
//! edit) are adopted back into the signal.

use leptos::prelude::*;

use crate::analytics::Analytics;
use crate::assets;
use crate::components::{FavoritesList, HouseDetail, HousesList, SpellDetail, SpellsList};
use crate::context::{AppContext, Route};
use crate::platform;

#[component]
pub fn App() -> impl IntoView {
    let initial = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or(Route::Houses);
    let (route, set_route) = signal(initial);

    let ctx = AppContext::new((route, set_route));

    // Provide context to all children
    provide_context(ctx);
    provide_context(Analytics::new(platform::detect()));

    let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        if let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) {
            ctx.adopt_hash(&hash);
        }
    });
    on_cleanup(move || hash_listener.remove());

    view! {
        <header class="header">
            <a class="logo-link" on:click=move |_| ctx.navigate(Route::Houses)>
                <img src=assets::LOGO alt="Hogwarts Logo" class="logo-img"/>
            </a>

            <nav class="menu">
                <a class="menu-link" on:click=move |_| ctx.navigate(Route::Spells)>"Spells"</a>
                <a class="menu-link" on:click=move |_| ctx.navigate(Route::Favorites)>"Favorites"</a>
            </nav>
        </header>

        <main class="app-main">
            {move || match route.get() {
                Route::Houses => view! { <HousesList/> }.into_any(),
                Route::HouseDetail(id) => view! { <HouseDetail id=id/> }.into_any(),
                Route::Spells => view! { <SpellsList/> }.into_any(),
                Route::SpellDetail(id) => view! { <SpellDetail id=id/> }.into_any(),
                Route::Favorites => view! { <FavoritesList/> }.into_any(),
            }}
        </main>
    }
}
