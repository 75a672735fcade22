//! Application Context
//!
//! Current route plus navigation helpers, provided via the Leptos context
//! API. Routes are mirrored into the URL hash so reloads and the browser
//! back button keep their place; parsing is tolerant and falls back to the
//! houses list.

use leptos::prelude::*;
use percent_encoding::percent_decode_str;

use crate::api;

/// The routes the app can display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Houses,
    HouseDetail(String),
    Spells,
    SpellDetail(String),
    Favorites,
}

impl Route {
    pub fn to_hash(&self) -> String {
        match self {
            Route::Houses => "#/home".to_string(),
            Route::HouseDetail(id) => format!("#/houses/{}", api::encode_id(id)),
            Route::Spells => "#/spells".to_string(),
            Route::SpellDetail(id) => format!("#/spells/{}", api::encode_id(id)),
            Route::Favorites => "#/favorites".to_string(),
        }
    }

    /// Parse a location hash. Unknown paths land on the houses list.
    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["home"] => Route::Houses,
            ["houses", id] => Route::HouseDetail(decode_segment(id)),
            ["spells"] => Route::Spells,
            ["spells", id] => Route::SpellDetail(decode_segment(id)),
            ["favorites"] => Route::Favorites,
            _ => Route::Houses,
        }
    }
}

fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Switch views and mirror the new route into the URL hash.
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route.clone());
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.to_hash());
        }
    }

    /// Adopt a route coming from the browser (initial load or hashchange)
    /// without writing the hash back.
    pub fn adopt_hash(&self, hash: &str) {
        let route = Route::from_hash(hash);
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_round_trip() {
        let routes = [
            Route::Houses,
            Route::HouseDetail("42".to_string()),
            Route::Spells,
            Route::SpellDetail("abc-def".to_string()),
            Route::Favorites,
        ];
        for route in routes {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_ids_with_reserved_characters_survive_the_hash() {
        let route = Route::HouseDetail("a/b c".to_string());
        assert_eq!(route.to_hash(), "#/houses/a%2Fb%20c");
        assert_eq!(Route::from_hash(&route.to_hash()), route);
    }

    #[test]
    fn test_unknown_or_empty_hash_falls_back_to_houses() {
        assert_eq!(Route::from_hash(""), Route::Houses);
        assert_eq!(Route::from_hash("#"), Route::Houses);
        assert_eq!(Route::from_hash("#/home"), Route::Houses);
        assert_eq!(Route::from_hash("#/nope/1/2"), Route::Houses);
    }
}
