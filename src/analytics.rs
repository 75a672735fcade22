//! Analytics Sink
//!
//! Thin binding to the page-global analytics SDK (`window.amplitude`).
//! SDK bootstrapping and transport live in the host page; this module only
//! delivers named events with flat property maps. Delivery is best-effort:
//! a failed call is warned to the console and never interrupts the UI
//! action that triggered it.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::favorites::FavoriteKind;
use crate::platform::Platform;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "amplitude"], js_name = track, catch)]
    fn amplitude_track(event: &str, properties: JsValue) -> Result<(), JsValue>;
}

/// Process-wide analytics handle. Constructed once at startup with the
/// detected platform tag and provided to components via context.
#[derive(Clone, Copy)]
pub struct Analytics {
    platform: Platform,
}

impl Analytics {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Emit one event. The platform tag is attached to every event; `props`
    /// adds the event-specific properties.
    pub fn track(&self, event: &str, props: &[(&str, &str)]) {
        let mut properties = serde_json::Map::new();
        properties.insert(
            "platform".to_string(),
            serde_json::Value::String(self.platform.as_str().to_string()),
        );
        for (key, value) in props {
            properties.insert(
                key.to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }

        // json_compatible() turns the map into a plain JS object, not an ES Map
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let payload = match serde_json::Value::Object(properties).serialize(&serializer) {
            Ok(payload) => payload,
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("analytics: failed to build properties for {event}: {err}").into(),
                );
                return;
            }
        };
        if let Err(err) = amplitude_track(event, payload) {
            web_sys::console::warn_1(&format!("analytics: track {event} failed: {err:?}").into());
        }
    }
}

/// Event name for a favorite toggle on the given kind.
pub fn favorite_toggle_event(kind: FavoriteKind, favorited: bool) -> String {
    let action = if favorited { "Favorited" } else { "Unfavorited" };
    format!("{} {action}", kind.event_prefix())
}

/// Event name for viewing a detail page of the given kind.
pub fn detail_viewed_event(kind: FavoriteKind) -> String {
    format!("{} Detail Viewed", kind.event_prefix())
}

/// Event name for leaving a detail page via its back control.
pub fn detail_back_event(kind: FavoriteKind) -> String {
    format!("{} Detail Back Clicked", kind.event_prefix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_toggle_event_names() {
        assert_eq!(
            favorite_toggle_event(FavoriteKind::House, true),
            "House Favorited"
        );
        assert_eq!(
            favorite_toggle_event(FavoriteKind::House, false),
            "House Unfavorited"
        );
        assert_eq!(
            favorite_toggle_event(FavoriteKind::Spell, true),
            "Spell Favorited"
        );
    }

    #[test]
    fn test_detail_event_names() {
        assert_eq!(detail_viewed_event(FavoriteKind::Spell), "Spell Detail Viewed");
        assert_eq!(
            detail_back_event(FavoriteKind::House),
            "House Detail Back Clicked"
        );
    }
}
