//! Remote Data Client
//!
//! Async bindings to the Wizard World REST API. Every call returns
//! `Result<_, String>` with a human-readable message; callers surface the
//! message in their own error state.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::models::{House, Spell};

pub const API_BASE: &str = match option_env!("WIZARD_WORLD_API") {
    Some(base) => base,
    None => "https://wizard-world-api.herokuapp.com",
};

/// Characters escaped when an entity id is embedded as a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_id(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

async fn fetch_json<T: DeserializeOwned>(url: String) -> Result<T, String> {
    let response = reqwest::get(&url)
        .await
        .map_err(|err| err.to_string())?;
    if !response.status().is_success() {
        return Err(format!("request failed with status {}", response.status()));
    }
    response.json::<T>().await.map_err(|err| err.to_string())
}

// ========================
// Houses
// ========================

pub async fn get_houses() -> Result<Vec<House>, String> {
    fetch_json(format!("{API_BASE}/Houses")).await
}

pub async fn get_house_detail(id: &str) -> Result<House, String> {
    fetch_json(format!("{API_BASE}/Houses/{}", encode_id(id))).await
}

// ========================
// Spells
// ========================

/// `spell_type` of `None` fetches every spell.
pub async fn get_spells(spell_type: Option<&str>) -> Result<Vec<Spell>, String> {
    let url = match spell_type {
        Some(spell_type) => format!("{API_BASE}/Spells?Type={}", encode_id(spell_type)),
        None => format!("{API_BASE}/Spells"),
    };
    fetch_json(url).await
}

pub async fn get_spell_detail(id: &str) -> Result<Spell, String> {
    fetch_json(format!("{API_BASE}/Spells/{}", encode_id(id))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_id_passes_plain_ids_through() {
        assert_eq!(encode_id("6fb94b5a-71b9-4a6f-a18f"), "6fb94b5a-71b9-4a6f-a18f");
    }

    #[test]
    fn test_encode_id_escapes_reserved_characters() {
        assert_eq!(encode_id("a/b c"), "a%2Fb%20c");
        assert_eq!(encode_id("x?y#z"), "x%3Fy%23z");
    }
}
