//! Data Models
//!
//! Wire shapes for the Wizard World API, plus the small pure helpers the
//! list and detail views share (identifier resolution, search matching,
//! light-to-color mapping).

use serde::{Deserialize, Serialize};

/// Head of house as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseHead {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl HouseHead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// House trait as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseTrait {
    #[serde(default)]
    pub name: String,
}

/// Hogwarts house. Immutable snapshot from the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub house_colours: Option<String>,
    #[serde(default)]
    pub founder: Option<String>,
    #[serde(default)]
    pub animal: Option<String>,
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default)]
    pub ghost: Option<String>,
    #[serde(default)]
    pub common_room: Option<String>,
    #[serde(default)]
    pub heads: Vec<HouseHead>,
    #[serde(default)]
    pub traits: Vec<HouseTrait>,
}

impl House {
    /// Canonical house identifier: the explicit `id` field when present,
    /// otherwise the last path segment of `url`. Every place that computes
    /// a house id must go through here, or favorite matching breaks.
    pub fn resolved_id(&self) -> Option<String> {
        if let Some(id) = &self.id {
            if !id.is_empty() {
                return Some(id.clone());
            }
        }
        self.url
            .as_deref()
            .and_then(|url| url.rsplit('/').next())
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }

    pub fn heads_line(&self) -> String {
        if self.heads.is_empty() {
            return "—".to_string();
        }
        self.heads
            .iter()
            .map(HouseHead::full_name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Up to five traits for the card view, with an ellipsis when truncated.
    pub fn traits_preview(&self) -> String {
        if self.traits.is_empty() {
            return "—".to_string();
        }
        let mut line = self
            .traits
            .iter()
            .take(5)
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if self.traits.len() > 5 {
            line.push('…');
        }
        line
    }
}

/// Spell. Immutable snapshot from the remote API. `can_be_verbal` is
/// three-valued: the API omits it for spells nobody has seen cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub incantation: Option<String>,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub can_be_verbal: Option<bool>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default, rename = "type")]
    pub spell_type: Option<String>,
}

impl Spell {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }

    pub fn verbal_label(&self) -> &'static str {
        match self.can_be_verbal {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "Unknown",
        }
    }

    /// Case-insensitive substring match over name, incantation and effect.
    /// `query` must already be lowercased; an empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .map(|v| v.to_lowercase().contains(query))
                .unwrap_or(false)
        };
        contains(&self.name) || contains(&self.incantation) || contains(&self.effect)
    }
}

/// Spell type filter options. "All" means no type parameter on the fetch.
pub const SPELL_TYPE_OPTIONS: &[&str] = &[
    "All",
    "Charm",
    "Conjuration",
    "Spell",
    "Transfiguration",
    "HealingSpell",
    "DarkCharm",
    "Jinx",
    "Curse",
    "MagicalTransportation",
    "Hex",
    "CounterSpell",
    "DarkArts",
    "CounterJinx",
    "CounterCharm",
    "Untransfiguration",
    "BindingMagicalContractVanishment",
];

/// Map a spell light descriptor to a badge color.
pub fn light_color(light: Option<&str>) -> &'static str {
    let Some(light) = light else {
        return "#9CA3AF";
    };
    let l = light.to_lowercase();
    if l.contains("blue") {
        "#2563EB"
    } else if l.contains("red") || l.contains("scarlet") {
        "#DC2626"
    } else if l.contains("green") {
        "#059669"
    } else if l.contains("orange") || l.contains("fiery") {
        "#F97316"
    } else if l.contains("purple") {
        "#7C3AED"
    } else if l.contains("gold") {
        "#D4AF37"
    } else if l.contains("white") || l.contains("transparent") {
        "#374151"
    } else if l.contains("pink") {
        "#ec4899"
    } else if l.contains("grey") || l.contains("gray") {
        "#6B7280"
    } else {
        "#6B7280"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_house(id: Option<&str>, url: Option<&str>) -> House {
        House {
            id: id.map(str::to_string),
            url: url.map(str::to_string),
            name: Some("Gryffindor".to_string()),
            house_colours: None,
            founder: None,
            animal: None,
            element: None,
            ghost: None,
            common_room: None,
            heads: vec![],
            traits: vec![],
        }
    }

    fn make_spell(name: &str, incantation: Option<&str>, effect: Option<&str>) -> Spell {
        Spell {
            id: "s1".to_string(),
            name: Some(name.to_string()),
            incantation: incantation.map(str::to_string),
            effect: effect.map(str::to_string),
            light: None,
            can_be_verbal: None,
            creator: None,
            spell_type: None,
        }
    }

    #[test]
    fn test_resolved_id_prefers_explicit_id() {
        let house = make_house(Some("abc-123"), Some("https://api/houses/999"));
        assert_eq!(house.resolved_id(), Some("abc-123".to_string()));
    }

    #[test]
    fn test_resolved_id_falls_back_to_url_segment() {
        let house = make_house(None, Some("https://api/houses/999"));
        assert_eq!(house.resolved_id(), Some("999".to_string()));

        let house = make_house(Some(""), Some("https://api/houses/42"));
        assert_eq!(house.resolved_id(), Some("42".to_string()));
    }

    #[test]
    fn test_resolved_id_none_when_nothing_usable() {
        assert_eq!(make_house(None, None).resolved_id(), None);
        // Trailing slash leaves an empty last segment
        assert_eq!(
            make_house(None, Some("https://api/houses/")).resolved_id(),
            None
        );
    }

    #[test]
    fn test_matches_query_over_all_fields() {
        let spell = make_spell(
            "Patronus",
            Some("Expecto Patronum"),
            Some("Conjures a guardian"),
        );
        assert!(spell.matches_query("patron"));
        assert!(spell.matches_query("expecto"));
        assert!(spell.matches_query("guardian"));
        assert!(!spell.matches_query("avada"));
    }

    #[test]
    fn test_matches_query_empty_and_missing_fields() {
        let spell = make_spell("Lumos", None, None);
        assert!(spell.matches_query(""));
        assert!(spell.matches_query("lumos"));
        assert!(!spell.matches_query("nox"));
    }

    #[test]
    fn test_light_color_mapping() {
        assert_eq!(light_color(None), "#9CA3AF");
        assert_eq!(light_color(Some("Blue")), "#2563EB");
        assert_eq!(light_color(Some("Scarlet")), "#DC2626");
        assert_eq!(light_color(Some("Transparent")), "#374151");
        assert_eq!(light_color(Some("Rainbow")), "#6B7280");
    }

    #[test]
    fn test_traits_preview_truncates_to_five() {
        let mut house = make_house(Some("1"), None);
        house.traits = (0..7)
            .map(|i| HouseTrait { name: format!("t{i}") })
            .collect();
        assert_eq!(house.traits_preview(), "t0, t1, t2, t3, t4…");
    }
}
