//! Favorites Reconciliation
//!
//! Joins the persisted favorite-id lists against the fetched collections to
//! produce the unified, display-ready favorites sequence. Ids with no
//! matching entity (stale favorites) are dropped silently. Output order is
//! collection order, houses before spells — not favorite-add order.

use crate::favorites::FavoriteKind;
use crate::models::{House, Spell};

/// One row of the unified favorites view. Built on demand, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteItem {
    pub kind: FavoriteKind,
    pub id: String,
    pub name: String,
    /// Founder for houses, creator for spells.
    pub detail: Option<String>,
}

pub fn reconcile(
    houses: &[House],
    spells: &[Spell],
    favorite_house_ids: &[String],
    favorite_spell_ids: &[String],
) -> Vec<FavoriteItem> {
    let mut items = Vec::new();

    for house in houses {
        let Some(id) = house.resolved_id() else {
            continue;
        };
        if favorite_house_ids.iter().any(|fav| *fav == id) {
            items.push(FavoriteItem {
                kind: FavoriteKind::House,
                id,
                name: house.display_name().to_string(),
                detail: house.founder.clone(),
            });
        }
    }

    for spell in spells {
        if favorite_spell_ids.iter().any(|fav| *fav == spell.id) {
            items.push(FavoriteItem {
                kind: FavoriteKind::Spell,
                id: spell.id.clone(),
                name: spell.display_name().to_string(),
                detail: spell.creator.clone(),
            });
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_house(id: &str, name: &str) -> House {
        House {
            id: Some(id.to_string()),
            url: None,
            name: Some(name.to_string()),
            house_colours: None,
            founder: Some(format!("Founder of {name}")),
            animal: None,
            element: None,
            ghost: None,
            common_room: None,
            heads: vec![],
            traits: vec![],
        }
    }

    fn make_spell(id: &str, name: &str) -> Spell {
        Spell {
            id: id.to_string(),
            name: Some(name.to_string()),
            incantation: None,
            effect: None,
            light: None,
            can_be_verbal: None,
            creator: None,
            spell_type: None,
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_membership_and_collection_order() {
        let houses = vec![
            make_house("1", "Gryffindor"),
            make_house("2", "Hufflepuff"),
            make_house("3", "Ravenclaw"),
            make_house("4", "Slytherin"),
        ];

        // Favorite order 3-then-1; output follows collection order instead.
        let items = reconcile(&houses, &[], &ids(&["3", "1"]), &[]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[1].id, "3");
        assert_eq!(items[0].name, "Gryffindor");
    }

    #[test]
    fn test_houses_come_before_spells() {
        let houses = vec![make_house("h1", "Ravenclaw")];
        let spells = vec![make_spell("s1", "Lumos")];

        let items = reconcile(&houses, &spells, &ids(&["h1"]), &ids(&["s1"]));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, FavoriteKind::House);
        assert_eq!(items[1].kind, FavoriteKind::Spell);
    }

    #[test]
    fn test_stale_favorite_id_is_dropped_silently() {
        let houses = vec![make_house("1", "Gryffindor")];

        let items = reconcile(&houses, &[], &ids(&["1", "9"]), &[]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
    }

    #[test]
    fn test_house_id_matching_uses_url_fallback() {
        let mut house = make_house("", "Hufflepuff");
        house.id = None;
        house.url = Some("https://api/houses/77".to_string());

        let items = reconcile(&[house], &[], &ids(&["77"]), &[]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "77");
    }

    #[test]
    fn test_empty_favorites_yield_empty_view() {
        let houses = vec![make_house("1", "Gryffindor")];
        let spells = vec![make_spell("s1", "Lumos")];

        assert!(reconcile(&houses, &spells, &[], &[]).is_empty());
    }
}
