//! Static Assets
//!
//! Statically enumerated mapping from house name to emblem asset, with the
//! app logo as the default.

pub const LOGO: &str = "assets/logo.png";

const HOUSE_EMBLEMS: &[(&str, &str)] = &[
    ("gryffindor", "assets/houses/gryffindor.png"),
    ("hufflepuff", "assets/houses/hufflepuff.png"),
    ("ravenclaw", "assets/houses/ravenclaw.png"),
    ("slytherin", "assets/houses/slytherin.png"),
];

/// Emblem asset path for a house name. Matching ignores case and internal
/// whitespace; unknown houses get the logo.
pub fn house_emblem(name: &str) -> &'static str {
    let normalized: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    HOUSE_EMBLEMS
        .iter()
        .find(|(house, _)| *house == normalized)
        .map(|(_, path)| *path)
        .unwrap_or(LOGO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_houses() {
        assert_eq!(house_emblem("Gryffindor"), "assets/houses/gryffindor.png");
        assert_eq!(house_emblem("slytherin"), "assets/houses/slytherin.png");
        assert_eq!(house_emblem("Huffle Puff"), "assets/houses/hufflepuff.png");
    }

    #[test]
    fn test_unknown_house_gets_logo() {
        assert_eq!(house_emblem("Ilvermorny"), LOGO);
        assert_eq!(house_emblem(""), LOGO);
    }
}
