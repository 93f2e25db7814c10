//! Fixed mapping from magic item categories to catalogue keys.

/// Catalogue of potions.
pub const POTIONS: &str = "potions";
/// Catalogue of scrolls and books.
pub const SCROLLS_BOOKS: &str = "scrolls_books";
/// Catalogue of magic armour.
pub const ARMOUR: &str = "armour";
/// Catalogue of magic weapons.
pub const WEAPONS: &str = "weapons";

const CATEGORY_CATALOGUES: &[(&str, &str)] = &[
    ("Amulet / Talisman", "amulets_talismans"),
    ("Magic Armour", ARMOUR),
    ("Magic Balm / Oil", "balms_oils"),
    ("Magic Crystal", "crystals"),
    ("Magic Garment", "garments"),
    ("Magic Instrument", "instruments"),
    ("Magic Ring", "rings"),
    ("Magic Weapon", WEAPONS),
    ("Potion", POTIONS),
    ("Rod / Staff / Wand", "rods_staves_wands"),
    ("Scroll / Book", SCROLLS_BOOKS),
    ("Wondrous Item", "wondrous_items"),
];

fn normalize(category: &str) -> String {
    category
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Catalogue key for a magic item category, ignoring case and punctuation.
pub fn catalogue_for(category: &str) -> Option<&'static str> {
    let wanted = normalize(category);
    CATEGORY_CATALOGUES
        .iter()
        .find(|(name, _)| normalize(name) == wanted)
        .map(|(_, key)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_categories() {
        assert_eq!(catalogue_for("Potion"), Some(POTIONS));
        assert_eq!(catalogue_for("Magic Weapon"), Some(WEAPONS));
        assert_eq!(catalogue_for("Rod / Staff / Wand"), Some("rods_staves_wands"));
    }

    #[test]
    fn ignores_case_and_spacing() {
        assert_eq!(catalogue_for("scroll/book"), Some(SCROLLS_BOOKS));
        assert_eq!(catalogue_for("AMULET / TALISMAN"), Some("amulets_talismans"));
    }

    #[test]
    fn unknown_category() {
        assert_eq!(catalogue_for("Sentient Sword"), None);
    }
}
