//! Tests for the rarity palette table

#[cfg(test)]
mod tests {
    use pixelbobo::palette::{Color, Rarity, palette};

    // Tests lookups are stable and return the same static table entry
    // Verified by building a fresh palette per call
    #[test]
    fn test_lookup_is_idempotent() {
        for rarity in Rarity::ALL {
            assert!(std::ptr::eq(palette(rarity), palette(rarity)));
            assert_eq!(palette(rarity), palette(rarity));
        }
    }

    // Tests list sizes per rarity
    // Verified by dropping one body colour
    #[test]
    fn test_list_sizes() {
        for rarity in Rarity::ALL {
            let table = palette(rarity);
            assert_eq!(table.body.len(), 5);
            assert_eq!(table.background.len(), 3);
        }
        assert_eq!(palette(Rarity::Mythic).accent.len(), 5);
        assert_eq!(palette(Rarity::Common).accent.len(), 3);
    }

    // Tests known first entries of each body list
    // Verified by swapping two rarity rows
    #[test]
    fn test_body_colour_literals() {
        assert_eq!(palette(Rarity::Common).body.first(), Color::hex(0x8B6F47));
        assert_eq!(palette(Rarity::Rare).body.first(), Color::hex(0x7B8FA6));
        assert_eq!(palette(Rarity::Epic).body.first(), Color::hex(0x8B5A8E));
        assert_eq!(palette(Rarity::Legendary).body.first(), Color::hex(0xD4A574));
        assert_eq!(palette(Rarity::Mythic).body.first(), Color::hex(0x5DADE2));
    }

    // Tests body lists never share a colour across rarities
    // Verified by copying a common colour into rare
    #[test]
    fn test_body_lists_are_disjoint() {
        for (index, first) in Rarity::ALL.iter().enumerate() {
            for second in Rarity::ALL.iter().skip(index + 1) {
                for color in palette(*first).body.iter() {
                    assert!(!palette(*second).body.contains(&color));
                }
            }
        }
    }

    // Tests legendary accents are gold tones
    // Verified by replacing the legendary accent list
    #[test]
    fn test_legendary_accent_is_gold() {
        assert_eq!(palette(Rarity::Legendary).accent.first(), Color::hex(0xFFD700));
    }
}
