//! Tests for rarity ordering, parsing and gating helpers

#[cfg(test)]
mod tests {
    use pixelbobo::PortraitError;
    use pixelbobo::palette::Rarity;

    // Tests tiers are totally ordered weakest first
    // Verified by reordering the enum variants
    #[test]
    fn test_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
        assert!(Rarity::Legendary < Rarity::Mythic);
        assert!(Rarity::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // Tests every tag parses back to its tier
    // Verified by capitalising the tags
    #[test]
    fn test_parse_tags() {
        for rarity in Rarity::ALL {
            assert_eq!(rarity.tag().parse::<Rarity>().ok(), Some(rarity));
            assert_eq!(rarity.to_string(), rarity.tag());
        }
    }

    // Tests unknown tags fail fast instead of defaulting
    // Verified by defaulting unknown tags to common
    #[test]
    fn test_unknown_tag_rejected() {
        let result = "uncommon".parse::<Rarity>();
        assert!(matches!(
            result,
            Err(PortraitError::InvalidRarity { ref tag }) if tag == "uncommon"
        ));
        assert!("Mythic".parse::<Rarity>().is_err());
        assert!("".parse::<Rarity>().is_err());
    }

    // Tests aura applies to legendary and mythic only
    // Verified by including epic in has_aura
    #[test]
    fn test_has_aura() {
        let with_aura: Vec<Rarity> = Rarity::ALL.into_iter().filter(|r| r.has_aura()).collect();
        assert_eq!(with_aura, vec![Rarity::Legendary, Rarity::Mythic]);
    }

    // Tests minimum-tier comparisons include the tier itself
    // Verified by using a strict comparison
    #[test]
    fn test_is_at_least() {
        assert!(Rarity::Epic.is_at_least(Rarity::Epic));
        assert!(Rarity::Mythic.is_at_least(Rarity::Epic));
        assert!(!Rarity::Rare.is_at_least(Rarity::Epic));
    }

    // Tests ranks follow the tier order and agree with the derived ordering in const context
    // Verified by swapping the legendary and mythic ranks
    #[test]
    fn test_rank_matches_ordering() {
        const EPIC_GATE: bool = Rarity::Legendary.is_at_least(Rarity::Epic);
        assert!(EPIC_GATE);

        for (index, rarity) in Rarity::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(rarity.rank()), index);
            for other in Rarity::ALL {
                assert_eq!(rarity.is_at_least(other), rarity >= other);
            }
        }
    }
}
