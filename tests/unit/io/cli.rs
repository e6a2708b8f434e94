//! Tests for argument parsing, seed spacing and batch card output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pixelbobo::io::cli::{CardProcessor, Cli, card_file_name, cells_file_name, clock_seed};
    use pixelbobo::io::configuration::DEFAULT_CARD_COUNT;
    use pixelbobo::{PortraitError, Rarity};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn batch_args(output: &std::path::Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "pixelbobo".to_string(),
            "--quiet".to_string(),
            "--output".to_string(),
            output.display().to_string(),
        ];
        args.extend(extra.iter().map(ToString::to_string));
        Cli::try_parse_from(args).expect("Failed to parse arguments")
    }

    // Tests defaults when no arguments are given
    // Verified by changing the default rarity to common
    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["pixelbobo"]).expect("Failed to parse arguments");
        assert_eq!(cli.rarity, Rarity::Rare);
        assert_eq!(cli.count, DEFAULT_CARD_COUNT);
        assert!(cli.seed.is_none());
        assert_eq!(cli.output, PathBuf::from("."));
        assert!(!cli.cells);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert!(cli.should_show_progress());
    }

    // Tests every flag including negative seeds
    // Verified by removing allow_negative_numbers
    #[test]
    fn test_parse_all_arguments() {
        let cli = Cli::try_parse_from([
            "pixelbobo",
            "--rarity",
            "mythic",
            "--count",
            "5",
            "--seed",
            "-5",
            "--output",
            "cards",
            "--cells",
            "--verbose",
        ])
        .expect("Failed to parse arguments");

        assert_eq!(cli.rarity, Rarity::Mythic);
        assert_eq!(cli.count, 5);
        assert_eq!(cli.seed, Some(-5.0));
        assert_eq!(cli.output, PathBuf::from("cards"));
        assert!(cli.cells);
        assert!(cli.verbose);
    }

    // Tests unknown rarity tags are rejected at parse time
    // Verified by falling back to rare for unknown tags
    #[test]
    fn test_parse_unknown_rarity() {
        assert!(Cli::try_parse_from(["pixelbobo", "--rarity", "uncommon"]).is_err());
    }

    // Tests quiet mode hides progress
    // Verified by inverting should_show_progress
    #[test]
    fn test_quiet_hides_progress() {
        let cli = Cli::try_parse_from(["pixelbobo", "-q"]).expect("Failed to parse arguments");
        assert!(!cli.should_show_progress());
    }

    // Tests card seeds are spaced by a thousand from the base
    // Verified by spacing seeds by one
    #[test]
    fn test_card_seeds() {
        let cli = Cli::try_parse_from(["pixelbobo", "--count", "3"])
            .expect("Failed to parse arguments");
        assert_eq!(cli.card_seeds(42.0), vec![42.0, 1042.0, 2042.0]);
        assert_eq!(cli.card_seeds(-0.5), vec![-0.5, 999.5, 1999.5]);
    }

    // Tests clock seeds are finite and positive
    // Verified by subtracting the jitter
    #[test]
    fn test_clock_seed() {
        let seed = clock_seed();
        assert!(seed.is_finite());
        assert!(seed > 0.0);
    }

    // Tests file names embed rarity and seed
    // Verified by swapping rarity and seed
    #[test]
    fn test_file_names() {
        assert_eq!(card_file_name(Rarity::Epic, 42.0), "bobo_epic_42.png");
        assert_eq!(card_file_name(Rarity::Common, 1.5), "bobo_common_1.5.png");
        assert_eq!(
            cells_file_name(Rarity::Legendary, 7.0),
            "bobo_legendary_7_cells.png"
        );
    }

    // Tests a batch writes one full-size card per seed
    // Verified by reusing the base seed for every card
    #[test]
    fn test_process_writes_cards() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let cli = batch_args(dir.path(), &["--count", "2", "--seed", "7"]);

        let written = CardProcessor::new(cli)
            .process()
            .expect("Failed to process batch");

        assert_eq!(
            written,
            vec![
                dir.path().join("bobo_rare_7.png"),
                dir.path().join("bobo_rare_1007.png"),
            ]
        );
        for path in &written {
            let card = image::open(path).expect("Failed to read card").to_rgba8();
            assert_eq!(card.dimensions(), (900, 900));
        }
        assert!(!dir.path().join("bobo_rare_7_cells.png").exists());
    }

    // Tests the sprite switch adds a logical-resolution file
    // Verified by writing the sprite at surface resolution
    #[test]
    fn test_process_writes_cells() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let cli = batch_args(
            dir.path(),
            &["--count", "1", "--seed", "3", "--rarity", "epic", "--cells"],
        );

        CardProcessor::new(cli)
            .process()
            .expect("Failed to process batch");

        let sprite = image::open(dir.path().join("bobo_epic_3_cells.png"))
            .expect("Failed to read sprite")
            .to_rgba8();
        assert_eq!(sprite.dimensions(), (100, 100));

        let card = image::open(dir.path().join("bobo_epic_3.png"))
            .expect("Failed to read card")
            .to_rgba8();
        for (x, y) in [(0, 0), (37, 40), (50, 60), (99, 99)] {
            assert_eq!(sprite.get_pixel(x, y), card.get_pixel(x * 9 + 4, y * 9 + 4));
        }
    }

    // Tests empty batches are rejected before any file is written
    // Verified by returning an empty path list instead
    #[test]
    fn test_process_rejects_zero_count() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let cli = batch_args(dir.path(), &["--count", "0", "--seed", "1"]);

        let result = CardProcessor::new(cli).process();
        assert!(matches!(
            result,
            Err(PortraitError::InvalidParameter { parameter: "count", .. })
        ));
        let entries = std::fs::read_dir(dir.path())
            .expect("Failed to list output")
            .count();
        assert_eq!(entries, 0);
    }
}
