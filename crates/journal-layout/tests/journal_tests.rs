use journal_layout::*;

fn four_up() -> JournalOptions {
    JournalOptions {
        spread: SpreadMode::FourUp,
        ..JournalOptions::default()
    }
}

/// Daily pages are the only ones carrying bullet circles
fn is_daily_page(block: &PageBlock) -> bool {
    block
        .primitives
        .iter()
        .any(|p| matches!(p, Primitive::Circle(_)))
        && block.anchors.is_empty()
}

#[test]
fn test_daily_column_alignment_follows_page_parity() {
    let doc = build_document(&four_up()).unwrap();

    let mut checked = 0;
    for page in &doc.pages {
        let Some(number) = page.number else { continue };
        if !is_daily_page(&page.block) {
            continue;
        }
        let recto = PageSide::of_page(number) == PageSide::Recto;
        for prim in &page.block.primitives {
            if let Primitive::Text(label) = prim {
                match label.anchor {
                    // Mirrored mode: recto pages right-align their
                    // header and year labels, verso pages left-align
                    Anchor::NorthEast => assert!(recto, "page {number}"),
                    Anchor::NorthWest => assert!(!recto, "page {number}"),
                    _ => {}
                }
            }
        }
        checked += 1;
    }
    // A 10-year 4up journal has 366 days in 187 daily pages (odd-length months leave a half page)
    assert_eq!(checked, 187);
}

#[test]
fn test_left_mode_never_right_aligns() {
    let options = JournalOptions {
        align: AlignMode::Left,
        ..four_up()
    };
    let doc = build_document(&options).unwrap();
    for page in &doc.pages {
        if !is_daily_page(&page.block) {
            continue;
        }
        for prim in &page.block.primitives {
            if let Primitive::Text(label) = prim {
                assert_ne!(label.anchor, Anchor::NorthEast);
            }
        }
    }
}

#[test]
fn test_two_up_doubles_daily_page_count() {
    let two_up = build_document(&JournalOptions::default()).unwrap();
    let four_up = build_document(&four_up()).unwrap();

    let count = |doc: &Document| {
        doc.pages
            .iter()
            .filter(|p| is_daily_page(&p.block))
            .count()
    };
    assert_eq!(count(&two_up), 366);
    assert_eq!(count(&four_up), 187);
}

#[test]
fn test_final_page_count_is_deterministic() {
    let options = four_up();
    let first = build_document(&options).unwrap();
    let second = build_document(&options).unwrap();

    assert_eq!(first.stats, second.stats);
    let kinds = |doc: &Document| doc.pages.iter().map(|p| p.kind).collect::<Vec<_>>();
    assert_eq!(kinds(&first), kinds(&second));
}

#[test]
fn test_reduced_mode_keeps_full_numbering_scheme() {
    for options in [JournalOptions::default(), four_up()] {
        let full = build_document(&options).unwrap();
        let reduced = build_document(&JournalOptions {
            test_mode: true,
            ..options
        })
        .unwrap();
        assert_eq!(
            full.stats.final_logical_page, reduced.stats.final_logical_page,
            "reduced output must preserve the numbering scheme"
        );
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let mut options = JournalOptions::default();
    options.start_year = 2030;
    options.num_years = 5;
    options.spread = SpreadMode::FourUp;
    options.month_summary_side = PageSide::Verso;
    options
        .special_days
        .birthdays
        .push(DatedEvent::new("Benjamin", "1995-08-18"));

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = JournalOptions::load(path).await.unwrap();
    assert_eq!(options, loaded);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), b"{ not json")
        .await
        .unwrap();
    let result = JournalOptions::load(temp_file.path()).await;
    match result {
        Err(JournalError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("expected Config error, got {other:?}"),
    }
}
