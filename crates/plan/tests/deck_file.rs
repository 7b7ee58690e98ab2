//! Builds the plan deck, writes it to disk, and reads the package back.

use deck_core::Shape;
use deck_plan::{build_deck, palette, OUTPUT_FILE_NAME, SLIDE_COUNT};
use deck_pptx::{PptxReader, PptxWriter};

const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn test_written_file_has_fourteen_slides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docs").join(OUTPUT_FILE_NAME);

    let deck = build_deck(None);
    PptxWriter::new().save(&deck, &path).unwrap();

    assert!(path.exists());
    let slides = PptxReader::new().read_path(&path).unwrap();
    assert_eq!(slides.len(), SLIDE_COUNT);
    assert_eq!(slides[0].lines[0], "🤝 BRAND AMBASSADOR PROGRAM");
    assert_eq!(slides[13].lines[0], "GigLift");
}

#[test]
fn test_rerun_overwrites_with_identical_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    let writer = PptxWriter::new();

    writer.save(&build_deck(None), &path).unwrap();
    let first = std::fs::read(&path).unwrap();
    writer.save(&build_deck(None), &path).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_invalid_background_falls_back_to_solid_fill() {
    let deck = build_deck(Some(std::path::Path::new("/no/such/dir/bg.png")));
    assert_eq!(deck.slide_count(), SLIDE_COUNT);
    assert!(deck.media.is_empty());

    let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
    let slides = PptxReader::new().read(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(slides.len(), SLIDE_COUNT);
    for slide in &slides {
        assert_eq!(slide.pictures, 0);
        assert_eq!(slide.background.as_deref(), Some("0F0F23"));
    }
}

#[test]
fn test_background_picture_on_every_slide() {
    let dir = tempfile::tempdir().unwrap();
    let bg = dir.path().join("bg.png");
    std::fs::write(&bg, PNG_HEADER).unwrap();

    let deck = build_deck(Some(&bg));
    assert_eq!(deck.media.len(), 1);
    for slide in &deck.slides {
        assert_eq!(slide.background_fill, palette::DARK_BG);
        // the picture sits behind everything else
        assert!(matches!(slide.shapes.first(), Some(Shape::Picture(_))));
    }

    let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
    let slides = PptxReader::new().read(std::io::Cursor::new(bytes)).unwrap();
    assert!(slides.iter().all(|s| s.pictures == 1));
}

#[test]
fn test_budget_totals_are_literal() {
    let deck = build_deck(None);
    let budget = &deck.slides[9];
    assert!(budget.contains_text("Year 1 Budget"));
    assert!(budget.contains_text("$5,900/mo"));
    assert!(budget.contains_text("$70,800"));
}

#[test]
fn test_roi_scenarios() {
    let bytes = PptxWriter::new().to_bytes(&build_deck(None)).unwrap();
    let slides = PptxReader::new().read(std::io::Cursor::new(bytes)).unwrap();
    let roi = &slides[10];
    assert!(roi.contains_text("ROI Projection"));
    for figure in ["ROI: -85%", "ROI: +26%", "ROI: +833%"] {
        assert!(roi.contains_text(figure), "missing {}", figure);
    }
}

#[test]
fn test_slide_titles_in_order() {
    let deck = build_deck(None);
    let titles: Vec<&str> = deck
        .slides
        .iter()
        .map(|s| s.lines().next().unwrap_or_default())
        .collect();
    assert_eq!(
        titles,
        vec![
            "🤝 BRAND AMBASSADOR PROGRAM",
            "Agenda",
            "Executive Summary",
            "Ambassador Tiers",
            "Ambassador Types",
            "Referral & Tracking System",
            "Recruitment Strategy",
            "Content Playbook",
            "Incentives & Gamification",
            "Year 1 Budget",
            "ROI Projection",
            "12-Month Launch Timeline",
            "Next Steps",
            "GigLift",
        ]
    );
}

#[test]
fn test_all_lines_carry_literal_content() {
    let deck = build_deck(None);
    let lines = deck.all_lines();
    assert!(lines.contains(&"$70,800"));
    assert!(lines.contains(&"giglift.vercel.app"));
    assert!(lines.contains(&"• ROI: +833%"));
}

#[test]
fn test_unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("docs");
    std::fs::write(&blocker, b"a file, not a directory").unwrap();

    let result = PptxWriter::new().save(&build_deck(None), &blocker.join(OUTPUT_FILE_NAME));
    assert!(matches!(result, Err(deck_core::Error::IoError(_))));
}
