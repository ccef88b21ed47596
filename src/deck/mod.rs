//! The Signal Processing Visualization Platform customer deck.
//!
//! [`build_presentation`] assembles the 14 slides from the builders in
//! [`builders`], styled by a [`DeckContext`].
//!
//! ```rust,no_run
//! use signal_deck::deck::{DeckContext, OUTPUT_FILENAME, build_presentation};
//!
//! let pres = build_presentation(&DeckContext::default())?;
//! pres.save(OUTPUT_FILENAME)?;
//! # Ok::<(), signal_deck::Error>(())
//! ```

pub mod builders;
pub mod content;
pub mod context;

pub use builders::{
    ContentLayout, add_call_to_action_slide, add_comparison_table_slide, add_content_slide,
    add_feature_slide, add_stats_slide, add_thank_you_slide, add_title_slide, split_columns,
};
pub use content::{DECK_TITLE, SLIDE_COUNT, build_presentation};
pub use context::{DeckContext, Palette};

/// Where the binary writes the deck, relative to the working directory.
pub const OUTPUT_FILENAME: &str = "Signal_Processing_Platform_Presentation.pptx";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::{Package, Presentation, ShapeKind};

    fn build_and_read() -> Presentation {
        let pres = build_presentation(&DeckContext::default()).unwrap();
        let bytes = pres.to_bytes().unwrap();
        Package::from_bytes(bytes).unwrap().presentation().unwrap()
    }

    fn slide_title(pres: &Presentation, index: usize) -> String {
        let slide = &pres.slides()[index];
        slide.text_boxes().next().unwrap().text()
    }

    #[test]
    fn test_fourteen_slides_in_order() {
        let pres = build_and_read();
        assert_eq!(pres.slide_count(), SLIDE_COUNT);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);
        assert_eq!(pres.title(), Some(DECK_TITLE));

        let titles: Vec<String> = (0..SLIDE_COUNT).map(|i| slide_title(&pres, i)).collect();
        assert_eq!(
            titles,
            vec![
                "Signal Processing Visualization Platform",
                "The Challenge",
                "Key Features",
                "Multi-Signal Generation",
                "Real-Time Signal Processing",
                "Enterprise-Grade Architecture",
                "Live Demo Flow (3 Minutes)",
                "Use Cases Across Industries",
                "What Makes Us Different",
                "Business Value",
                "Future Roadmap",
                "Quick Stats",
                "Ready to Transform Your Workflow?",
                "Thank You!",
            ]
        );
    }

    #[test]
    fn test_comparison_table_contents() {
        let pres = build_and_read();
        let slide = &pres.slides()[8];
        let tables: Vec<_> = slide.tables().collect();
        assert_eq!(tables.len(), 1);

        let rows = tables[0].row_texts();
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(rows[0], vec!["Feature", "Traditional Tools", "Our Platform"]);
        assert_eq!(rows[1], vec!["Learning Curve", "Weeks", "✅ Minutes"]);
        assert_eq!(rows[5], vec!["Cost", "$$$$", "✅ Local & Free"]);

        let palette = Palette::default();
        let cells = tables[0].rows();
        assert_eq!(cells[0][1].fill(), Some(palette.primary));
        assert_eq!(cells[3][0].fill(), Some(palette.light_bg));
        assert_eq!(cells[3][1].fill(), None);
        assert_eq!(cells[0][0].paragraphs()[0].size_pt(), Some(18.0));
        assert_eq!(cells[2][2].paragraphs()[0].size_pt(), Some(16.0));
    }

    #[test]
    fn test_special_characters_survive() {
        let pres = build_and_read();
        let architecture = pres.slides()[5].text();
        assert!(architecture.contains("  • Infrastructure Layer - Database & services"));

        let stats = pres.slides()[11].text();
        assert!(stats.contains("⚡ <100ms"));

        let challenge: Vec<_> = pres.slides()[1].paragraphs().map(|p| p.text()).collect();
        assert_eq!(challenge[0], "The Challenge");
        assert_eq!(challenge[5], "");
        assert_eq!(challenge[7], "    visual, interactive, and accessible");
    }

    #[test]
    fn test_backgrounds_and_grids() {
        let pres = build_and_read();
        let ctx = DeckContext::default();

        let title_bg = &pres.slides()[0].shapes()[0];
        assert_eq!(title_bg.kind(), ShapeKind::Rectangle);
        assert_eq!(title_bg.bounds(), ctx.full_canvas());
        assert_eq!(title_bg.fill(), Some(ctx.palette.primary));
        assert_eq!(title_bg.has_line(), Some(false));

        let thanks_bg = &pres.slides()[13].shapes()[0];
        assert_eq!(thanks_bg.fill(), Some(ctx.palette.accent));

        // title bar + 4 feature boxes
        assert_eq!(pres.slides()[2].rectangles().count(), 5);
        // title bar + 6 stat boxes
        assert_eq!(pres.slides()[11].rectangles().count(), 7);

        let contact = pres.slides()[12].text_boxes().last().unwrap();
        assert_eq!(contact.paragraphs().len(), 2);
        assert_eq!(contact.paragraphs()[1].text(), "your signal processing challenges");
    }

    #[test]
    fn test_two_runs_match() {
        let ctx = DeckContext::default();
        let first = build_presentation(&ctx).unwrap();
        let second = build_presentation(&ctx).unwrap();
        assert_eq!(first.slide_count(), second.slide_count());

        let xml = |p: &crate::ooxml::pptx::writer::MutablePresentation| -> Vec<String> {
            p.slides().iter().map(|s| s.to_xml()).collect()
        };
        assert_eq!(xml(&first), xml(&second));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILENAME);
        std::fs::write(&path, b"stale").unwrap();

        build_presentation(&DeckContext::default())
            .unwrap()
            .save(&path)
            .unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 5);
        let read = Package::open(&path).unwrap().presentation().unwrap();
        assert_eq!(read.slide_count(), SLIDE_COUNT);
    }
}
