//! Slide builders.
//!
//! Each builder appends exactly one slide to the presentation. Coordinates
//! are inches on the 10 × 7.5 in canvas carried by [`DeckContext`].
use super::context::DeckContext;
use crate::common::unit::inches;
use crate::common::{Error, Result};
use crate::ooxml::pptx::writer::{
    Alignment, Bounds, MutablePresentation, MutableSlide, MutableTable, TextFrame, TextParagraph,
};

/// How a content slide lays out its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentLayout {
    /// One full-width list
    #[default]
    Bullet,
    /// Two side-by-side lists, split at `len / 2`
    TwoColumn,
}

/// Column widths of the comparison table, in inches.
const TABLE_COLUMN_WIDTHS: [f64; 3] = [2.5, 2.75, 2.75];

const FEATURE_CELLS: [(f64, f64); 4] = [(0.8, 1.5), (5.2, 1.5), (0.8, 4.2), (5.2, 4.2)];

const STAT_CELLS: [(f64, f64); 6] = [
    (0.8, 1.8),
    (3.7, 1.8),
    (6.6, 1.8),
    (0.8, 4.3),
    (3.7, 4.3),
    (6.6, 4.3),
];

/// Full-canvas background with white, centered title and subtitle.
pub fn add_title_slide(
    pres: &mut MutablePresentation,
    ctx: &DeckContext,
    title: &str,
    subtitle: &str,
) {
    log::debug!("title slide: {}", title);
    let palette = ctx.palette;
    let slide = pres.add_slide();

    slide
        .add_rectangle(ctx.full_canvas())
        .fill(palette.primary)
        .no_line();

    let heading = TextParagraph::new("")
        .size(54.0)
        .bold(true)
        .color(palette.white)
        .align(Alignment::Center);
    slide.add_text_box(
        Bounds::from_inches(1.0, 2.5, 8.0, 1.0),
        TextFrame::from_text(title, &heading),
    );

    let sub = TextParagraph::new("")
        .size(28.0)
        .color(palette.white)
        .align(Alignment::Center);
    slide.add_text_box(
        Bounds::from_inches(1.0, 4.0, 8.0, 1.0),
        TextFrame::from_text(subtitle, &sub),
    );
}

/// Title bar plus a bullet list or two columns of items.
///
/// An empty list (or an empty column) produces no body text box.
pub fn add_content_slide(
    pres: &mut MutablePresentation,
    ctx: &DeckContext,
    title: &str,
    items: &[&str],
    layout: ContentLayout,
) {
    log::debug!("content slide: {} ({} items, {:?})", title, items.len(), layout);
    let slide = pres.add_slide();
    add_title_bar(slide, ctx, title);

    let secondary = ctx.palette.secondary;
    match layout {
        ContentLayout::Bullet => {
            let style = TextParagraph::new("")
                .size(20.0)
                .color(secondary)
                .level(0)
                .space_before(12.0);
            add_item_list(slide, Bounds::from_inches(0.8, 1.5, 8.4, 5.5), items, &style);
        },
        ContentLayout::TwoColumn => {
            let style = TextParagraph::new("")
                .size(18.0)
                .color(secondary)
                .space_before(10.0);
            let (left, right) = split_columns(items);
            add_item_list(slide, Bounds::from_inches(0.8, 1.5, 4.0, 5.5), left, &style);
            add_item_list(slide, Bounds::from_inches(5.2, 1.5, 4.0, 5.5), right, &style);
        },
    }
}

/// Split items for the two-column layout: `[..n/2]` and `[n/2..]`.
#[inline]
pub fn split_columns<'a, T>(items: &'a [T]) -> (&'a [T], &'a [T]) {
    items.split_at(items.len() / 2)
}

/// Title bar plus up to four outlined boxes, each with a heading and a
/// wrapped description. Pairs beyond the fourth are ignored.
pub fn add_feature_slide(
    pres: &mut MutablePresentation,
    ctx: &DeckContext,
    title: &str,
    features: &[(&str, &str)],
) {
    log::debug!("feature slide: {} ({} features)", title, features.len());
    let palette = ctx.palette;
    let slide = pres.add_slide();
    add_title_bar(slide, ctx, title);

    let box_width = inches(4.0);
    let box_height = inches(2.5);
    let heading_style = TextParagraph::new("")
        .size(22.0)
        .bold(true)
        .color(palette.primary);
    let desc_style = TextParagraph::new("").size(16.0).color(palette.secondary);

    for (&(heading, description), &(x, y)) in features.iter().zip(FEATURE_CELLS.iter()) {
        let (x, y) = (inches(x), inches(y));

        slide
            .add_rectangle(Bounds::new(x, y, box_width, box_height))
            .fill(palette.light_bg)
            .line(palette.primary, 2.0);

        slide.add_text_box(
            Bounds::new(
                x + inches(0.2),
                y + inches(0.2),
                box_width - inches(0.4),
                inches(0.5),
            ),
            TextFrame::from_text(heading, &heading_style),
        );

        slide.add_text_box(
            Bounds::new(
                x + inches(0.2),
                y + inches(0.8),
                box_width - inches(0.4),
                box_height - inches(1.0),
            ),
            TextFrame::from_text(description, &desc_style).word_wrap(true),
        );
    }
}

/// Title bar plus a three-column table whose first row is the header.
///
/// Short rows leave trailing cells empty; cells past the third are ignored.
pub fn add_comparison_table_slide(
    pres: &mut MutablePresentation,
    ctx: &DeckContext,
    title: &str,
    rows: &[&[&str]],
) -> Result<()> {
    log::debug!("comparison table slide: {} ({} rows)", title, rows.len());
    let palette = ctx.palette;
    let cols = TABLE_COLUMN_WIDTHS.len();

    let mut table = MutableTable::new(rows.len(), cols);
    for (col, &width) in TABLE_COLUMN_WIDTHS.iter().enumerate() {
        table.set_column_width(col, inches(width));
    }

    let header_style = TextParagraph::new("")
        .size(18.0)
        .bold(true)
        .color(palette.white)
        .align(Alignment::Center);
    let data_style = TextParagraph::new("")
        .size(16.0)
        .color(palette.secondary)
        .align(Alignment::Center);

    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().take(cols).enumerate() {
            let cell = table
                .cell_mut(r, c)
                .ok_or_else(|| Error::Other(format!("table cell ({}, {}) out of range", r, c)))?;
            if r == 0 {
                cell.set_text(text, &header_style);
                cell.set_fill(palette.primary);
            } else {
                cell.set_text(text, &data_style);
                if c == 0 {
                    cell.set_fill(palette.light_bg);
                }
            }
        }
    }

    let slide = pres.add_slide();
    add_title_bar(slide, ctx, title);
    slide.add_table(Bounds::from_inches(1.0, 1.8, 8.0, 4.5), table);
    Ok(())
}

/// Title bar plus up to six accent boxes, each with a large value and a
/// caption underneath.
pub fn add_stats_slide(
    pres: &mut MutablePresentation,
    ctx: &DeckContext,
    title: &str,
    stats: &[(&str, &str)],
) {
    log::debug!("stats slide: {} ({} stats)", title, stats.len());
    let palette = ctx.palette;
    let slide = pres.add_slide();
    add_title_bar(slide, ctx, title);

    let value_style = TextParagraph::new("")
        .size(32.0)
        .bold(true)
        .color(palette.white)
        .align(Alignment::Center);
    let caption_style = TextParagraph::new("")
        .size(16.0)
        .color(palette.white)
        .align(Alignment::Center);

    for (&(value, caption), &(x, y)) in stats.iter().zip(STAT_CELLS.iter()) {
        let (x, y) = (inches(x), inches(y));

        slide
            .add_rectangle(Bounds::new(x, y, inches(2.5), inches(2.0)))
            .fill(palette.accent)
            .no_line();

        slide.add_text_box(
            Bounds::new(x, y + inches(0.3), inches(2.5), inches(0.8)),
            TextFrame::from_text(value, &value_style),
        );

        slide.add_text_box(
            Bounds::new(x, y + inches(1.2), inches(2.5), inches(0.6)),
            TextFrame::from_text(caption, &caption_style).word_wrap(true),
        );
    }
}

/// Primary background with a heading, numbered steps and a contact line.
pub fn add_call_to_action_slide(
    pres: &mut MutablePresentation,
    ctx: &DeckContext,
    heading: &str,
    steps: &[&str],
    contact: &str,
) {
    log::debug!("call to action slide: {} ({} steps)", heading, steps.len());
    let palette = ctx.palette;
    let slide = pres.add_slide();

    slide
        .add_rectangle(ctx.full_canvas())
        .fill(palette.primary)
        .no_line();

    let heading_style = TextParagraph::new("")
        .size(44.0)
        .bold(true)
        .color(palette.white)
        .align(Alignment::Center);
    slide.add_text_box(
        Bounds::from_inches(1.0, 1.5, 8.0, 1.0),
        TextFrame::from_text(heading, &heading_style),
    );

    let step_style = TextParagraph::new("")
        .size(28.0)
        .color(palette.white)
        .align(Alignment::Center)
        .space_before(20.0);
    add_item_list(slide, Bounds::from_inches(2.0, 3.0, 6.0, 2.5), steps, &step_style);

    let contact_style = TextParagraph::new("")
        .size(20.0)
        .color(palette.white)
        .align(Alignment::Center);
    slide.add_text_box(
        Bounds::from_inches(2.0, 6.0, 6.0, 0.8),
        TextFrame::from_text(contact, &contact_style),
    );
}

/// Accent background with a large headline and a tagline.
pub fn add_thank_you_slide(
    pres: &mut MutablePresentation,
    ctx: &DeckContext,
    headline: &str,
    tagline: &str,
) {
    log::debug!("thank you slide: {}", headline);
    let palette = ctx.palette;
    let slide = pres.add_slide();

    slide
        .add_rectangle(ctx.full_canvas())
        .fill(palette.accent)
        .no_line();

    let headline_style = TextParagraph::new("")
        .size(72.0)
        .bold(true)
        .color(palette.white)
        .align(Alignment::Center);
    slide.add_text_box(
        Bounds::from_inches(1.0, 2.5, 8.0, 2.0),
        TextFrame::from_text(headline, &headline_style),
    );

    let tagline_style = TextParagraph::new("")
        .size(32.0)
        .color(palette.white)
        .align(Alignment::Center);
    slide.add_text_box(
        Bounds::from_inches(1.0, 4.5, 8.0, 1.0),
        TextFrame::from_text(tagline, &tagline_style),
    );
}

/// Primary band across the top with the slide title in white.
fn add_title_bar(slide: &mut MutableSlide, ctx: &DeckContext, title: &str) {
    let palette = ctx.palette;
    slide
        .add_rectangle(ctx.title_bar())
        .fill(palette.primary)
        .no_line();

    let style = TextParagraph::new("")
        .size(36.0)
        .bold(true)
        .color(palette.white);
    slide.add_text_box(
        Bounds::from_inches(0.5, 0.2, 9.0, 0.6),
        TextFrame::from_text(title, &style),
    );
}

/// One wrapped text box with a paragraph per item; nothing for no items.
fn add_item_list(slide: &mut MutableSlide, bounds: Bounds, items: &[&str], style: &TextParagraph) {
    if items.is_empty() {
        return;
    }

    let mut frame = TextFrame::new().word_wrap(true);
    for item in items {
        frame.push(style.with_text(*item));
    }
    slide.add_text_box(bounds, frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::writer::MutableShape;
    use proptest::prelude::*;

    fn text_boxes(slide: &MutableSlide) -> Vec<&MutableShape> {
        slide
            .shapes()
            .iter()
            .filter(|s| s.text_frame().is_some())
            .collect()
    }

    fn only_slide(pres: &MutablePresentation) -> &MutableSlide {
        assert_eq!(pres.slide_count(), 1);
        &pres.slides()[0]
    }

    #[test]
    fn test_title_slide_shapes() {
        let ctx = DeckContext::default();
        let mut pres = MutablePresentation::new();
        add_title_slide(&mut pres, &ctx, "Hello", "World");

        let slide = only_slide(&pres);
        assert_eq!(slide.shape_count(), 3);
        assert_eq!(slide.shapes()[0].bounds(), ctx.full_canvas());

        let boxes = text_boxes(slide);
        let title = boxes[0].text_frame().unwrap();
        assert_eq!(title.text(), "Hello");
        let para = &title.paragraphs()[0];
        assert_eq!(para.size_pt(), Some(54.0));
        assert!(para.is_bold());
        assert_eq!(para.alignment(), Some(Alignment::Center));
        assert_eq!(boxes[1].bounds(), Bounds::from_inches(1.0, 4.0, 8.0, 1.0));
    }

    #[test]
    fn test_bullet_slide() {
        let ctx = DeckContext::default();
        let mut pres = MutablePresentation::new();
        add_content_slide(&mut pres, &ctx, "List", &["a", "", "b"], ContentLayout::Bullet);

        let slide = only_slide(&pres);
        let boxes = text_boxes(slide);
        assert_eq!(boxes.len(), 2);
        let body = boxes[1].text_frame().unwrap();
        assert!(body.wraps());
        assert_eq!(body.paragraphs().len(), 3);
        assert_eq!(body.paragraphs()[1].text(), "");
        assert!(body.paragraphs().iter().all(|p| {
            p.size_pt() == Some(20.0)
                && p.space_before_pt() == Some(12.0)
                && p.text_color() == Some(ctx.palette.secondary)
        }));
    }

    #[test]
    fn test_empty_item_list_has_no_body() {
        let ctx = DeckContext::default();
        let mut pres = MutablePresentation::new();
        add_content_slide(&mut pres, &ctx, "Empty", &[], ContentLayout::Bullet);
        add_content_slide(&mut pres, &ctx, "One", &["only"], ContentLayout::TwoColumn);

        // title bar + title
        assert_eq!(pres.slides()[0].shape_count(), 2);
        // the left half of a one-item list is empty
        let boxes = text_boxes(&pres.slides()[1]);
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[1].bounds().x, inches(5.2));
    }

    #[test]
    fn test_two_column_split_odd() {
        let ctx = DeckContext::default();
        let items = ["1", "2", "3", "4", "5", "6", "7"];
        let mut pres = MutablePresentation::new();
        add_content_slide(&mut pres, &ctx, "Cols", &items, ContentLayout::TwoColumn);

        let boxes = text_boxes(only_slide(&pres));
        assert_eq!(boxes.len(), 3);
        assert_eq!(boxes[1].text_frame().unwrap().paragraphs().len(), 3);
        assert_eq!(boxes[2].text_frame().unwrap().paragraphs().len(), 4);
        assert_eq!(boxes[2].text_frame().unwrap().text(), "4\n5\n6\n7");
    }

    #[test]
    fn test_feature_grid_partial() {
        let ctx = DeckContext::default();
        let mut pres = MutablePresentation::new();
        add_feature_slide(&mut pres, &ctx, "F", &[("A", "a"), ("B", "b")]);

        let slide = only_slide(&pres);
        // title bar + title + 2 × (box + heading + description)
        assert_eq!(slide.shape_count(), 8);
        let heading = &slide.shapes()[3];
        assert_eq!(heading.bounds(), Bounds::from_inches(1.0, 1.7, 3.6, 0.5));
        let desc = &slide.shapes()[7];
        assert_eq!(desc.bounds().x, inches(5.2) + inches(0.2));
        assert!(desc.text_frame().unwrap().wraps());
    }

    #[test]
    fn test_feature_grid_ignores_extra_pairs() {
        let ctx = DeckContext::default();
        let features = [("1", ""), ("2", ""), ("3", ""), ("4", ""), ("5", "")];
        let mut pres = MutablePresentation::new();
        add_feature_slide(&mut pres, &ctx, "F", &features);
        assert_eq!(only_slide(&pres).shape_count(), 2 + 4 * 3);
    }

    #[test]
    fn test_comparison_table() {
        let ctx = DeckContext::default();
        let rows: [&[&str]; 3] = [&["H1", "H2", "H3"], &["a", "b"], &["c", "d", "e", "extra"]];
        let mut pres = MutablePresentation::new();
        add_comparison_table_slide(&mut pres, &ctx, "T", &rows).unwrap();

        let slide = only_slide(&pres);
        let table = slide.shapes()[2].table().unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(
            table.column_widths(),
            &[inches(2.5), inches(2.75), inches(2.75)]
        );
        assert_eq!(table.cell(0, 0).unwrap().fill(), Some(ctx.palette.primary));
        assert_eq!(table.cell(1, 0).unwrap().fill(), Some(ctx.palette.light_bg));
        assert_eq!(table.cell(1, 1).unwrap().fill(), None);
        assert_eq!(table.cell(1, 2).unwrap().text(), "");
        assert_eq!(table.cell(2, 2).unwrap().text(), "e");
    }

    #[test]
    fn test_stats_slide() {
        let ctx = DeckContext::default();
        let stats = [("1", "one"), ("2", "two"), ("3", "three")];
        let mut pres = MutablePresentation::new();
        add_stats_slide(&mut pres, &ctx, "S", &stats);

        let slide = only_slide(&pres);
        assert_eq!(slide.shape_count(), 2 + 3 * 3);
        let third_box = &slide.shapes()[8];
        assert_eq!(third_box.bounds(), Bounds::from_inches(6.6, 1.8, 2.5, 2.0));
    }

    #[test]
    fn test_call_to_action_contact_lines() {
        let ctx = DeckContext::default();
        let mut pres = MutablePresentation::new();
        add_call_to_action_slide(&mut pres, &ctx, "Go", &["1. a", "2. b"], "line one\nline two");

        let boxes = text_boxes(only_slide(&pres));
        assert_eq!(boxes.len(), 3);
        let steps = boxes[1].text_frame().unwrap();
        assert_eq!(steps.paragraphs().len(), 2);
        assert_eq!(steps.paragraphs()[0].space_before_pt(), Some(20.0));
        let contact = boxes[2].text_frame().unwrap();
        assert_eq!(contact.paragraphs().len(), 2);
        assert!(contact.paragraphs().iter().all(|p| p.size_pt() == Some(20.0)));
    }

    #[test]
    fn test_thank_you_background() {
        let ctx = DeckContext::default();
        let mut pres = MutablePresentation::new();
        add_thank_you_slide(&mut pres, &ctx, "Thanks", "Tag");

        let slide = only_slide(&pres);
        assert!(slide.to_xml().contains(r#"<a:srgbClr val="00B050"/>"#));
        let headline = text_boxes(slide)[0].text_frame().unwrap();
        assert_eq!(headline.paragraphs()[0].size_pt(), Some(72.0));
    }

    proptest! {
        #[test]
        fn prop_split_columns_floor(n in 0usize..64) {
            let items: Vec<usize> = (0..n).collect();
            let (left, right) = split_columns(&items);
            prop_assert_eq!(left.len(), n / 2);
            prop_assert_eq!(right.len(), n - n / 2);
            prop_assert_eq!([left, right].concat(), items);
        }
    }
}
