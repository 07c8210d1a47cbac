//! Lined extra pages for free-form notes

use crate::block::{Anchor, Color, FontSize, PageBlock, Point, Span, TextLabel};
use crate::geometry::{COLUMN_GUTTER_MM, Geometry};
use crate::options::JournalOptions;
use crate::types::PageSide;

pub fn extra_page(
    geom: &Geometry,
    _options: &JournalOptions,
    side: PageSide,
    index: u32,
) -> PageBlock {
    let mut block = PageBlock::new(geom.text_width_mm, geom.text_height_mm);
    if index == 0 {
        block.anchor("sec:extra_pages");
    }

    // Header hugs the outer edge of the page
    let (pos, anchor) = match side {
        PageSide::Verso => (Point::new(0.0, geom.text_height_mm), Anchor::NorthWest),
        PageSide::Recto => (
            Point::new(geom.text_width_mm, geom.text_height_mm),
            Anchor::NorthEast,
        ),
    };
    block.text(TextLabel {
        pos,
        anchor,
        size: FontSize::Huge,
        bold: true,
        spans: vec![Span::text("Extra Pages")],
        ..TextLabel::default()
    });

    let spacing = geom.line_spacing_mm;
    // One line of headroom for the "date" annotation
    let top = geom.content_height_mm - spacing;
    let col_w = (geom.text_width_mm - COLUMN_GUTTER_MM) / 2.0;
    let num_lines = (top / spacing).floor() as u32;

    for col in 0..2u32 {
        let x0 = col as f32 * (col_w + COLUMN_GUTTER_MM);

        block.text(TextLabel {
            pos: Point::new(x0, top + 0.5),
            anchor: Anchor::SouthWest,
            size: FontSize::Small,
            italic: true,
            color: Color::TextGray,
            spans: vec![Span::text("date")],
            ..TextLabel::default()
        });

        block.line(
            Point::new(x0, top),
            Point::new(x0 + col_w, top),
            Color::BorderGray,
        );
        for l in 1..=num_lines {
            let y = top - l as f32 * spacing;
            if l == num_lines {
                // Bottom border closes the column
                block.line(Point::new(x0, y), Point::new(x0 + col_w, y), Color::BorderGray);
            } else {
                block.guide(Point::new(x0, y), Point::new(x0 + col_w, y));
            }
        }
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Primitive;

    #[test]
    fn test_first_page_carries_anchor() {
        let options = JournalOptions::default();
        let geom = Geometry::derive(&options).unwrap();
        let first = extra_page(&geom, &options, PageSide::Recto, 0);
        let later = extra_page(&geom, &options, PageSide::Verso, 3);
        assert_eq!(first.anchors, vec!["sec:extra_pages".to_string()]);
        assert!(later.anchors.is_empty());
    }

    #[test]
    fn test_header_mirrors_with_page_side() {
        let options = JournalOptions::default();
        let geom = Geometry::derive(&options).unwrap();
        let recto = extra_page(&geom, &options, PageSide::Recto, 1);
        let verso = extra_page(&geom, &options, PageSide::Verso, 2);

        let header_anchor = |b: &PageBlock| {
            b.primitives.iter().find_map(|p| match p {
                Primitive::Text(t) if t.size == FontSize::Huge => Some(t.anchor),
                _ => None,
            })
        };
        assert_eq!(header_anchor(&recto), Some(Anchor::NorthEast));
        assert_eq!(header_anchor(&verso), Some(Anchor::NorthWest));
    }

    #[test]
    fn test_lines_fill_usable_height_in_two_columns() {
        let options = JournalOptions::default();
        let geom = Geometry::derive(&options).unwrap();
        let block = extra_page(&geom, &options, PageSide::Recto, 0);

        let spacing = geom.line_spacing_mm;
        let top = geom.content_height_mm - spacing;
        let expected = (top / spacing).floor() as usize;

        let dashed = block
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line(l) if l.dashed))
            .count();
        // Per column: expected lines, last one solid
        assert_eq!(dashed, 2 * (expected - 1));

        let solid = block
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line(l) if !l.dashed))
            .count();
        // Top border and bottom border per column
        assert_eq!(solid, 4);
    }
}
