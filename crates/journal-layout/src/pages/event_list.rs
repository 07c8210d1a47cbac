//! Event list pages
//!
//! One block per tracked year, each with three (date, event) column
//! pairs and dashed writing guides. These double as parity filler
//! pages, so the width is a parameter: fillers span the full text
//! width.

use crate::block::{Anchor, Color, FontSize, PageBlock, Point, Span, TextLabel};
use crate::geometry::{Geometry, LABEL_Y_SHIFT_MM, YEAR_LABEL_WIDTH_MM};
use crate::options::JournalOptions;

pub fn event_list_page(
    geom: &Geometry,
    options: &JournalOptions,
    index: u32,
    width_mm: f32,
) -> PageBlock {
    let mut block = PageBlock::new(geom.text_width_mm, geom.text_height_mm);
    block.anchor(format!("sec:event_list_{index}"));

    block.text(TextLabel {
        pos: Point::new(0.0, geom.text_height_mm),
        anchor: Anchor::NorthWest,
        size: FontSize::Huge,
        bold: true,
        spans: vec![Span::text(format!("Event List {index}"))],
        ..TextLabel::default()
    });

    let w = width_mm;
    let pair_w = w / 3.0;
    let date_w = pair_w / 4.0;

    for year_idx in 0..geom.num_years {
        let year = options.start_year + year_idx as i32;
        let top = geom.content_top_mm() - year_idx as f32 * geom.block_height_mm;
        let bottom = top - geom.block_height_mm;

        block.text(TextLabel {
            pos: Point::new(w, top),
            anchor: Anchor::NorthEast,
            bold: true,
            width_mm: Some(YEAR_LABEL_WIDTH_MM),
            halign: crate::block::HAlign::Right,
            y_shift_mm: LABEL_Y_SHIFT_MM,
            spans: vec![Span::text(year.to_string())],
            ..TextLabel::default()
        });

        // Column headers for each (date, event) pair
        for group in 0..3u32 {
            let gx = group as f32 * pair_w;
            for (label, x) in [("date", gx), ("event", gx + date_w)] {
                block.text(TextLabel {
                    pos: Point::new(x + 0.4, top - 0.4),
                    anchor: Anchor::NorthWest,
                    size: FontSize::Script,
                    italic: true,
                    spans: vec![Span::text(label)],
                    ..TextLabel::default()
                });
            }
        }

        if year_idx == 0 {
            block.line(Point::new(0.0, top), Point::new(w, top), Color::BorderGray);
        }

        // Vertical dividers between the date and event columns
        for group in 0..3u32 {
            let gx = group as f32 * pair_w;
            block.line(
                Point::new(gx + date_w, bottom),
                Point::new(gx + date_w, top),
                Color::GuideGray,
            );
            if group > 0 {
                block.line(
                    Point::new(gx, bottom),
                    Point::new(gx, top),
                    Color::GuideGray,
                );
            }
        }

        for l in 1..geom.num_lines {
            let y = top - l as f32 * geom.line_spacing_mm;
            block.guide(Point::new(0.0, y), Point::new(w, y));
        }

        block.line(
            Point::new(0.0, bottom),
            Point::new(w, bottom),
            Color::BorderGray,
        );
    }

    block
}
