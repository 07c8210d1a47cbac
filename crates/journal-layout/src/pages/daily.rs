//! Daily entry pages
//!
//! One writing column per day, one block per tracked year inside the
//! column. Label alignment and the inner/outer column roles follow the
//! page side so margins mirror correctly across a bound spread.

use crate::block::{Anchor, Color, FontSize, Glyph, HAlign, PageBlock, Point, Span, TextLabel};
use crate::calendar::{self, Weekday};
use crate::events::{ResolvedEvent, resolve_events};
use crate::geometry::{
    COLUMN_GUTTER_MM, Geometry, LABEL_Y_SHIFT_MM, YEAR_LABEL_WIDTH_MM,
};
use crate::options::JournalOptions;
use crate::types::{AlignMode, PageSide};

/// Gap between the day-number box and the month name in the header
const HEADER_GAP_MM: f32 = 3.0;

/// Vertical offset of the weekday label under the year label
const WEEKDAY_DROP_MM: f32 = 4.0;

/// Build the page for one chunk of days (one or two, depending on the
/// spread mode). A trailing half-filled page leaves its second column
/// blank.
pub fn daily_page(
    geom: &Geometry,
    options: &JournalOptions,
    side: PageSide,
    days: &[(u8, u8)],
) -> PageBlock {
    let mut block = PageBlock::new(geom.text_width_mm, geom.text_height_mm);

    for col in 0..geom.days_per_page {
        let col_x = col as f32 * (geom.column_width_mm + COLUMN_GUTTER_MM);
        if let Some(&(month, day)) = days.get(col) {
            day_column(&mut block, geom, options, side, col, col_x, month, day);
        }
    }

    block
}

#[allow(clippy::too_many_arguments)]
fn day_column(
    block: &mut PageBlock,
    geom: &Geometry,
    options: &JournalOptions,
    side: PageSide,
    col: usize,
    col_x: f32,
    month: u8,
    day: u8,
) {
    let align_right = options.align == AlignMode::Mirrored && side.is_recto();

    // Column roles mirror with the page side: column 0 is the inner
    // column on recto pages and the outer column on verso pages.
    let is_inner = match side {
        PageSide::Recto => col == 0,
        PageSide::Verso => col == 1,
    };

    let ref_year = calendar::leap_reference_year(options.start_year);
    let last_day = calendar::days_in_month(ref_year, month);

    // Inner columns drop the month name to reduce clutter, except on
    // the last day of the month.
    let show_month = !(geom.days_per_page == 2 && is_inner && day != last_day);

    header(block, geom, align_right, col_x, month, day, show_month);

    for year_idx in 0..geom.num_years {
        let year = options.start_year + year_idx as i32;
        year_block(
            block,
            geom,
            options,
            align_right,
            col_x,
            year_idx,
            year,
            month,
            day,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn header(
    block: &mut PageBlock,
    geom: &Geometry,
    align_right: bool,
    col_x: f32,
    month: u8,
    day: u8,
    show_month: bool,
) {
    let w = geom.column_width_mm;
    let y = geom.text_height_mm;
    let month_name = calendar::month_name(month).to_uppercase();

    let day_label = |pos: Point, halign: HAlign| TextLabel {
        pos,
        anchor: if align_right {
            Anchor::NorthEast
        } else {
            Anchor::NorthWest
        },
        size: FontSize::Huge,
        bold: true,
        width_mm: Some(YEAR_LABEL_WIDTH_MM),
        halign,
        spans: vec![Span::text(day.to_string())],
        ..TextLabel::default()
    };

    if align_right {
        block.text(day_label(Point::new(col_x + w, y), HAlign::Right));
        if show_month {
            block.text(TextLabel {
                pos: Point::new(col_x + w - YEAR_LABEL_WIDTH_MM - HEADER_GAP_MM, y),
                anchor: Anchor::NorthEast,
                size: FontSize::Huge,
                bold: true,
                spans: vec![Span::text(month_name)],
                ..TextLabel::default()
            });
        }
    } else {
        block.text(day_label(Point::new(col_x, y), HAlign::Left));
        if show_month {
            block.text(TextLabel {
                pos: Point::new(col_x + YEAR_LABEL_WIDTH_MM + HEADER_GAP_MM, y),
                anchor: Anchor::NorthWest,
                size: FontSize::Huge,
                bold: true,
                spans: vec![Span::text(month_name)],
                ..TextLabel::default()
            });
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn year_block(
    block: &mut PageBlock,
    geom: &Geometry,
    options: &JournalOptions,
    align_right: bool,
    col_x: f32,
    year_idx: u32,
    year: i32,
    month: u8,
    day: u8,
) {
    let w = geom.column_width_mm;
    let spacing = geom.line_spacing_mm;
    let top = geom.content_top_mm() - year_idx as f32 * geom.block_height_mm;
    let bottom = top - geom.block_height_mm;

    // Borders frame every block, content or not: a Feb 29 row in a
    // non-leap year keeps its vertical space so block heights stay
    // uniform across years.
    if year_idx == 0 {
        block.line(
            Point::new(col_x, top),
            Point::new(col_x + w, top),
            Color::BorderGray,
        );
    }
    block.line(
        Point::new(col_x, bottom),
        Point::new(col_x + w, bottom),
        Color::BorderGray,
    );

    let Some(weekday) = calendar::day_of_week(year, month, day) else {
        return;
    };

    // Year + weekday label on the outer edge
    let weekday_color = if options.sundays_red && weekday == Weekday::Sunday {
        Color::SundayRed
    } else {
        Color::TextGray
    };
    let (label_x, anchor, halign) = if align_right {
        (col_x + w, Anchor::NorthEast, HAlign::Right)
    } else {
        (col_x, Anchor::NorthWest, HAlign::Left)
    };
    block.text(TextLabel {
        pos: Point::new(label_x, top),
        anchor,
        bold: true,
        width_mm: Some(YEAR_LABEL_WIDTH_MM),
        halign,
        y_shift_mm: LABEL_Y_SHIFT_MM,
        spans: vec![Span::text(year.to_string())],
        ..TextLabel::default()
    });
    let weekday_text = if options.day_glyphs {
        format!("{} {}", weekday.abbrev(), weekday.glyph())
    } else {
        weekday.abbrev().to_string()
    };
    block.text(TextLabel {
        pos: Point::new(label_x, top - WEEKDAY_DROP_MM),
        anchor,
        size: FontSize::Small,
        color: weekday_color,
        width_mm: Some(YEAR_LABEL_WIDTH_MM),
        halign,
        y_shift_mm: LABEL_Y_SHIFT_MM,
        spans: vec![Span::Text(weekday_text)],
        ..TextLabel::default()
    });

    let circle_radius = spacing * 0.25;
    let guide_gap = YEAR_LABEL_WIDTH_MM + 1.0;

    // Special events on the first writing line
    let events = resolve_events(&options.special_days, year, month, day, options.whimsy);
    if !events.is_empty() {
        let y_text = top - 0.5 * spacing;
        let x_text = if align_right {
            // Label sits right; events start after the bullet circle
            // on the inner (left) edge
            col_x + 2.0 * circle_radius + 2.0
        } else {
            col_x + guide_gap + 1.0
        };
        block.text(TextLabel {
            pos: Point::new(x_text, y_text),
            anchor: Anchor::West,
            size: FontSize::Footnote,
            color: Color::TextGray,
            spans: event_spans(&events),
            ..TextLabel::default()
        });
    }

    // Bullet circles on the first two lines, opposite the label
    for s in 0..2 {
        let y_circle = top - (s as f32 + 0.5) * spacing;
        let cx = if align_right {
            col_x + circle_radius + 1.0
        } else {
            col_x + w - circle_radius - 1.0
        };
        block.circle(Point::new(cx, y_circle), circle_radius, Color::GuideGray);
    }

    // Continuation prompt near the bottom corner
    block.text(TextLabel {
        pos: Point::new(col_x + w - 6.0, bottom + 2.5),
        anchor: Anchor::BaseEast,
        size: FontSize::Small,
        color: Color::TextGray,
        spans: vec![Span::Glyph(Glyph::ContinuationArrow)],
        ..TextLabel::default()
    });

    // Writing guides; the first is shortened to clear the label column
    for l in 1..geom.num_lines {
        let y = top - l as f32 * spacing;
        if l == 1 {
            if align_right {
                block.guide(Point::new(col_x, y), Point::new(col_x + w - guide_gap, y));
            } else {
                block.guide(Point::new(col_x + guide_gap, y), Point::new(col_x + w, y));
            }
        } else {
            block.guide(Point::new(col_x, y), Point::new(col_x + w, y));
        }
    }
}

fn event_spans(events: &[ResolvedEvent]) -> Vec<Span> {
    let mut spans = Vec::new();
    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            spans.push(Span::text(", "));
        }
        match event.style {
            Some(style) => spans.push(Span::Styled {
                text: event.label.clone(),
                color: Color::Named(style.color),
                icon: Some(style.icon),
            }),
            None => spans.push(Span::text(event.label.clone())),
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Primitive;
    use crate::types::SpreadMode;

    fn four_up_options() -> JournalOptions {
        JournalOptions {
            spread: SpreadMode::FourUp,
            ..JournalOptions::default()
        }
    }

    fn count_lines(block: &PageBlock, dashed: bool) -> usize {
        block
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line(l) if l.dashed == dashed))
            .count()
    }

    #[test]
    fn test_two_up_page_draws_all_year_blocks() {
        let options = JournalOptions::default();
        let geom = Geometry::derive(&options).unwrap();
        let block = daily_page(&geom, &options, PageSide::Verso, &[(3, 14)]);

        // 10 year blocks x 4 guide lines each
        assert_eq!(count_lines(&block, true), 40);
        // Top border + 10 bottom borders
        assert_eq!(count_lines(&block, false), 11);
        // Two bullet circles per year block
        let circles = block
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Circle(_)))
            .count();
        assert_eq!(circles, 20);
    }

    #[test]
    fn test_feb_29_rows_reserve_space_without_content() {
        let options = JournalOptions::default();
        let geom = Geometry::derive(&options).unwrap();
        // 2026..=2035 contains leap years 2028 and 2032
        let block = daily_page(&geom, &options, PageSide::Verso, &[(2, 29)]);

        // Only the two leap years draw guides
        assert_eq!(count_lines(&block, true), 2 * 4);
        // All ten blocks still draw their bottom borders
        assert_eq!(count_lines(&block, false), 11);
    }

    #[test]
    fn test_mirrored_labels_follow_page_side() {
        let options = four_up_options();
        let geom = Geometry::derive(&options).unwrap();
        let recto = daily_page(&geom, &options, PageSide::Recto, &[(1, 1), (1, 2)]);
        let verso = daily_page(&geom, &options, PageSide::Verso, &[(1, 3), (1, 4)]);

        let anchors = |b: &PageBlock| {
            b.primitives
                .iter()
                .filter_map(|p| match p {
                    Primitive::Text(t) => Some(t.anchor),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        // Recto pages right-align: no north-west anchored labels
        assert!(anchors(&recto).iter().all(|&a| a != Anchor::NorthWest));
        assert!(anchors(&recto).iter().any(|&a| a == Anchor::NorthEast));
        // Verso pages left-align: no north-east anchored labels
        assert!(anchors(&verso).iter().all(|&a| a != Anchor::NorthEast));
        assert!(anchors(&verso).iter().any(|&a| a == Anchor::NorthWest));
    }

    #[test]
    fn test_left_mode_ignores_page_side() {
        let options = JournalOptions {
            align: AlignMode::Left,
            ..four_up_options()
        };
        let geom = Geometry::derive(&options).unwrap();
        let recto = daily_page(&geom, &options, PageSide::Recto, &[(1, 1), (1, 2)]);
        let has_ne = recto.primitives.iter().any(|p| {
            matches!(p, Primitive::Text(t) if t.anchor == Anchor::NorthEast)
        });
        assert!(!has_ne);
    }

    #[test]
    fn test_trailing_blank_column_stays_empty() {
        let options = four_up_options();
        let geom = Geometry::derive(&options).unwrap();
        let full = daily_page(&geom, &options, PageSide::Verso, &[(1, 1), (1, 2)]);
        let half = daily_page(&geom, &options, PageSide::Verso, &[(1, 31)]);
        assert!(half.primitives.len() < full.primitives.len());

        // Nothing may be drawn right of the first column
        let col_end = geom.column_width_mm;
        for p in &half.primitives {
            if let Primitive::Line(l) = p {
                assert!(l.from.x <= col_end && l.to.x <= col_end);
            }
        }
    }

    #[test]
    fn test_day_glyphs_append_to_weekday_labels() {
        let options = JournalOptions {
            day_glyphs: true,
            ..JournalOptions::default()
        };
        let geom = Geometry::derive(&options).unwrap();
        // 2026-03-15 is a Sunday
        let block = daily_page(&geom, &options, PageSide::Verso, &[(3, 15)]);
        let has_glyph = block.primitives.iter().any(|p| {
            matches!(p, Primitive::Text(t) if t.spans.iter().any(
                |s| matches!(s, Span::Text(txt) if txt == "Sun 日")
            ))
        });
        assert!(has_glyph);
    }

    #[test]
    fn test_event_text_present_on_holiday() {
        let options = JournalOptions::default();
        let geom = Geometry::derive(&options).unwrap();
        let block = daily_page(&geom, &options, PageSide::Verso, &[(7, 4)]);
        let has_event = block.primitives.iter().any(|p| {
            matches!(p, Primitive::Text(t) if t.spans.iter().any(
                |s| matches!(s, Span::Text(txt) if txt.contains("Independence Day"))
            ))
        });
        assert!(has_event);
    }
}
