//! Cover page
//!
//! Title and year range up top, the configured special days on the
//! left, the optional table of contents on the right, and a
//! configuration summary in the bottom corner. Table-of-contents page
//! numbers are cross-reference placeholders resolved by the external
//! compiler; the generator never knows forward page numbers.

use crate::block::{Anchor, Color, FontSize, HAlign, PageBlock, Point, Span, TextLabel};
use crate::events::{category_style, whimsy_style};
use crate::geometry::Geometry;
use crate::options::JournalOptions;

/// Number of optional event-list rows probed in the table of
/// contents; rows whose target never materializes render as nothing.
pub const EVENT_LIST_TOC_PROBES: u32 = 14;

/// Which ToC rows point at real pages; suppressed sections show a
/// "(skipped)" marker instead of a dangling reference.
#[derive(Debug, Clone, PartialEq)]
pub struct TocInfo {
    /// months[m - 1] is true when month m has a summary page
    pub months: [bool; 12],
    pub extra_pages: bool,
}

impl Default for TocInfo {
    fn default() -> Self {
        Self {
            months: [true; 12],
            extra_pages: true,
        }
    }
}

const TITLE_DROP_MM: f32 = 2.0;
const RANGE_DROP_MM: f32 = 14.0;
const COLUMNS_TOP_DROP_MM: f32 = 30.0;
const ROW_STEP_MM: f32 = 4.0;

pub fn title_page(geom: &Geometry, options: &JournalOptions, toc: &TocInfo) -> PageBlock {
    let w = geom.text_width_mm;
    let h = geom.text_height_mm;
    let mut block = PageBlock::new(w, h);
    block.anchor("sec:title");

    block.text(TextLabel {
        pos: Point::new(w / 2.0, h - TITLE_DROP_MM),
        anchor: Anchor::North,
        size: FontSize::Huge,
        bold: true,
        spans: vec![Span::text(options.title.clone())],
        ..TextLabel::default()
    });
    block.text(TextLabel {
        pos: Point::new(w / 2.0, h - RANGE_DROP_MM),
        anchor: Anchor::North,
        size: FontSize::Large,
        spans: vec![Span::text(format!(
            "{} -- {}",
            options.start_year,
            options.end_year()
        ))],
        ..TextLabel::default()
    });

    let col_top = h - COLUMNS_TOP_DROP_MM;
    special_days_column(&mut block, options, w * 0.48, col_top);
    if options.toc {
        toc_column(&mut block, options, toc, w * 0.52, w, col_top);
    }
    config_summary(&mut block, options, w);

    block
}

/// Left column: every configured special day with its rule or date
fn special_days_column(block: &mut PageBlock, options: &JournalOptions, width: f32, top: f32) {
    let mut y = top;
    let name_x = 2.0;
    let when_x = width * 0.6;

    block.text(TextLabel {
        pos: Point::new(width / 2.0, y),
        anchor: Anchor::North,
        bold: true,
        spans: vec![Span::text("Special Days")],
        ..TextLabel::default()
    });
    y -= 2.0 * ROW_STEP_MM;

    heading_row(block, name_x, when_x, y, "Annual", "Rule/Date");
    y -= ROW_STEP_MM;

    for rule in &options.special_days.annual {
        let name_span = match options.whimsy.then(|| whimsy_style(&rule.name)).flatten() {
            Some(style) => Span::Styled {
                text: rule.name.clone(),
                color: Color::Named(style.color),
                icon: Some(style.icon),
            },
            None => Span::text(rule.name.clone()),
        };
        row(block, name_x, when_x, y, name_span, rule.display_when());
        y -= ROW_STEP_MM;
    }

    y -= ROW_STEP_MM;
    heading_row(block, name_x, when_x, y, "Counting", "Date");
    y -= ROW_STEP_MM;

    for (category, entries) in options.special_days.dated_categories() {
        for event in entries {
            let text = format!("{} ({})", event.name, category.label());
            let name_span = match options
                .whimsy
                .then(|| category_style(category))
                .flatten()
            {
                Some(style) => Span::Styled {
                    text,
                    color: Color::Named(style.color),
                    icon: Some(style.icon),
                },
                None => Span::Text(text),
            };
            row(block, name_x, when_x, y, name_span, event.date.clone());
            y -= ROW_STEP_MM;
        }
    }
}

/// Right column: table of contents with compiler-resolved page numbers
fn toc_column(
    block: &mut PageBlock,
    options: &JournalOptions,
    toc: &TocInfo,
    x0: f32,
    x1: f32,
    top: f32,
) {
    let mut y = top;
    let name_x = x0 + 2.0;
    let ref_x = x1 - 2.0;

    block.text(TextLabel {
        pos: Point::new((x0 + x1) / 2.0, y),
        anchor: Anchor::North,
        bold: true,
        spans: vec![Span::text("Table of Contents")],
        ..TextLabel::default()
    });
    y -= 2.0 * ROW_STEP_MM;

    toc_row(block, name_x, ref_x, y, "Title Page", Some("sec:title"));
    y -= ROW_STEP_MM;

    for month in 1..=12u8 {
        let target = toc.months[month as usize - 1].then(|| format!("sec:month_{month}"));
        toc_row(
            block,
            name_x,
            ref_x,
            y,
            crate::calendar::month_name(month),
            target.as_deref(),
        );
        y -= ROW_STEP_MM;
    }

    // Event lists come into existence as parity fillers; probe a fixed
    // range and let unresolved rows render as nothing
    if options.event_lists {
        for i in 1..=EVENT_LIST_TOC_PROBES {
            block.text(TextLabel {
                pos: Point::new(name_x, y),
                anchor: Anchor::NorthWest,
                size: FontSize::Small,
                spans: vec![Span::OptionalTocRow {
                    title: format!("Event List {i}"),
                    target: format!("sec:event_list_{i}"),
                }],
                ..TextLabel::default()
            });
            y -= ROW_STEP_MM;
        }
    }

    let extra_target = toc.extra_pages.then_some("sec:extra_pages");
    toc_row(block, name_x, ref_x, y, "Extra Pages", extra_target);
    y -= ROW_STEP_MM;

    if options.include_source {
        toc_row(block, name_x, ref_x, y, "Source Code", Some("sec:source"));
    }
}

/// Bottom-right configuration summary in typewriter face
fn config_summary(block: &mut PageBlock, options: &JournalOptions, w: f32) {
    let lines = [
        format!("Start Year: {}", options.start_year),
        format!("Num Years: {}", options.num_years),
        format!("Lines/Day: {}", options.num_writing_lines),
        format!("Sundays Red: {}", options.sundays_red),
        format!("Paper: {}", options.paper.name()),
        format!("Test Mode: {}", options.test_mode),
        format!(
            "Spread: {} ({} day/page)",
            options.spread.as_str(),
            options.spread.days_per_page()
        ),
        format!("Align: {}", options.align.as_str()),
    ];

    let mut spans = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            spans.push(Span::Linebreak);
        }
        spans.push(Span::text(line.clone()));
    }

    block.text(TextLabel {
        pos: Point::new(w, 0.0),
        anchor: Anchor::SouthEast,
        size: FontSize::Small,
        mono: true,
        width_mm: Some(60.0),
        halign: HAlign::Right,
        spans,
        ..TextLabel::default()
    });
}

fn heading_row(block: &mut PageBlock, name_x: f32, when_x: f32, y: f32, left: &str, right: &str) {
    for (x, text) in [(name_x, left), (when_x, right)] {
        block.text(TextLabel {
            pos: Point::new(x, y),
            anchor: Anchor::NorthWest,
            size: FontSize::Small,
            bold: true,
            spans: vec![Span::text(text)],
            ..TextLabel::default()
        });
    }
}

fn row(block: &mut PageBlock, name_x: f32, when_x: f32, y: f32, name: Span, when: String) {
    block.text(TextLabel {
        pos: Point::new(name_x, y),
        anchor: Anchor::NorthWest,
        size: FontSize::Small,
        spans: vec![name],
        ..TextLabel::default()
    });
    block.text(TextLabel {
        pos: Point::new(when_x, y),
        anchor: Anchor::NorthWest,
        size: FontSize::Small,
        spans: vec![Span::Text(when)],
        ..TextLabel::default()
    });
}

fn toc_row(
    block: &mut PageBlock,
    name_x: f32,
    ref_x: f32,
    y: f32,
    title: &str,
    target: Option<&str>,
) {
    block.text(TextLabel {
        pos: Point::new(name_x, y),
        anchor: Anchor::NorthWest,
        size: FontSize::Small,
        spans: vec![Span::text(title)],
        ..TextLabel::default()
    });
    let span = match target {
        Some(target) => Span::PageRef(target.to_string()),
        None => Span::text("(Skipped)"),
    };
    block.text(TextLabel {
        pos: Point::new(ref_x, y),
        anchor: Anchor::NorthEast,
        size: FontSize::Small,
        spans: vec![span],
        ..TextLabel::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Primitive;

    fn labels(block: &PageBlock) -> Vec<&TextLabel> {
        block
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_title_and_anchor() {
        let options = JournalOptions::default();
        let geom = Geometry::derive(&options).unwrap();
        let block = title_page(&geom, &options, &TocInfo::default());

        assert_eq!(block.anchors, vec!["sec:title".to_string()]);
        let has_range = labels(&block).iter().any(|t| {
            t.spans
                .iter()
                .any(|s| matches!(s, Span::Text(txt) if txt == "2026 -- 2035"))
        });
        assert!(has_range);
    }

    #[test]
    fn test_toc_disabled_by_default() {
        let options = JournalOptions::default();
        let geom = Geometry::derive(&options).unwrap();
        let block = title_page(&geom, &options, &TocInfo::default());
        let any_ref = labels(&block)
            .iter()
            .any(|t| t.spans.iter().any(|s| matches!(s, Span::PageRef(_))));
        assert!(!any_ref);
    }

    #[test]
    fn test_toc_rows_reference_sections() {
        let options = JournalOptions {
            toc: true,
            ..JournalOptions::default()
        };
        let geom = Geometry::derive(&options).unwrap();
        let block = title_page(&geom, &options, &TocInfo::default());

        let refs: Vec<String> = labels(&block)
            .iter()
            .flat_map(|t| t.spans.iter())
            .filter_map(|s| match s {
                Span::PageRef(target) => Some(target.clone()),
                _ => None,
            })
            .collect();
        assert!(refs.contains(&"sec:title".to_string()));
        assert!(refs.contains(&"sec:month_1".to_string()));
        assert!(refs.contains(&"sec:month_12".to_string()));
        assert!(refs.contains(&"sec:extra_pages".to_string()));
        // Source code row only when requested
        assert!(!refs.contains(&"sec:source".to_string()));
    }

    #[test]
    fn test_skipped_months_marked_in_toc() {
        let options = JournalOptions {
            toc: true,
            test_mode: true,
            ..JournalOptions::default()
        };
        let geom = Geometry::derive(&options).unwrap();
        let mut months = [false; 12];
        months[1] = true; // February only
        let toc = TocInfo {
            months,
            extra_pages: false,
        };
        let block = title_page(&geom, &options, &toc);

        let refs: Vec<String> = labels(&block)
            .iter()
            .flat_map(|t| t.spans.iter())
            .filter_map(|s| match s {
                Span::PageRef(target) => Some(target.clone()),
                _ => None,
            })
            .collect();
        assert!(refs.contains(&"sec:month_2".to_string()));
        assert!(!refs.contains(&"sec:month_3".to_string()));

        let skipped = labels(&block)
            .iter()
            .flat_map(|t| t.spans.iter())
            .filter(|s| matches!(s, Span::Text(txt) if txt == "(Skipped)"))
            .count();
        // 11 months plus extra pages
        assert_eq!(skipped, 12);
    }

    #[test]
    fn test_whimsy_decorates_special_day_rows() {
        let options = JournalOptions {
            whimsy: true,
            ..JournalOptions::default()
        };
        let geom = Geometry::derive(&options).unwrap();
        let block = title_page(&geom, &options, &TocInfo::default());
        let styled = labels(&block)
            .iter()
            .flat_map(|t| t.spans.iter())
            .filter(|s| matches!(s, Span::Styled { .. }))
            .count();
        // Every default annual holiday has a whimsy style
        assert_eq!(styled, options.special_days.annual.len());
    }
}
