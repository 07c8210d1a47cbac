//! Month summary grid
//!
//! One row per day of the month, one column per tracked year, each
//! cell carrying the two-letter weekday abbreviation for that date.

use crate::block::{Anchor, Color, FontSize, PageBlock, Point, Span, TextLabel};
use crate::calendar::{self, Weekday};
use crate::geometry::{
    Geometry, SUMMARY_DAY_COLUMN_MM, SUMMARY_ROW_HEIGHT_MM, SUMMARY_TITLE_BAND_MM,
};
use crate::options::JournalOptions;

pub fn month_summary_page(geom: &Geometry, options: &JournalOptions, month: u8) -> PageBlock {
    let mut block = PageBlock::new(geom.text_width_mm, geom.text_height_mm);
    block.anchor(format!("sec:month_{month}"));

    // Rows cover the longest form of the month, so February always
    // shows 29 rows
    let ref_year = calendar::leap_reference_year(options.start_year);
    let days = calendar::days_in_month(ref_year, month);

    block.text(TextLabel {
        pos: Point::new(geom.text_width_mm / 2.0, geom.text_height_mm),
        anchor: Anchor::North,
        size: FontSize::Large,
        bold: true,
        spans: vec![Span::text(format!(
            "{} Summary",
            calendar::month_name(month)
        ))],
        ..TextLabel::default()
    });

    let row_h = SUMMARY_ROW_HEIGHT_MM;
    let grid_top = geom.text_height_mm - SUMMARY_TITLE_BAND_MM;
    let grid_h = (days as f32 + 1.0) * row_h;
    let year_col_w = (geom.text_width_mm - SUMMARY_DAY_COLUMN_MM) / geom.num_years as f32;
    let grid_w = SUMMARY_DAY_COLUMN_MM + geom.num_years as f32 * year_col_w;
    let grid_bottom = grid_top - grid_h;

    // Horizontal rules: top, one under the header row, one per day row
    for d in 0..=(days as u32 + 1) {
        let y = grid_top - d as f32 * row_h;
        block.line(Point::new(0.0, y), Point::new(grid_w, y), Color::BorderGray);
    }

    // Vertical rules: left border, day-number separator, year columns
    block.line(
        Point::new(0.0, grid_bottom),
        Point::new(0.0, grid_top),
        Color::BorderGray,
    );
    block.line(
        Point::new(SUMMARY_DAY_COLUMN_MM, grid_bottom),
        Point::new(SUMMARY_DAY_COLUMN_MM, grid_top),
        Color::BorderGray,
    );
    for i in 0..geom.num_years {
        let x = SUMMARY_DAY_COLUMN_MM + (i as f32 + 1.0) * year_col_w;
        block.line(
            Point::new(x, grid_bottom),
            Point::new(x, grid_top),
            Color::BorderGray,
        );
    }

    // Day numbers down the first column
    for day in 1..=days {
        let y_center = grid_top - day as f32 * row_h - row_h / 2.0;
        block.text(TextLabel {
            pos: Point::new(SUMMARY_DAY_COLUMN_MM / 2.0, y_center),
            anchor: Anchor::Center,
            size: FontSize::Small,
            bold: true,
            spans: vec![Span::text(day.to_string())],
            ..TextLabel::default()
        });
    }

    // Year headers across the top row
    let header_y = grid_top - row_h / 2.0;
    for i in 0..geom.num_years {
        let year = options.start_year + i as i32;
        let x = SUMMARY_DAY_COLUMN_MM + i as f32 * year_col_w + year_col_w / 2.0;
        block.text(TextLabel {
            pos: Point::new(x, header_y),
            anchor: Anchor::Center,
            bold: true,
            spans: vec![Span::text(year.to_string())],
            ..TextLabel::default()
        });
    }

    // Weekday cells; invalid dates (Feb 29 outside leap years) stay
    // blank
    for day in 1..=days {
        let row_top = grid_top - day as f32 * row_h;
        for i in 0..geom.num_years {
            let year = options.start_year + i as i32;
            let Some(weekday) = calendar::day_of_week(year, month, day) else {
                continue;
            };
            let color = if options.sundays_red && weekday == Weekday::Sunday {
                Color::SundayRed
            } else {
                Color::Black
            };
            let x = SUMMARY_DAY_COLUMN_MM + i as f32 * year_col_w;
            block.text(TextLabel {
                pos: Point::new(x + 1.0, row_top - 1.0),
                anchor: Anchor::NorthWest,
                size: FontSize::Tiny,
                color,
                spans: vec![Span::text(weekday.abbrev2())],
                ..TextLabel::default()
            });
        }
    }

    block
}
