//! Derived layout geometry
//!
//! Every block dimension is computed up front from the physical page
//! configuration. A configuration that yields a zero or negative
//! dimension is rejected here, before any page content is emitted.

use crate::options::JournalOptions;
use crate::types::{JournalError, Result};

// =============================================================================
// Fixed layout constants (mm)
// =============================================================================

/// Header band reserved for the day/month display at the top of a page
pub const HEADER_HEIGHT_MM: f32 = 6.0;

/// Padding between the header band and the first year block
pub const HEADER_PADDING_MM: f32 = 2.0;

/// Gutter between the two day columns in four-up mode
pub const COLUMN_GUTTER_MM: f32 = 5.0;

/// Width reserved for the year/weekday label column inside a day block
pub const YEAR_LABEL_WIDTH_MM: f32 = 10.0;

/// Vertical nudge keeping labels clear of the guide line above them
pub const LABEL_Y_SHIFT_MM: f32 = -0.8;

/// Row height of the month-summary grid
pub const SUMMARY_ROW_HEIGHT_MM: f32 = 8.0;

/// Width of the day-number column in the month-summary grid
pub const SUMMARY_DAY_COLUMN_MM: f32 = 8.0;

/// Vertical band reserved for the month-summary title
pub const SUMMARY_TITLE_BAND_MM: f32 = 15.0;

/// All absolute block dimensions derived from a [`JournalOptions`].
///
/// Derivation is a pure function and may be repeated with overridden
/// year/line counts; nothing here is global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Page width minus inner and outer margins
    pub text_width_mm: f32,
    /// Page height minus top and bottom margins
    pub text_height_mm: f32,
    /// Text height minus the header band and its padding
    pub content_height_mm: f32,
    /// Height of one year block
    pub block_height_mm: f32,
    /// Vertical distance between writing guide lines
    pub line_spacing_mm: f32,
    /// Width of one day column
    pub column_width_mm: f32,
    pub days_per_page: usize,
    pub num_years: u32,
    pub num_lines: u32,
}

impl Geometry {
    pub fn derive(options: &JournalOptions) -> Result<Self> {
        Self::derive_with(options, options.num_years, options.num_writing_lines)
    }

    /// Derive with overridden year and line counts, the two values
    /// most commonly changed at runtime.
    pub fn derive_with(options: &JournalOptions, num_years: u32, num_lines: u32) -> Result<Self> {
        if num_years == 0 {
            return Err(JournalError::Config(
                "number of tracked years must be at least 1".to_string(),
            ));
        }
        if num_lines == 0 {
            return Err(JournalError::Config(
                "number of writing lines must be at least 1".to_string(),
            ));
        }

        let (page_width_mm, page_height_mm) = options.paper.dimensions_mm();
        let margins = options.margins;

        let text_width_mm = ensure_positive(
            page_width_mm - margins.inner_mm - margins.outer_mm,
            "usable text width",
        )?;
        let text_height_mm = ensure_positive(
            page_height_mm - margins.top_mm - margins.bottom_mm,
            "usable text height",
        )?;
        let content_height_mm = ensure_positive(
            text_height_mm - HEADER_HEIGHT_MM - HEADER_PADDING_MM,
            "content height below the header",
        )?;

        let block_height_mm = content_height_mm / num_years as f32;
        let line_spacing_mm = block_height_mm / num_lines as f32;

        let days_per_page = options.spread.days_per_page();
        let column_width_mm = if days_per_page == 2 {
            ensure_positive(
                (text_width_mm - COLUMN_GUTTER_MM) / 2.0,
                "day column width",
            )?
        } else {
            text_width_mm
        };

        // The label column must fit inside a day column
        if column_width_mm <= YEAR_LABEL_WIDTH_MM {
            return Err(JournalError::Config(format!(
                "day column width {column_width_mm:.1}mm does not fit the \
                 {YEAR_LABEL_WIDTH_MM}mm label column"
            )));
        }

        Ok(Self {
            page_width_mm,
            page_height_mm,
            text_width_mm,
            text_height_mm,
            content_height_mm,
            block_height_mm,
            line_spacing_mm,
            column_width_mm,
            days_per_page,
            num_years,
            num_lines,
        })
    }

    /// Top edge of the year-block area (origin is bottom-left of the
    /// text area; the header band sits above this)
    pub fn content_top_mm(&self) -> f32 {
        self.content_height_mm
    }
}

fn ensure_positive(value: f32, what: &str) -> Result<f32> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(JournalError::Config(format!(
            "{what} is {value:.1}mm; check paper size and margins"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::JournalOptions;
    use crate::types::{PageMargins, PaperSize, SpreadMode};

    #[test]
    fn test_default_a4_geometry() {
        let options = JournalOptions::default();
        let geom = Geometry::derive(&options).unwrap();

        // A4 210x297, margins 13/5/5/10
        assert_eq!(geom.text_width_mm, 192.0);
        assert_eq!(geom.text_height_mm, 282.0);
        assert_eq!(geom.content_height_mm, 274.0);
        assert_eq!(geom.block_height_mm, 27.4);
        assert!((geom.line_spacing_mm - 5.48).abs() < 1e-4);
        // Two-up: the column spans the full text width
        assert_eq!(geom.column_width_mm, 192.0);
    }

    #[test]
    fn test_four_up_column_width() {
        let options = JournalOptions {
            spread: SpreadMode::FourUp,
            ..JournalOptions::default()
        };
        let geom = Geometry::derive(&options).unwrap();
        assert_eq!(geom.days_per_page, 2);
        assert_eq!(geom.column_width_mm, (192.0 - COLUMN_GUTTER_MM) / 2.0);
    }

    #[test]
    fn test_derive_with_overrides() {
        let options = JournalOptions::default();
        let five = Geometry::derive_with(&options, 5, 8).unwrap();
        assert_eq!(five.block_height_mm, 274.0 / 5.0);
        assert_eq!(five.num_lines, 8);

        // Derivation is pure: repeating with the original counts
        // matches a fresh derive
        let again = Geometry::derive(&options).unwrap();
        assert_eq!(again, Geometry::derive(&options).unwrap());
    }

    #[test]
    fn test_negative_geometry_fails_fast() {
        let options = JournalOptions {
            margins: PageMargins::uniform(120.0),
            ..JournalOptions::default()
        };
        let err = Geometry::derive(&options).unwrap_err();
        assert!(err.to_string().contains("usable text width"));

        let options = JournalOptions {
            paper: PaperSize::Custom {
                width_mm: 50.0,
                height_mm: 10.0,
            },
            ..JournalOptions::default()
        };
        assert!(Geometry::derive(&options).is_err());
    }

    #[test]
    fn test_zero_counts_rejected() {
        let options = JournalOptions::default();
        assert!(Geometry::derive_with(&options, 0, 5).is_err());
        assert!(Geometry::derive_with(&options, 10, 0).is_err());
    }
}
