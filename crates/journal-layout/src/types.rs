use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, JournalError>;

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A4,
    JisB5,
    UsLetter,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions in millimeters (portrait: width < height)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::JisB5 => (182.0, 257.0),
            PaperSize::UsLetter => (215.9, 279.4),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Display name for the title-page configuration summary
    pub fn name(&self) -> String {
        match self {
            PaperSize::A4 => "A4".to_string(),
            PaperSize::JisB5 => "JIS B5".to_string(),
            PaperSize::UsLetter => "US Letter".to_string(),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => format!("{width_mm}x{height_mm}mm"),
        }
    }
}

impl Default for PaperSize {
    fn default() -> Self {
        PaperSize::A4
    }
}

/// Physical page margins in millimeters.
///
/// The inner margin is the binding edge and carries the hole-punch
/// clearance; the outer margin is the fore edge. The bottom margin
/// keeps the folio clear of the printer's cutoff zone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMargins {
    pub inner_mm: f32,
    pub outer_mm: f32,
    pub top_mm: f32,
    pub bottom_mm: f32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            inner_mm: 13.0,
            outer_mm: 5.0,
            top_mm: 5.0,
            bottom_mm: 10.0,
        }
    }
}

impl PageMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            inner_mm: margin_mm,
            outer_mm: margin_mm,
            top_mm: margin_mm,
            bottom_mm: margin_mm,
        }
    }
}

/// How many day entries share a physical page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpreadMode {
    /// One day per page
    #[default]
    TwoUp,
    /// Two days per page, side by side
    FourUp,
}

impl SpreadMode {
    pub fn days_per_page(self) -> usize {
        match self {
            SpreadMode::TwoUp => 1,
            SpreadMode::FourUp => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpreadMode::TwoUp => "2up",
            SpreadMode::FourUp => "4up",
        }
    }
}

/// Label alignment behavior across a spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignMode {
    /// Labels sit on the outer edge: right-aligned on recto pages,
    /// left-aligned on verso pages
    #[default]
    Mirrored,
    /// Labels are always left-aligned regardless of page side
    Left,
}

impl AlignMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AlignMode::Mirrored => "mirrored",
            AlignMode::Left => "left",
        }
    }
}

/// Which side of a bound book a page appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSide {
    /// Right-hand page (odd page numbers in the bound book)
    Recto,
    /// Left-hand page (even page numbers in the bound book)
    Verso,
}

impl PageSide {
    /// Side a given page number falls on in a twoside document
    pub fn of_page(number: u32) -> Self {
        if number % 2 == 1 {
            PageSide::Recto
        } else {
            PageSide::Verso
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            PageSide::Recto => PageSide::Verso,
            PageSide::Verso => PageSide::Recto,
        }
    }

    pub fn is_recto(self) -> bool {
        self == PageSide::Recto
    }
}
