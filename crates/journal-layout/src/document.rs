//! Document assembly: section ordering and the pagination protocol
//!
//! Drives one pass over the whole journal: title page, then per month
//! a summary page plus the daily pages, then the lined extra pages,
//! then the optional source appendix. All left/right placement flows
//! through the [`Paginator`]; fillers are full-width event-list pages.
//!
//! Reduced test mode suppresses most content but still advances the
//! logical counter for every suppressed page, so the final page
//! numbering matches the full document exactly.

use crate::calendar;
use crate::cursor::{EmittedPage, PageKind, Paginator};
use crate::geometry::Geometry;
use crate::options::JournalOptions;
use crate::pages::{self, TocInfo};
use crate::types::{PageSide, Result};

/// A fully laid-out document, ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Pages in emission order
    pub pages: Vec<EmittedPage>,
    /// Logical page the source appendix starts on, when reserved
    pub source_start: Option<u32>,
    pub stats: DocumentStatistics,
}

/// Statistics about the generated page stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStatistics {
    /// Content pages written
    pub content_pages: u32,
    /// Parity filler pages inserted
    pub filler_pages: u32,
    /// Logical numbers consumed without emitting a page
    pub skipped_pages: u32,
    /// Total physical pages written, fillers included
    pub physical_pages: u32,
    /// Last logical page number assigned
    pub final_logical_page: u32,
    /// Event-list pages created as fillers
    pub event_lists: u32,
}

/// Which content survives reduced test generation.
///
/// The subset touches every interesting pagination case: a leap-day
/// month, month boundaries, the configured dated events, and the ends
/// of the extra-page run.
#[derive(Debug, Clone, Copy)]
struct TestFilter {
    enabled: bool,
}

impl TestFilter {
    fn month_summary(&self, month: u8) -> bool {
        !self.enabled || month == 2
    }

    fn daily(&self, month: u8, day: u8) -> bool {
        if !self.enabled {
            return true;
        }
        match month {
            2 => matches!(day, 1..=4 | 29),
            6 => day == 30,
            11 => matches!(day, 29 | 30),
            12 => matches!(day, 29..=31),
            _ => false,
        }
    }

    fn extra(&self, index: u32, last: u32) -> bool {
        !self.enabled || index <= 1 || index == last
    }
}

/// Lay out the whole journal. Deterministic: identical options produce
/// an identical page stream, filler placement included.
pub fn build_document(options: &JournalOptions) -> Result<Document> {
    options.validate()?;
    let geom = Geometry::derive(options)?;

    let mut builder = Builder {
        options,
        geom,
        paginator: Paginator::new(),
        filter: TestFilter {
            enabled: options.test_mode,
        },
        event_lists: 0,
    };

    builder.title_page();
    for month in 1..=12 {
        builder.month_summary(month);
        builder.daily_pages(month);
    }
    builder.extra_pages();
    let source_start = builder.source_section();

    let stats = DocumentStatistics {
        content_pages: builder
            .paginator
            .pages()
            .iter()
            .filter(|p| p.kind == PageKind::Content)
            .count() as u32,
        filler_pages: builder.paginator.filler_count(),
        skipped_pages: builder.paginator.skipped_count(),
        physical_pages: builder.paginator.physical_pages(),
        final_logical_page: builder.paginator.logical_page() - 1,
        event_lists: builder.event_lists,
    };

    Ok(Document {
        pages: builder.paginator.into_pages(),
        source_start,
        stats,
    })
}

struct Builder<'a> {
    options: &'a JournalOptions,
    geom: Geometry,
    paginator: Paginator,
    filter: TestFilter,
    event_lists: u32,
}

impl Builder<'_> {
    /// Align the physical stream to the next logical number's parity.
    /// Fillers render as the next event-list page, or blank when
    /// event lists are disabled.
    fn align_to_logical(&mut self) {
        let geom = &self.geom;
        let options = self.options;
        let counter = &mut self.event_lists;
        self.paginator.align_to_logical(|_| {
            if options.event_lists {
                *counter += 1;
                pages::event_list_page(geom, options, *counter, geom.text_width_mm)
            } else {
                crate::block::PageBlock::new(geom.text_width_mm, geom.text_height_mm)
            }
        });
    }

    /// Consume a logical number when the current one falls on the
    /// wrong side, then align. Runs even for suppressed content so
    /// test-mode numbering tracks the full document.
    fn force_side(&mut self, side: PageSide) {
        if self.paginator.cursor().logical_side() != side {
            self.paginator.skip_logical();
        }
    }

    fn title_page(&mut self) {
        self.align_to_logical();
        let toc = self.toc_info();
        let block = pages::title_page(&self.geom, self.options, &toc);
        self.paginator.emit_page(block);
    }

    fn toc_info(&mut self) -> TocInfo {
        let mut months = [false; 12];
        for month in 1..=12u8 {
            months[month as usize - 1] = self.filter.month_summary(month);
        }
        TocInfo {
            months,
            extra_pages: !self.options.test_mode,
        }
    }

    fn month_summary(&mut self, month: u8) {
        self.force_side(self.options.month_summary_side);
        if self.filter.month_summary(month) {
            self.align_to_logical();
            let block = pages::month_summary_page(&self.geom, self.options, month);
            self.paginator.emit_page(block);
        } else {
            self.paginator.skip_logical();
        }
    }

    fn daily_pages(&mut self, month: u8) {
        let ref_year = calendar::leap_reference_year(self.options.start_year);
        let days_in_month = calendar::days_in_month(ref_year, month);
        let chunk_size = self.geom.days_per_page;

        let month_days: Vec<(u8, u8)> =
            (1..=days_in_month).map(|day| (month, day)).collect();

        for chunk in month_days.chunks(chunk_size) {
            let wanted = chunk.iter().any(|&(_, day)| self.filter.daily(month, day));
            if !wanted {
                self.paginator.skip_logical();
                continue;
            }
            self.align_to_logical();
            let side = self.paginator.cursor().logical_side();
            let block = pages::daily_page(&self.geom, self.options, side, chunk);
            self.paginator.emit_page(block);
        }
    }

    /// Lined extra pages, sized so the following section starts recto:
    /// at least `min_extra_pages`, plus one when the section would
    /// otherwise end on a recto page.
    fn extra_pages(&mut self) {
        self.force_side(PageSide::Recto);
        let start = self.paginator.logical_page();
        let min = self.options.min_extra_pages;
        let count = if (start + min) % 2 == 0 { min + 1 } else { min };

        for index in 0..count {
            if self.filter.extra(index, count.saturating_sub(1)) {
                self.align_to_logical();
                let side = self.paginator.cursor().logical_side();
                let block = pages::extra_page(&self.geom, self.options, side, index);
                self.paginator.emit_page(block);
            } else {
                self.paginator.skip_logical();
            }
        }
    }

    /// Reserve the logical start of the source appendix; its body is
    /// flowed by the serializer and the external compiler.
    fn source_section(&mut self) -> Option<u32> {
        if !self.options.include_source {
            return None;
        }
        self.force_side(PageSide::Recto);
        self.align_to_logical();
        Some(self.paginator.logical_page())
    }
}
