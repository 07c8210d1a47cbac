pub mod block;
pub mod calendar;
mod cursor;
mod document;
mod events;
mod geometry;
mod options;
pub mod pages;
mod types;

pub use block::*;
pub use cursor::{EmittedPage, PageCursor, PageKind, Paginator};
pub use document::{Document, DocumentStatistics, build_document};
pub use events::*;
pub use geometry::Geometry;
pub use options::*;
pub use types::*;
