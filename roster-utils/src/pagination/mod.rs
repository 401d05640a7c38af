//! Stable facade for pagination helpers used by screen handlers.

/// Number of student cards shown per listing page.
pub const PAGE_SIZE: usize = 9;

mod labels;
mod page;

pub use labels::{PageToken, page_labels};
pub use page::{clamp_page, page_slice, page_window, total_pages};
