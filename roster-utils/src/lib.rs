/// Loading-state coordination between screen transitions and skeletons.
pub mod loading;
/// Shared pagination math and page-label helpers.
pub mod pagination;
/// Pure text helpers for card and modal rendering.
pub mod text;
