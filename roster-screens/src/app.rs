//! Root application state and screen transitions.

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use roster_core::Context;
use roster_service::{Student, fetch_all_students};
use roster_utils::loading::{LoadingCoordinator, Placeholder};
use roster_utils::pagination::{PAGE_SIZE, clamp_page, page_slice, total_pages};

use crate::event::AppEvent;

/// Which screen the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Students,
}

/// Listing-screen state: current page, card cursor, and the modal.
#[derive(Debug, Clone, Copy)]
pub struct ListingState {
    /// Current page, 1-based.
    pub current_page: usize,
    /// Card index within the current page.
    pub cursor: usize,
    /// Whether the details modal is open for the cursored card.
    pub modal_open: bool,
}

/// Root application state, owned by the event-loop task.
///
/// Every mutation happens through an event handler running to completion
/// on that single task, so screen state never races the render pass.
pub struct App {
    pub ctx: Context,
    pub screen: Screen,
    /// Fetched roster; `None` until the first fetch resolves.
    pub students: Option<Vec<Student>>,
    /// Normalized message of the last failed fetch.
    pub error: Option<String>,
    pub listing: ListingState,
    pub loading: LoadingCoordinator,
    pub should_quit: bool,
    /// Sequence number of the most recent fetch. Resolutions carrying an
    /// older number are stale and get dropped.
    fetch_seq: u64,
    events: UnboundedSender<AppEvent>,
}

impl App {
    /// Create the app on the home screen with nothing fetched yet.
    pub fn new(ctx: Context, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            ctx,
            screen: Screen::Home,
            students: None,
            error: None,
            listing: ListingState {
                current_page: 1,
                cursor: 0,
                modal_open: false,
            },
            loading: LoadingCoordinator::new(),
            should_quit: false,
            fetch_seq: 0,
            events,
        }
    }

    /// Switch to the overview screen, fetching the roster if needed.
    pub fn open_home(&mut self) {
        self.screen = Screen::Home;
        self.ensure_students(Placeholder::Overview);
    }

    /// Switch to the listing screen, fetching the roster if needed.
    pub fn open_students(&mut self) {
        self.screen = Screen::Students;
        self.ensure_students(Placeholder::Listing);
    }

    /// Re-run the fetch for the current screen after a failure.
    pub fn retry(&mut self) {
        let view = match self.screen {
            Screen::Home => Placeholder::Overview,
            Screen::Students => Placeholder::Listing,
        };
        self.request_students(view);
    }

    fn ensure_students(&mut self, view: Placeholder) {
        if self.students.is_some() {
            return;
        }

        if self.error.is_some() {
            // Navigating away from a failed fetch starts a fresh one.
            self.request_students(view);
            return;
        }

        if self.loading.is_loading() {
            // A fetch is already in flight; only retag which skeleton the
            // root render should show (last writer wins).
            self.loading.begin(view);
            return;
        }

        self.request_students(view);
    }

    fn request_students(&mut self, view: Placeholder) {
        self.error = None;
        self.loading.begin(view);
        self.fetch_seq += 1;

        let seq = self.fetch_seq;
        let ctx = self.ctx.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            let result = fetch_all_students(&ctx).await;
            if events.send(AppEvent::StudentsLoaded { seq, result }).is_err() {
                warn!("event channel closed before fetch resolved");
            }
        });
    }

    /// Apply a resolved fetch. Stale resolutions are discarded so an old
    /// in-flight fetch can never clobber a newer one.
    pub fn on_students_loaded(
        &mut self,
        seq: u64,
        result: Result<Vec<Student>, roster_service::ServiceError>,
    ) {
        if seq != self.fetch_seq {
            debug!(seq, latest = self.fetch_seq, "dropping stale fetch result");
            return;
        }

        self.loading.end();

        match result {
            Ok(students) => self.set_students(students),
            Err(err) => {
                warn!(error = %err, "student fetch failed");
                self.error = Some(err.user_message());
            }
        }
    }

    /// Install a fetched roster, clamping the current page to the new
    /// list length.
    pub fn set_students(&mut self, students: Vec<Student>) {
        let total = total_pages(students.len(), PAGE_SIZE);
        self.listing.current_page = clamp_page(self.listing.current_page.max(1), total);
        self.listing.cursor = 0;
        self.error = None;
        self.students = Some(students);
    }

    /// Total pages for the fetched roster (1 when nothing is fetched).
    pub fn total_pages(&self) -> usize {
        let count = self.students.as_deref().map_or(0, <[Student]>::len);
        total_pages(count, PAGE_SIZE)
    }

    /// The students on the current page.
    pub fn current_page_students(&self) -> &[Student] {
        match self.students.as_deref() {
            Some(students) => page_slice(students, PAGE_SIZE, self.listing.current_page).0,
            None => &[],
        }
    }

    /// Jump to a page. Out-of-range pages are ignored; a valid jump
    /// resets the card cursor to the top of the page.
    pub fn go_to_page(&mut self, page: usize) {
        if page < 1 || page > self.total_pages() {
            return;
        }

        self.listing.current_page = page;
        self.listing.cursor = 0;
    }

    /// Go to the previous page; no-op on the first page.
    pub fn go_to_previous(&mut self) {
        if self.listing.current_page > 1 {
            self.go_to_page(self.listing.current_page - 1);
        }
    }

    /// Go to the next page; no-op on the last page.
    pub fn go_to_next(&mut self) {
        if self.listing.current_page < self.total_pages() {
            self.go_to_page(self.listing.current_page + 1);
        }
    }

    /// Move the card cursor up within the current page.
    pub fn select_previous(&mut self) {
        self.listing.cursor = self.listing.cursor.saturating_sub(1);
    }

    /// Move the card cursor down within the current page.
    pub fn select_next(&mut self) {
        let page_len = self.current_page_students().len();
        if page_len > 0 && self.listing.cursor + 1 < page_len {
            self.listing.cursor += 1;
        }
    }

    /// The student under the card cursor, if any.
    pub fn selected_student(&self) -> Option<&Student> {
        self.current_page_students().get(self.listing.cursor)
    }

    /// Open the details modal for the cursored card.
    pub fn open_modal(&mut self) {
        if self.selected_student().is_some() {
            self.listing.modal_open = true;
        }
    }

    /// Close the details modal.
    pub fn close_modal(&mut self) {
        self.listing.modal_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::AppConfig;
    use roster_service::ServiceError;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn sample_students(count: u64) -> Vec<Student> {
        (1..=count)
            .map(|id| Student {
                id,
                name: format!("Student {id}"),
                course: "Course".to_owned(),
                year: ((id - 1) % 4 + 1) as u32,
            })
            .collect()
    }

    fn test_app() -> App {
        let ctx = Context::new(
            Arc::new(reqwest::Client::new()),
            AppConfig {
                api_base_url: "http://127.0.0.1:0".to_owned(),
            },
        );
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(ctx, tx)
    }

    #[tokio::test]
    async fn go_to_page_ignores_out_of_range_jumps() {
        let mut app = test_app();
        app.set_students(sample_students(23));

        app.go_to_page(2);
        assert_eq!(app.listing.current_page, 2);

        app.go_to_page(0);
        app.go_to_page(4);
        assert_eq!(app.listing.current_page, 2);
    }

    #[tokio::test]
    async fn boundary_navigation_is_a_no_op() {
        let mut app = test_app();
        app.set_students(sample_students(23));

        app.go_to_previous();
        assert_eq!(app.listing.current_page, 1);

        app.go_to_page(3);
        app.go_to_next();
        assert_eq!(app.listing.current_page, 3);
    }

    #[tokio::test]
    async fn shrinking_refetch_clamps_the_current_page() {
        let mut app = test_app();
        app.set_students(sample_students(23));
        app.go_to_page(3);

        app.set_students(sample_students(9));
        assert_eq!(app.listing.current_page, 1);
        assert_eq!(app.total_pages(), 1);
    }

    #[tokio::test]
    async fn stale_fetch_results_are_dropped() {
        let mut app = test_app();

        // Two fetches in flight; the first resolves after the second.
        app.retry();
        let first_seq = 1;
        app.retry();
        let second_seq = 2;

        app.on_students_loaded(second_seq, Ok(sample_students(5)));
        assert_eq!(app.students.as_ref().map(Vec::len), Some(5));
        assert!(!app.loading.is_loading());

        app.on_students_loaded(first_seq, Ok(sample_students(23)));
        assert_eq!(app.students.as_ref().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn failed_fetch_surfaces_the_normalized_message() {
        let mut app = test_app();
        app.retry();
        app.on_students_loaded(1, Err(ServiceError::Network));

        assert!(app.students.is_none());
        assert!(!app.loading.is_loading());
        let message = app.error.as_deref().unwrap_or_default();
        assert!(message.starts_with("Network error:"));
    }

    #[tokio::test]
    async fn navigating_while_loading_retags_the_skeleton() {
        let mut app = test_app();
        app.open_students();
        assert_eq!(app.loading.active_view(), Some(Placeholder::Listing));

        app.open_home();
        assert_eq!(app.loading.active_view(), Some(Placeholder::Overview));

        // Only one fetch was spawned; its resolution ends the loading state.
        app.on_students_loaded(1, Ok(sample_students(50)));
        assert!(!app.loading.is_loading());
        assert_eq!(app.students.as_ref().map(Vec::len), Some(50));
    }

    #[tokio::test]
    async fn leaving_the_error_view_starts_a_fresh_fetch() {
        let mut app = test_app();
        app.open_students();
        app.on_students_loaded(1, Err(ServiceError::Unexpected));
        assert!(app.error.is_some());

        app.open_home();
        assert!(app.error.is_none());
        assert_eq!(app.loading.active_view(), Some(Placeholder::Overview));
    }

    #[tokio::test]
    async fn modal_needs_a_cursored_card() {
        let mut app = test_app();
        app.open_modal();
        assert!(!app.listing.modal_open);

        app.set_students(sample_students(1));
        app.open_modal();
        assert!(app.listing.modal_open);
    }
}
