//! Events delivered to the main loop besides terminal input.

use roster_service::{ServiceError, Student};

/// An application-level event produced by a background task.
#[derive(Debug)]
pub enum AppEvent {
    /// A roster fetch resolved. `seq` identifies which spawned fetch this
    /// result belongs to; stale sequence numbers are discarded.
    StudentsLoaded {
        seq: u64,
        result: Result<Vec<Student>, ServiceError>,
    },
}
