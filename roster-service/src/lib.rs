/// Error taxonomy for upstream fetch failures.
pub mod error;
/// Student fetching and placeholder-user reshaping.
pub mod students;

pub use error::ServiceError;
pub use students::{Student, fetch_all_students, fetch_student};
