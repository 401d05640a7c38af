//! Student fetching and placeholder-user reshaping.
//!
//! The upstream is a fixed-shape placeholder user API. Its ten users are
//! expanded into fifty students by repeating them across five rounds with
//! a suffix letter, the same derivation for every fetch.

use serde::Deserialize;
use tracing::debug;

use roster_core::Context;

use crate::error::ServiceError;

/// Number of derivation rounds applied to the upstream user list.
const DERIVATION_ROUNDS: u64 = 5;

/// Upstream user record, trimmed to the fields the directory needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub id: u64,
    pub name: String,
    pub company: ApiCompany,
}

/// Upstream company sub-record.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCompany {
    pub name: String,
}

/// A single listable student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub course: String,
    pub year: u32,
}

/// Fetch every student from the placeholder API.
///
/// All-or-nothing: any transport, status, or decode failure surfaces as
/// a single [`ServiceError`] and no partial list is returned.
pub async fn fetch_all_students(ctx: &Context) -> Result<Vec<Student>, ServiceError> {
    let url = format!("{}/users", ctx.config.api_base_url);
    debug!(%url, "fetching student roster");

    let users: Vec<ApiUser> = ctx
        .http
        .get(&url)
        .send()
        .await
        .map_err(ServiceError::from_request)?
        .error_for_status()
        .map_err(ServiceError::from_request)?
        .json()
        .await
        .map_err(ServiceError::from_request)?;

    Ok(derive_students(&users))
}

/// Fetch a single student by upstream user id.
pub async fn fetch_student(ctx: &Context, id: u64) -> Result<Student, ServiceError> {
    let url = format!("{}/users/{id}", ctx.config.api_base_url);
    debug!(%url, "fetching single student");

    let user: ApiUser = ctx
        .http
        .get(&url)
        .send()
        .await
        .map_err(ServiceError::from_request)?
        .error_for_status()
        .map_err(ServiceError::from_request)?
        .json()
        .await
        .map_err(ServiceError::from_request)?;

    Ok(Student {
        id: user.id,
        name: user.name,
        course: user.company.name,
        year: year_for_id(user.id),
    })
}

/// Expand the upstream user list into the full student roster.
pub fn derive_students(users: &[ApiUser]) -> Vec<Student> {
    let mut students = Vec::with_capacity(users.len() * DERIVATION_ROUNDS as usize);

    for round in 0..DERIVATION_ROUNDS {
        for user in users {
            let student_id = round * users.len() as u64 + user.id;
            let name = if round == 0 {
                user.name.clone()
            } else {
                format!("{} {}", user.name, (b'A' + round as u8) as char)
            };

            students.push(Student {
                id: student_id,
                name,
                course: user.company.name.clone(),
                year: year_for_id(student_id),
            });
        }
    }

    students
}

/// Distribute academic years 1 through 4 across student ids.
fn year_for_id(id: u64) -> u32 {
    ((id.saturating_sub(1)) % 4 + 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_users() -> Vec<ApiUser> {
        (1..=10)
            .map(|id| ApiUser {
                id,
                name: format!("User {id}"),
                company: ApiCompany {
                    name: format!("Course {id}"),
                },
            })
            .collect()
    }

    #[test]
    fn ten_users_expand_to_fifty_students() {
        let students = derive_students(&sample_users());
        assert_eq!(students.len(), 50);

        // Ids are unique and ordered by round, then by user.
        let ids: Vec<u64> = students.iter().map(|s| s.id).collect();
        let expected: Vec<u64> = (1..=50).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn first_round_keeps_plain_names_later_rounds_suffix() {
        let students = derive_students(&sample_users());
        assert_eq!(students[0].name, "User 1");
        assert_eq!(students[10].name, "User 1 B");
        assert_eq!(students[20].name, "User 1 C");
        assert_eq!(students[40].name, "User 1 E");
    }

    #[test]
    fn years_cycle_one_through_four() {
        let students = derive_students(&sample_users());
        assert_eq!(students[0].year, 1);
        assert_eq!(students[1].year, 2);
        assert_eq!(students[3].year, 4);
        assert_eq!(students[4].year, 1);
        assert!(students.iter().all(|s| (1..=4).contains(&s.year)));
    }

    #[test]
    fn course_comes_from_the_company_name() {
        let students = derive_students(&sample_users());
        assert_eq!(students[0].course, "Course 1");
        assert_eq!(students[12].course, "Course 3");
    }

    #[test]
    fn empty_upstream_list_yields_no_students() {
        assert!(derive_students(&[]).is_empty());
    }
}
