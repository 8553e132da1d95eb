use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use you_flix_be::domain::edit_window::{MutationKind, authorize_mutation, can_mutate};
use you_flix_be::errors::AppError;
use you_flix_be::models::Comment;

const AUTHOR: i64 = 42;
const STRANGER: i64 = 99;

fn comment_aged(age: Duration, now: DateTime<Utc>) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        movie_id: Uuid::new_v4(),
        author_id: AUTHOR,
        content: "A quiet masterpiece.".into(),
        created_at: now - age,
        updated_at: None,
    }
}

#[test]
fn author_can_edit_inside_the_window() {
    let now = Utc::now();
    let comment = comment_aged(Duration::hours(23) + Duration::minutes(59), now);

    assert!(can_mutate(&comment, AUTHOR, now, MutationKind::Edit));
    assert!(authorize_mutation(&comment, AUTHOR, now, MutationKind::Edit).is_ok());
}

#[test]
fn edit_exactly_at_the_window_boundary_is_allowed() {
    let now = Utc::now();
    let comment = comment_aged(Duration::hours(24), now);

    assert!(can_mutate(&comment, AUTHOR, now, MutationKind::Edit));
}

#[test]
fn edit_past_the_window_is_rejected() {
    let now = Utc::now();
    let comment = comment_aged(Duration::hours(24) + Duration::minutes(1), now);

    assert!(!can_mutate(&comment, AUTHOR, now, MutationKind::Edit));
    let result = authorize_mutation(&comment, AUTHOR, now, MutationKind::Edit);
    assert!(matches!(result, Err(AppError::EditWindowExpired)));
}

#[test]
fn non_author_cannot_edit_regardless_of_age() {
    let now = Utc::now();
    let comment = comment_aged(Duration::minutes(5), now);

    let result = authorize_mutation(&comment, STRANGER, now, MutationKind::Edit);
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[test]
fn non_author_cannot_delete_either() {
    let now = Utc::now();
    let comment = comment_aged(Duration::days(30), now);

    let result = authorize_mutation(&comment, STRANGER, now, MutationKind::Delete);
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[test]
fn delete_is_not_time_bound() {
    let now = Utc::now();
    let comment = comment_aged(Duration::days(365), now);

    assert!(can_mutate(&comment, AUTHOR, now, MutationKind::Delete));
}

#[test]
fn ownership_is_checked_before_the_window() {
    // A stranger editing a stale comment sees the ownership denial, not the
    // window denial.
    let now = Utc::now();
    let comment = comment_aged(Duration::days(3), now);

    let result = authorize_mutation(&comment, STRANGER, now, MutationKind::Edit);
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}
