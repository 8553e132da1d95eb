use chrono::{DateTime, Duration, Utc};

use crate::{errors::AppError, models::Comment};

/// How long after creation a comment's content may still be changed.
pub const EDIT_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Edit,
    Delete,
}

/// Stateless predicate over comment, actor, and clock.
pub fn can_mutate(
    comment: &Comment,
    actor_id: i64,
    now: DateTime<Utc>,
    kind: MutationKind,
) -> bool {
    authorize_mutation(comment, actor_id, now, kind).is_ok()
}

/// Ownership is required for every mutation. The 24-hour window applies to
/// edits only; an author may delete their comment at any age.
pub fn authorize_mutation(
    comment: &Comment,
    actor_id: i64,
    now: DateTime<Utc>,
    kind: MutationKind,
) -> Result<(), AppError> {
    if actor_id != comment.author_id {
        return Err(AppError::Forbidden(
            "Not authorized to modify this comment".into(),
        ));
    }

    if kind == MutationKind::Edit
        && now - comment.created_at > Duration::hours(EDIT_WINDOW_HOURS)
    {
        return Err(AppError::EditWindowExpired);
    }

    Ok(())
}
