use sqlx::PgPool;

use super::types::*;
use super::Meeting;
use crate::models::ResourceKind;
use crate::models::labels::Label;

/// All meeting requests, newest first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<MeetingRequest>, sqlx::Error> {
    sqlx::query_as::<_, MeetingRequest>(
        "SELECT id, name, email, department, purpose, date, time, status, created_at \
         FROM meeting_requests ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<MeetingRequest>, sqlx::Error> {
    sqlx::query_as::<_, MeetingRequest>(
        "SELECT id, name, email, department, purpose, date, time, status, created_at \
         FROM meeting_requests WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a meeting request. Status always starts as `Pending`.
pub async fn create(pool: &PgPool, new: &NewMeetingRequest) -> Result<MeetingRequest, sqlx::Error> {
    sqlx::query_as::<_, MeetingRequest>(
        "INSERT INTO meeting_requests (name, email, department, purpose, date, time, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING id, name, email, department, purpose, date, time, status, created_at",
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(new.department.as_str())
    .bind(&new.purpose)
    .bind(&new.date)
    .bind(&new.time)
    .bind(Meeting::INITIAL_STATUS.as_str())
    .fetch_one(pool)
    .await
}

/// Apply a partial update. Returns `None` if no row has this id.
pub async fn update(
    pool: &PgPool,
    id: i64,
    patch: &MeetingPatch,
) -> Result<Option<MeetingRequest>, sqlx::Error> {
    sqlx::query_as::<_, MeetingRequest>(
        "UPDATE meeting_requests SET \
            name = COALESCE($2, name), \
            email = COALESCE($3, email), \
            department = COALESCE($4, department), \
            purpose = COALESCE($5, purpose), \
            date = COALESCE($6, date), \
            time = COALESCE($7, time), \
            status = COALESCE($8, status) \
         WHERE id = $1 \
         RETURNING id, name, email, department, purpose, date, time, status, created_at",
    )
    .bind(id)
    .bind(patch.name.as_deref())
    .bind(patch.email.as_deref())
    .bind(patch.department.map(Label::as_str))
    .bind(patch.purpose.as_deref())
    .bind(patch.date.as_deref())
    .bind(patch.time.as_deref())
    .bind(patch.status.map(Label::as_str))
    .fetch_optional(pool)
    .await
}

/// Delete by id. Returns whether a row was removed.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM meeting_requests WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
