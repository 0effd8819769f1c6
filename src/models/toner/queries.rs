use sqlx::PgPool;

use super::types::*;
use super::Toner;
use crate::models::ResourceKind;
use crate::models::labels::Label;

/// All toner requests, newest first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<TonerRequest>, sqlx::Error> {
    sqlx::query_as::<_, TonerRequest>(
        "SELECT id, division, printer_name, model, requested_by, page_counter, date, notes, \
                status, created_at \
         FROM toner_requests ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<TonerRequest>, sqlx::Error> {
    sqlx::query_as::<_, TonerRequest>(
        "SELECT id, division, printer_name, model, requested_by, page_counter, date, notes, \
                status, created_at \
         FROM toner_requests WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a toner request with status `Pending`.
pub async fn create(pool: &PgPool, new: &NewTonerRequest) -> Result<TonerRequest, sqlx::Error> {
    sqlx::query_as::<_, TonerRequest>(
        "INSERT INTO toner_requests \
            (division, printer_name, model, requested_by, page_counter, date, notes, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING id, division, printer_name, model, requested_by, page_counter, date, notes, \
                   status, created_at",
    )
    .bind(new.division.as_str())
    .bind(&new.printer_name)
    .bind(&new.model)
    .bind(&new.requested_by)
    .bind(&new.page_counter)
    .bind(&new.date)
    .bind(&new.notes)
    .bind(Toner::INITIAL_STATUS.as_str())
    .fetch_one(pool)
    .await
}

/// Apply a partial update. Returns `None` if no row has this id.
pub async fn update(
    pool: &PgPool,
    id: i64,
    patch: &TonerPatch,
) -> Result<Option<TonerRequest>, sqlx::Error> {
    sqlx::query_as::<_, TonerRequest>(
        "UPDATE toner_requests SET \
            division = COALESCE($2, division), \
            printer_name = COALESCE($3, printer_name), \
            model = COALESCE($4, model), \
            requested_by = COALESCE($5, requested_by), \
            page_counter = COALESCE($6, page_counter), \
            date = COALESCE($7, date), \
            notes = COALESCE($8, notes), \
            status = COALESCE($9, status) \
         WHERE id = $1 \
         RETURNING id, division, printer_name, model, requested_by, page_counter, date, notes, \
                   status, created_at",
    )
    .bind(id)
    .bind(patch.division.map(Label::as_str))
    .bind(patch.printer_name.as_deref())
    .bind(patch.model.as_deref())
    .bind(patch.requested_by.as_deref())
    .bind(patch.page_counter.as_deref())
    .bind(patch.date.as_deref())
    .bind(patch.notes.as_deref())
    .bind(patch.status.map(Label::as_str))
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM toner_requests WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
