use sqlx::PgPool;

use super::{ResourceStore, StoreError};
use crate::models::meeting::{self, Meeting, MeetingPatch, MeetingRequest, NewMeetingRequest};
use crate::models::toner::{self, NewTonerRequest, Toner, TonerPatch, TonerRequest};

impl ResourceStore<Meeting> for PgPool {
    async fn list(&self) -> Result<Vec<MeetingRequest>, StoreError> {
        Ok(meeting::find_all(self).await?)
    }

    async fn create(&self, new: NewMeetingRequest) -> Result<MeetingRequest, StoreError> {
        Ok(meeting::create(self, &new).await?)
    }

    async fn update(&self, id: i64, patch: MeetingPatch) -> Result<MeetingRequest, StoreError> {
        meeting::update(self, id, &patch)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        if meeting::delete(self, id).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound(id))
        }
    }
}

impl ResourceStore<Toner> for PgPool {
    async fn list(&self) -> Result<Vec<TonerRequest>, StoreError> {
        Ok(toner::find_all(self).await?)
    }

    async fn create(&self, new: NewTonerRequest) -> Result<TonerRequest, StoreError> {
        Ok(toner::create(self, &new).await?)
    }

    async fn update(&self, id: i64, patch: TonerPatch) -> Result<TonerRequest, StoreError> {
        toner::update(self, id, &patch)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        if toner::delete(self, id).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound(id))
        }
    }
}
