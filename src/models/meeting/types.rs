use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::models::labels::{decode_label, labelled_enum};
use crate::models::resource::empty_if_null;

labelled_enum! {
    /// Departments that can request a meeting.
    pub enum Department ("department") {
        Infrastructure => "Infrastructure",
        Planning => "Planning",
        Environment => "Environment",
        HrAdmin => "HR & Admin",
        Ict => "ICT",
        Legal => "Legal",
    }
}

labelled_enum! {
    /// Meeting request status. Any status may be set from any other.
    pub enum MeetingStatus ("meeting status") {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

/// A stored meeting request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub purpose: String,
    pub date: String,
    pub time: String,
    pub status: MeetingStatus,
    pub created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for MeetingRequest {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            department: decode_label(row, "department")?,
            purpose: row.try_get("purpose")?,
            date: row.try_get("date")?,
            time: row.try_get("time")?,
            status: decode_label(row, "status")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// `POST` payload. Text fields left out of the body, or sent as `null`, are
/// stored empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeetingRequest {
    #[serde(default, deserialize_with = "empty_if_null")]
    pub name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub email: String,
    pub department: Department,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub purpose: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub date: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub time: String,
}

/// Partial update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<Department>,
    pub purpose: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<MeetingStatus>,
}

/// Form draft as typed into the request form. `status` is only offered
/// when editing and is empty otherwise.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MeetingDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub status: String,
}
