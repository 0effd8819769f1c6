use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::models::labels::{decode_label, labelled_enum};
use crate::models::resource::empty_if_null;

labelled_enum! {
    /// Divisions that can request printer toner.
    pub enum Division ("division") {
        FinanceAccounts => "Finance & Accounts",
        HumanResources => "Human Resources",
        Ict => "ICT Department",
        LegalCompliance => "Legal & Compliance",
        Infrastructure => "Infrastructure",
        PlanningBudget => "Planning & Budget",
        Environment => "Environment",
        DirectorGeneral => "Office of the Director General",
        Procurement => "Procurement",
        Administration => "Administration",
    }
}

labelled_enum! {
    /// Toner request status. `Issued` is a label only; it triggers nothing.
    pub enum TonerStatus ("toner status") {
        Pending => "Pending",
        Approved => "Approved",
        Issued => "Issued",
        Rejected => "Rejected",
    }
}

/// A stored toner request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TonerRequest {
    pub id: i64,
    pub division: Division,
    pub printer_name: String,
    pub model: String,
    pub requested_by: String,
    /// Meter reading as typed, e.g. "14,320".
    pub page_counter: String,
    pub date: String,
    pub notes: String,
    pub status: TonerStatus,
    pub created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for TonerRequest {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            division: decode_label(row, "division")?,
            printer_name: row.try_get("printer_name")?,
            model: row.try_get("model")?,
            requested_by: row.try_get("requested_by")?,
            page_counter: row.try_get("page_counter")?,
            date: row.try_get("date")?,
            notes: row.try_get("notes")?,
            status: decode_label(row, "status")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// `POST` payload. `notes` and the other text fields may be absent or `null`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTonerRequest {
    pub division: Division,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub printer_name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub model: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub requested_by: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub page_counter: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub date: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TonerPatch {
    pub division: Option<Division>,
    pub printer_name: Option<String>,
    pub model: Option<String>,
    pub requested_by: Option<String>,
    pub page_counter: Option<String>,
    pub date: Option<String>,
    pub notes: Option<String>,
    pub status: Option<TonerStatus>,
}

/// Form draft. Field names match the HTML inputs, which use the JSON names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TonerDraft {
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub printer_name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub requested_by: String,
    #[serde(default)]
    pub page_counter: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: String,
}
