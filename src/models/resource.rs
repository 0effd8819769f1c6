use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::labels::Label;

/// A kind of request record exposed through the CRUD surface.
///
/// Implemented by zero-sized markers (`Meeting`, `Toner`); the associated
/// types describe the stored record, the create payload, the partial update
/// payload and the all-strings form draft used by the pages.
pub trait ResourceKind: Sized + 'static {
    type Record: Clone + Serialize + 'static;
    type NewRecord: DeserializeOwned + 'static;
    type Patch: DeserializeOwned + Default + 'static;
    type Draft: Clone + Default + DeserializeOwned + 'static;
    type Status: Label;

    /// Lower-case singular noun used in error messages ("meeting").
    const SINGULAR: &'static str;
    /// Lower-case plural noun used in error messages ("meetings").
    const PLURAL: &'static str;
    /// Capitalised noun for "... ID required" / "... not found".
    const TITLE: &'static str;
    /// Capitalised name used in confirmation toasts ("Meeting request").
    const DISPLAY_NAME: &'static str;
    /// Status every new record starts in.
    const INITIAL_STATUS: Self::Status;

    fn id(record: &Self::Record) -> i64;
    fn created_at(record: &Self::Record) -> DateTime<Utc>;
    fn status(record: &Self::Record) -> Self::Status;

    /// Fields matched by the free-text search box.
    fn search_fields(record: &Self::Record) -> Vec<&str>;

    /// Materialise a new record. Status is always the initial one.
    fn build(id: i64, new: Self::NewRecord, created_at: DateTime<Utc>) -> Self::Record;

    /// Overwrite only the fields present in `patch`.
    fn apply(record: &mut Self::Record, patch: Self::Patch);

    fn draft_of(record: &Self::Record) -> Self::Draft;
    fn new_from_draft(draft: Self::Draft) -> Result<Self::NewRecord, String>;
    fn patch_from_draft(draft: Self::Draft) -> Result<Self::Patch, String>;
}

/// Text field of a create payload: absent or `null` both mean `""`.
pub fn empty_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Record identifier as sent by clients: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// The numeric id, if the value is one.
    pub fn resolve(&self) -> Option<i64> {
        match self {
            RecordId::Number(n) => Some(*n),
            RecordId::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// `PUT` body: `{ id, ...partial fields }`.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest<P> {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub patch: P,
}
