pub mod queries;
pub mod types;

pub use queries::*;
pub use types::*;

use chrono::{DateTime, Utc};

use super::labels::{Label, parse_optional};
use super::resource::ResourceKind;

/// Marker for the toner request resource.
#[derive(Debug)]
pub struct Toner;

impl ResourceKind for Toner {
    type Record = TonerRequest;
    type NewRecord = NewTonerRequest;
    type Patch = TonerPatch;
    type Draft = TonerDraft;
    type Status = TonerStatus;

    const SINGULAR: &'static str = "toner request";
    const PLURAL: &'static str = "toner requests";
    const TITLE: &'static str = "Toner request";
    const DISPLAY_NAME: &'static str = "Toner request";
    const INITIAL_STATUS: TonerStatus = TonerStatus::Pending;

    fn id(record: &TonerRequest) -> i64 {
        record.id
    }

    fn created_at(record: &TonerRequest) -> DateTime<Utc> {
        record.created_at
    }

    fn status(record: &TonerRequest) -> TonerStatus {
        record.status
    }

    fn search_fields(record: &TonerRequest) -> Vec<&str> {
        vec![
            record.division.as_str(),
            record.printer_name.as_str(),
            record.model.as_str(),
            record.requested_by.as_str(),
        ]
    }

    fn build(id: i64, new: NewTonerRequest, created_at: DateTime<Utc>) -> TonerRequest {
        TonerRequest {
            id,
            division: new.division,
            printer_name: new.printer_name,
            model: new.model,
            requested_by: new.requested_by,
            page_counter: new.page_counter,
            date: new.date,
            notes: new.notes,
            status: Self::INITIAL_STATUS,
            created_at,
        }
    }

    fn apply(record: &mut TonerRequest, patch: TonerPatch) {
        if let Some(division) = patch.division {
            record.division = division;
        }
        if let Some(printer_name) = patch.printer_name {
            record.printer_name = printer_name;
        }
        if let Some(model) = patch.model {
            record.model = model;
        }
        if let Some(requested_by) = patch.requested_by {
            record.requested_by = requested_by;
        }
        if let Some(page_counter) = patch.page_counter {
            record.page_counter = page_counter;
        }
        if let Some(date) = patch.date {
            record.date = date;
        }
        if let Some(notes) = patch.notes {
            record.notes = notes;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
    }

    fn draft_of(record: &TonerRequest) -> TonerDraft {
        TonerDraft {
            division: record.division.as_str().to_string(),
            printer_name: record.printer_name.clone(),
            model: record.model.clone(),
            requested_by: record.requested_by.clone(),
            page_counter: record.page_counter.clone(),
            date: record.date.clone(),
            notes: record.notes.clone(),
            status: record.status.as_str().to_string(),
        }
    }

    fn new_from_draft(draft: TonerDraft) -> Result<NewTonerRequest, String> {
        let division = parse_optional::<Division>(&draft.division)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "Please select a division".to_string())?;
        Ok(NewTonerRequest {
            division,
            printer_name: draft.printer_name,
            model: draft.model,
            requested_by: draft.requested_by,
            page_counter: draft.page_counter,
            date: draft.date,
            notes: draft.notes,
        })
    }

    fn patch_from_draft(draft: TonerDraft) -> Result<TonerPatch, String> {
        let division = parse_optional::<Division>(&draft.division).map_err(|e| e.to_string())?;
        let status = parse_optional::<TonerStatus>(&draft.status).map_err(|e| e.to_string())?;
        Ok(TonerPatch {
            division,
            printer_name: Some(draft.printer_name),
            model: Some(draft.model),
            requested_by: Some(draft.requested_by),
            page_counter: Some(draft.page_counter),
            date: Some(draft.date),
            notes: Some(draft.notes),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_notes_default_to_empty() {
        let new: NewTonerRequest = serde_json::from_str(
            r#"{"division":"Procurement","printerName":"HP 01","model":"CF217A",
                "requestedBy":"Amina Yusuf","pageCounter":"14,320","date":"2026-02-10"}"#,
        )
        .unwrap();
        assert_eq!(new.notes, "");
        let record = Toner::build(9, new, Utc::now());
        assert_eq!(record.status, TonerStatus::Pending);
        assert_eq!(record.page_counter, "14,320");
    }

    #[test]
    fn null_notes_become_empty() {
        let new: NewTonerRequest =
            serde_json::from_str(r#"{"division":"Procurement","notes":null,"model":null}"#).unwrap();
        assert_eq!(new.notes, "");
        assert_eq!(new.model, "");
        assert_eq!(Toner::build(1, new, Utc::now()).status, Toner::INITIAL_STATUS);
    }

    #[test]
    fn unknown_division_is_rejected() {
        let result = serde_json::from_str::<NewTonerRequest>(r#"{"division":"Catering"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn search_covers_division_printer_model_and_requester() {
        let record = Toner::build(
            1,
            NewTonerRequest {
                division: Division::HumanResources,
                printer_name: "Canon imageRUNNER".into(),
                model: "Canon 045H".into(),
                requested_by: "Bola Adewale".into(),
                page_counter: String::new(),
                date: String::new(),
                notes: "secret notes".into(),
            },
            Utc::now(),
        );
        let fields = Toner::search_fields(&record);
        assert_eq!(
            fields,
            vec!["Human Resources", "Canon imageRUNNER", "Canon 045H", "Bola Adewale"]
        );
    }

    #[test]
    fn edit_draft_can_move_status_anywhere() {
        let draft = TonerDraft {
            division: "ICT Department".into(),
            status: "Issued".into(),
            ..Default::default()
        };
        let patch = Toner::patch_from_draft(draft).unwrap();
        assert_eq!(patch.status, Some(TonerStatus::Issued));
        assert_eq!(patch.notes.as_deref(), Some(""));
    }
}
