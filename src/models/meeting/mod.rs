pub mod queries;
pub mod types;

pub use queries::*;
pub use types::*;

use chrono::{DateTime, Utc};

use super::labels::{Label, parse_optional};
use super::resource::ResourceKind;

/// Marker for the meeting request resource.
#[derive(Debug)]
pub struct Meeting;

impl ResourceKind for Meeting {
    type Record = MeetingRequest;
    type NewRecord = NewMeetingRequest;
    type Patch = MeetingPatch;
    type Draft = MeetingDraft;
    type Status = MeetingStatus;

    const SINGULAR: &'static str = "meeting";
    const PLURAL: &'static str = "meetings";
    const TITLE: &'static str = "Meeting";
    const DISPLAY_NAME: &'static str = "Meeting request";
    const INITIAL_STATUS: MeetingStatus = MeetingStatus::Pending;

    fn id(record: &MeetingRequest) -> i64 {
        record.id
    }

    fn created_at(record: &MeetingRequest) -> DateTime<Utc> {
        record.created_at
    }

    fn status(record: &MeetingRequest) -> MeetingStatus {
        record.status
    }

    fn search_fields(record: &MeetingRequest) -> Vec<&str> {
        vec![record.name.as_str(), record.purpose.as_str(), record.department.as_str()]
    }

    fn build(id: i64, new: NewMeetingRequest, created_at: DateTime<Utc>) -> MeetingRequest {
        MeetingRequest {
            id,
            name: new.name,
            email: new.email,
            department: new.department,
            purpose: new.purpose,
            date: new.date,
            time: new.time,
            status: Self::INITIAL_STATUS,
            created_at,
        }
    }

    fn apply(record: &mut MeetingRequest, patch: MeetingPatch) {
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(email) = patch.email {
            record.email = email;
        }
        if let Some(department) = patch.department {
            record.department = department;
        }
        if let Some(purpose) = patch.purpose {
            record.purpose = purpose;
        }
        if let Some(date) = patch.date {
            record.date = date;
        }
        if let Some(time) = patch.time {
            record.time = time;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
    }

    fn draft_of(record: &MeetingRequest) -> MeetingDraft {
        MeetingDraft {
            name: record.name.clone(),
            email: record.email.clone(),
            department: record.department.as_str().to_string(),
            purpose: record.purpose.clone(),
            date: record.date.clone(),
            time: record.time.clone(),
            status: record.status.as_str().to_string(),
        }
    }

    fn new_from_draft(draft: MeetingDraft) -> Result<NewMeetingRequest, String> {
        let department = parse_optional::<Department>(&draft.department)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "Please select a department".to_string())?;
        Ok(NewMeetingRequest {
            name: draft.name,
            email: draft.email,
            department,
            purpose: draft.purpose,
            date: draft.date,
            time: draft.time,
        })
    }

    fn patch_from_draft(draft: MeetingDraft) -> Result<MeetingPatch, String> {
        let department = parse_optional::<Department>(&draft.department).map_err(|e| e.to_string())?;
        let status = parse_optional::<MeetingStatus>(&draft.status).map_err(|e| e.to_string())?;
        Ok(MeetingPatch {
            name: Some(draft.name),
            email: Some(draft.email),
            department,
            purpose: Some(draft.purpose),
            date: Some(draft.date),
            time: Some(draft.time),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MeetingRequest {
        Meeting::build(
            1,
            NewMeetingRequest {
                name: "A. Bello".into(),
                email: "a@x.gov".into(),
                department: Department::Ict,
                purpose: "Budget".into(),
                date: "2026-03-01".into(),
                time: "10:00".into(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn build_forces_pending() {
        assert_eq!(sample().status, MeetingStatus::Pending);
    }

    #[test]
    fn apply_only_touches_supplied_fields() {
        let mut m = sample();
        let before = m.clone();
        Meeting::apply(
            &mut m,
            MeetingPatch {
                status: Some(MeetingStatus::Approved),
                ..Default::default()
            },
        );
        assert_eq!(m.status, MeetingStatus::Approved);
        assert_eq!(m.name, before.name);
        assert_eq!(m.department, before.department);
        assert_eq!(m.created_at, before.created_at);
    }

    #[test]
    fn draft_round_trips_through_patch() {
        let m = sample();
        let patch = Meeting::patch_from_draft(Meeting::draft_of(&m)).unwrap();
        assert_eq!(patch.department, Some(Department::Ict));
        assert_eq!(patch.status, Some(MeetingStatus::Pending));
        assert_eq!(patch.name.as_deref(), Some("A. Bello"));
    }

    #[test]
    fn new_draft_requires_department() {
        let err = Meeting::new_from_draft(MeetingDraft::default()).unwrap_err();
        assert_eq!(err, "Please select a department");

        let draft = MeetingDraft {
            department: "Accounts".into(),
            ..Default::default()
        };
        assert!(Meeting::new_from_draft(draft).is_err());
    }

    #[test]
    fn json_payload_uses_labels_and_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["department"], "ICT");
        assert_eq!(json["status"], "Pending");
        assert!(json.get("createdAt").is_some());

        let patch: MeetingPatch =
            serde_json::from_str(r#"{"department":"HR & Admin","status":"Rejected"}"#).unwrap();
        assert_eq!(patch.department, Some(Department::HrAdmin));
        assert_eq!(patch.status, Some(MeetingStatus::Rejected));
        assert!(patch.name.is_none());
    }
}
