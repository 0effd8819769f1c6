//! Client view: list, search/filter, create/edit form and delete
//! confirmation, modelled as plain state plus messages.
//!
//! [`ViewState::update`] is pure apart from logging. It returns the command
//! the view wants executed; [`run`] executes commands against a store and
//! feeds the outcomes back in until the view has nothing left to ask for.
//! Every successful mutation is followed by a full re-fetch.

pub mod state;

pub use state::{Command, DeleteState, FormState, Msg, Mutation, StatusFilter, ViewState};

use crate::controller::{self, Outcome};
use crate::errors::AppError;
use crate::models::ResourceKind;
use crate::store::ResourceStore;

/// Drive `command` (and any follow-ups) to completion.
///
/// On a controller error the view receives [`Msg::Failed`] and the error is
/// also returned so the caller can pick a response.
pub async fn run<K, S>(
    store: &S,
    view: &mut ViewState<K>,
    mut command: Option<Command<K>>,
) -> Result<(), AppError>
where
    K: ResourceKind,
    S: ResourceStore<K>,
{
    while let Some(next) = command.take() {
        let msg = match controller::execute(store, next.into_operation()).await {
            Ok(Outcome::Listed(records)) => Msg::Loaded(records),
            Ok(Outcome::Created(_)) => Msg::Completed(Mutation::Created),
            Ok(Outcome::Updated(_)) => Msg::Completed(Mutation::Updated),
            Ok(Outcome::Deleted) => Msg::Completed(Mutation::Deleted),
            Err(e) => {
                view.update(Msg::Failed(e.to_string()));
                return Err(e);
            }
        };
        command = view.update(msg);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meeting::{Department, Meeting, MeetingDraft, MeetingStatus};
    use crate::models::toner::{Toner, TonerDraft, TonerStatus};
    use crate::store::MemoryStore;

    fn draft(name: &str, department: &str, purpose: &str) -> MeetingDraft {
        MeetingDraft {
            name: name.to_string(),
            email: "desk@agric.gov.ng".to_string(),
            department: department.to_string(),
            purpose: purpose.to_string(),
            date: "2026-03-01".to_string(),
            time: "10:00".to_string(),
            status: String::new(),
        }
    }

    async fn create(store: &MemoryStore<Meeting>, view: &mut ViewState<Meeting>, d: MeetingDraft) {
        view.update(Msg::OpenNew);
        let cmd = view.update(Msg::Submit(d));
        run(store, view, cmd).await.unwrap();
    }

    #[tokio::test]
    async fn submit_creates_then_refetches_with_toast() {
        let store = MemoryStore::<Meeting>::new();
        let mut view = ViewState::<Meeting>::new();
        run(&store, &mut view, Some(Command::Fetch)).await.unwrap();
        assert!(view.error.is_none());
        assert!(view.records.is_empty());

        create(&store, &mut view, draft("A. Bello", "ICT", "Budget")).await;

        assert_eq!(view.records.len(), 1);
        assert_eq!(view.form, FormState::Closed);
        assert_eq!(view.toast.as_deref(), Some("Meeting request submitted successfully!"));
        assert_eq!(view.records[0].status, MeetingStatus::Pending);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let store = MemoryStore::<Meeting>::new();
        let mut view = ViewState::<Meeting>::new();
        create(&store, &mut view, draft("Ada", "ICT", "Network upgrade")).await;
        create(&store, &mut view, draft("Bayo", "Legal", "Contract review")).await;

        view.update(Msg::Search("ict".to_string()));
        let hits: Vec<_> = view.visible().into_iter().map(|m| m.department).collect();
        assert_eq!(hits, vec![Department::Ict]);

        view.update(Msg::Search("REVIEW".to_string()));
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.visible()[0].name, "Bayo");

        view.update(Msg::Search(String::new()));
        assert_eq!(view.visible().len(), 2);
    }

    #[tokio::test]
    async fn edit_prefills_and_cancel_discards() {
        let store = MemoryStore::<Meeting>::new();
        let mut view = ViewState::<Meeting>::new();
        create(&store, &mut view, draft("Ada", "Planning", "Roadmap")).await;
        let id = view.records[0].id;

        view.update(Msg::Edit(id));
        assert_eq!(view.editing(), Some(id));
        assert_eq!(view.draft().map(|d| d.purpose.as_str()), Some("Roadmap"));
        assert_eq!(view.draft().map(|d| d.status.as_str()), Some("Pending"));

        view.update(Msg::Cancel);
        assert_eq!(view.form, FormState::Closed);

        // Editing an id that is not in the list leaves the form closed.
        view.update(Msg::Edit(id + 100));
        assert_eq!(view.editing(), None);
    }

    #[tokio::test]
    async fn edit_submit_updates_with_patch_semantics() {
        let store = MemoryStore::<Meeting>::new();
        let mut view = ViewState::<Meeting>::new();
        create(&store, &mut view, draft("Ada", "Planning", "Roadmap")).await;
        let id = view.records[0].id;

        view.update(Msg::Edit(id));
        let mut edited = view.draft().cloned().unwrap();
        edited.status = "Approved".to_string();
        let cmd = view.update(Msg::Submit(edited));
        assert!(matches!(cmd, Some(Command::Update(cmd_id, _)) if cmd_id == id));
        run(&store, &mut view, cmd).await.unwrap();

        assert_eq!(view.records[0].status, MeetingStatus::Approved);
        assert_eq!(view.records[0].purpose, "Roadmap");
        assert_eq!(view.toast.as_deref(), Some("Meeting request updated successfully!"));
    }

    #[tokio::test]
    async fn delete_needs_explicit_confirmation() {
        let store = MemoryStore::<Meeting>::new();
        let mut view = ViewState::<Meeting>::new();
        create(&store, &mut view, draft("Ada", "Planning", "Roadmap")).await;
        let id = view.records[0].id;

        assert!(view.update(Msg::ConfirmDelete).is_none());

        view.update(Msg::RequestDelete(id));
        assert_eq!(view.delete, DeleteState::Pending(id));
        view.update(Msg::CancelDelete);
        assert_eq!(view.delete, DeleteState::Idle);

        view.update(Msg::RequestDelete(id));
        let cmd = view.update(Msg::ConfirmDelete);
        assert_eq!(view.delete, DeleteState::Idle);
        run(&store, &mut view, cmd).await.unwrap();
        assert!(view.records.is_empty());
        assert_eq!(view.toast.as_deref(), Some("Meeting request deleted."));
    }

    #[tokio::test]
    async fn failed_delete_reports_error() {
        let store = MemoryStore::<Meeting>::new();
        let mut view = ViewState::<Meeting>::new();
        view.update(Msg::RequestDelete(42));
        let cmd = view.update(Msg::ConfirmDelete);
        let err = run(&store, &mut view, cmd).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(view.error.as_deref(), Some("Meeting not found"));
        assert!(view.toast.is_none());
    }

    #[test]
    fn invalid_draft_keeps_form_open() {
        let mut view = ViewState::<Meeting>::new();
        view.update(Msg::OpenNew);
        let cmd = view.update(Msg::Submit(draft("Ada", "", "Roadmap")));
        assert!(cmd.is_none());
        assert_eq!(view.form_error.as_deref(), Some("Please select a department"));
        assert_eq!(view.draft().map(|d| d.name.as_str()), Some("Ada"));
    }

    #[tokio::test]
    async fn toner_status_filter_and_counts() {
        let store = MemoryStore::<Toner>::new();
        let mut view = ViewState::<Toner>::new();
        for (division, printer) in [("ICT Department", "Brother MFC"), ("Procurement", "HP 01")] {
            view.update(Msg::OpenNew);
            let cmd = view.update(Msg::Submit(TonerDraft {
                division: division.to_string(),
                printer_name: printer.to_string(),
                ..Default::default()
            }));
            run(&store, &mut view, cmd).await.unwrap();
        }
        let issued_id = view.records[0].id;
        view.update(Msg::Edit(issued_id));
        let mut d = view.draft().cloned().unwrap();
        d.status = "Issued".to_string();
        let cmd = view.update(Msg::Submit(d));
        run(&store, &mut view, cmd).await.unwrap();

        view.update(Msg::FilterStatus(StatusFilter::parse("Issued")));
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.visible()[0].id, issued_id);

        view.update(Msg::FilterStatus(StatusFilter::parse("All")));
        assert_eq!(view.visible().len(), 2);

        let counts = view.status_counts();
        assert_eq!(counts[0], (TonerStatus::Pending, 1));
        assert!(counts.contains(&(TonerStatus::Issued, 1)));
        assert!(counts.contains(&(TonerStatus::Rejected, 0)));
    }

    #[test]
    fn view_only_opens_known_records() {
        let mut view = ViewState::<Toner>::new();
        view.update(Msg::View(5));
        assert!(view.viewed().is_none());
        view.update(Msg::CloseView);
        assert_eq!(view.viewing, None);
    }
}
