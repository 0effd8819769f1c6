use crate::models::{Label, ResourceKind};
use crate::view::{FormState, ViewState};

use super::PageKind;

/// One `<option>` of a select built from a label enum.
pub struct SelectOption {
    pub label: &'static str,
    pub selected: bool,
}

pub fn select_options<L: Label>(current: &str) -> Vec<SelectOption> {
    L::ALL
        .iter()
        .map(|l| SelectOption {
            label: l.as_str(),
            selected: l.as_str() == current,
        })
        .collect()
}

/// Status filter button; `All` first, then each status.
pub struct FilterChip {
    pub label: &'static str,
    pub active: bool,
}

pub struct StatusCount {
    pub label: &'static str,
    pub count: usize,
    pub css: String,
}

/// CSS class for a status badge: `status-pending`, `status-issued`, ...
pub fn status_class(label: &str) -> String {
    format!("status-{}", label.to_ascii_lowercase())
}

/// A record as shown in the table.
pub struct Row<R> {
    pub record: R,
    pub status_class: String,
    pub confirm_delete: bool,
}

/// Toolbar, counters and banners around the record table.
pub struct ListChrome {
    pub path: &'static str,
    pub heading: &'static str,
    pub display_name: &'static str,
    pub total: usize,
    pub shown: usize,
    pub search: String,
    /// Filter label a plain search submit keeps.
    pub active_filter: &'static str,
    pub filters: Vec<FilterChip>,
    pub counts: Vec<StatusCount>,
    pub error: Option<String>,
}

impl ListChrome {
    pub fn of<K: PageKind>(view: &ViewState<K>) -> Self {
        let active = view.status_filter.label();
        let filters = std::iter::once("All")
            .chain(K::Status::ALL.iter().map(|s| s.as_str()))
            .map(|label| FilterChip {
                label,
                active: label == active,
            })
            .collect();
        let counts = view
            .status_counts()
            .into_iter()
            .map(|(status, count)| StatusCount {
                label: status.as_str(),
                count,
                css: status_class(status.as_str()),
            })
            .collect();
        Self {
            path: K::PATH,
            heading: K::HEADING,
            display_name: K::DISPLAY_NAME,
            total: view.records.len(),
            shown: view.visible().len(),
            search: view.search.clone(),
            active_filter: active,
            filters,
            counts,
            error: view.error.clone(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.shown != self.total
    }
}

pub fn rows<K: ResourceKind>(view: &ViewState<K>) -> Vec<Row<K::Record>> {
    let pending = view.pending_delete();
    view.visible()
        .into_iter()
        .map(|record| Row {
            status_class: status_class(K::status(record).as_str()),
            confirm_delete: pending == Some(K::id(record)),
            record: record.clone(),
        })
        .collect()
}

/// The create/edit form, when open.
pub struct FormView<D> {
    pub heading: String,
    pub action: String,
    pub submit_label: &'static str,
    pub is_edit: bool,
    pub error: Option<String>,
    pub draft: D,
    pub choices: Vec<SelectOption>,
    pub statuses: Vec<SelectOption>,
}

impl<D: Clone> FormView<D> {
    pub fn of<K: PageKind<Draft = D>>(view: &ViewState<K>) -> Option<Self> {
        let FormState::Open { draft, editing } = &view.form else {
            return None;
        };
        let (heading, action, submit_label, statuses) = match editing {
            Some(id) => (
                format!("Edit {}", K::DISPLAY_NAME),
                format!("{}/{}", K::PATH, id),
                "Update",
                select_options::<K::Status>(K::draft_status(draft)),
            ),
            None => (
                format!("New {}", K::DISPLAY_NAME),
                K::PATH.to_string(),
                "Submit",
                Vec::new(),
            ),
        };
        Some(Self {
            heading,
            action,
            submit_label,
            is_edit: editing.is_some(),
            error: view.form_error.clone(),
            draft: draft.clone(),
            choices: K::choices(draft),
            statuses,
        })
    }
}
