use crate::controller::Operation;
use crate::models::{Label, RecordId, ResourceKind, UpdateRequest};

/// Whether the create/edit form is showing, and for which record.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState<D> {
    Closed,
    Open { draft: D, editing: Option<i64> },
}

/// Two-phase delete: a record must be selected, then confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState {
    Idle,
    Pending(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S: Label> StatusFilter<S> {
    /// `"All"`, empty, or an unknown label all mean no filtering.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<S>() {
            Ok(status) => StatusFilter::Only(status),
            Err(_) => StatusFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(s) => s.as_str(),
        }
    }

    pub fn accepts(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

/// A successful mutation, reported back to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Updated,
    Deleted,
}

pub enum Msg<K: ResourceKind> {
    Loaded(Vec<K::Record>),
    OpenNew,
    Edit(i64),
    Cancel,
    Submit(K::Draft),
    Search(String),
    FilterStatus(StatusFilter<K::Status>),
    View(i64),
    CloseView,
    RequestDelete(i64),
    ConfirmDelete,
    CancelDelete,
    Completed(Mutation),
    Failed(String),
}

/// What the view asks the controller to do next.
#[derive(Debug)]
pub enum Command<K: ResourceKind> {
    Fetch,
    Create(K::NewRecord),
    Update(i64, K::Patch),
    Delete(i64),
}

impl<K: ResourceKind> Command<K> {
    pub fn into_operation(self) -> Operation<K> {
        match self {
            Command::Fetch => Operation::List,
            Command::Create(new) => Operation::Create(new),
            Command::Update(id, patch) => Operation::Update(UpdateRequest {
                id: Some(RecordId::Number(id)),
                patch,
            }),
            Command::Delete(id) => Operation::Delete(Some(RecordId::Number(id))),
        }
    }
}

/// State owned by one list page.
pub struct ViewState<K: ResourceKind> {
    pub records: Vec<K::Record>,
    pub form: FormState<K::Draft>,
    pub form_error: Option<String>,
    pub delete: DeleteState,
    pub viewing: Option<i64>,
    pub search: String,
    pub status_filter: StatusFilter<K::Status>,
    pub toast: Option<String>,
    pub error: Option<String>,
}

impl<K: ResourceKind> Default for ViewState<K> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            form: FormState::Closed,
            form_error: None,
            delete: DeleteState::Idle,
            viewing: None,
            search: String::new(),
            status_filter: StatusFilter::All,
            toast: None,
            error: None,
        }
    }
}

impl<K: ResourceKind> ViewState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, id: i64) -> Option<&K::Record> {
        self.records.iter().find(|r| K::id(r) == id)
    }

    /// Id of the record being edited, if the form is open in edit mode.
    pub fn editing(&self) -> Option<i64> {
        match &self.form {
            FormState::Open { editing, .. } => *editing,
            FormState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&K::Draft> {
        match &self.form {
            FormState::Open { draft, .. } => Some(draft),
            FormState::Closed => None,
        }
    }

    pub fn pending_delete(&self) -> Option<i64> {
        match self.delete {
            DeleteState::Pending(id) => Some(id),
            DeleteState::Idle => None,
        }
    }

    pub fn viewed(&self) -> Option<&K::Record> {
        self.viewing.and_then(|id| self.find(id))
    }

    /// Records passing the search box and status filter, in list order.
    pub fn visible(&self) -> Vec<&K::Record> {
        let needle = self.search.to_lowercase();
        self.records
            .iter()
            .filter(|r| self.status_filter.accepts(K::status(r)))
            .filter(|r| {
                needle.is_empty()
                    || K::search_fields(r)
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Count of all records (unfiltered) per status, in enum order.
    pub fn status_counts(&self) -> Vec<(K::Status, usize)> {
        K::Status::ALL
            .iter()
            .map(|&status| {
                let n = self.records.iter().filter(|r| K::status(r) == status).count();
                (status, n)
            })
            .collect()
    }

    /// Apply a message. Returns the controller command to run, if any.
    pub fn update(&mut self, msg: Msg<K>) -> Option<Command<K>> {
        match msg {
            Msg::Loaded(records) => {
                self.records = records;
                None
            }
            Msg::OpenNew => {
                self.form = FormState::Open {
                    draft: K::Draft::default(),
                    editing: None,
                };
                self.form_error = None;
                None
            }
            Msg::Edit(id) => {
                if let Some(draft) = self.find(id).map(K::draft_of) {
                    self.form = FormState::Open {
                        draft,
                        editing: Some(id),
                    };
                    self.form_error = None;
                }
                None
            }
            Msg::Cancel => {
                self.form = FormState::Closed;
                self.form_error = None;
                None
            }
            Msg::Submit(draft) => {
                let editing = match &self.form {
                    FormState::Open { editing, .. } => *editing,
                    FormState::Closed => return None,
                };
                let command = match editing {
                    Some(id) => K::patch_from_draft(draft.clone()).map(|p| Command::Update(id, p)),
                    None => K::new_from_draft(draft.clone()).map(Command::Create),
                };
                match command {
                    Ok(command) => {
                        self.form = FormState::Closed;
                        self.form_error = None;
                        Some(command)
                    }
                    Err(message) => {
                        self.form = FormState::Open { draft, editing };
                        self.form_error = Some(message);
                        None
                    }
                }
            }
            Msg::Search(text) => {
                self.search = text;
                None
            }
            Msg::FilterStatus(filter) => {
                self.status_filter = filter;
                None
            }
            Msg::View(id) => {
                self.viewing = self.find(id).map(|_| id);
                None
            }
            Msg::CloseView => {
                self.viewing = None;
                None
            }
            Msg::RequestDelete(id) => {
                self.delete = DeleteState::Pending(id);
                None
            }
            Msg::ConfirmDelete => match std::mem::replace(&mut self.delete, DeleteState::Idle) {
                DeleteState::Pending(id) => Some(Command::Delete(id)),
                DeleteState::Idle => None,
            },
            Msg::CancelDelete => {
                self.delete = DeleteState::Idle;
                None
            }
            Msg::Completed(mutation) => {
                let verb = match mutation {
                    Mutation::Created => "submitted successfully!",
                    Mutation::Updated => "updated successfully!",
                    Mutation::Deleted => "deleted.",
                };
                self.toast = Some(format!("{} {}", K::DISPLAY_NAME, verb));
                self.error = None;
                Some(Command::Fetch)
            }
            Msg::Failed(message) => {
                log::warn!("{} view: {}", K::PLURAL, message);
                self.error = Some(message);
                None
            }
        }
    }
}
