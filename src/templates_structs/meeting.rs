use actix_web::HttpResponse;
use askama::Template;

use crate::errors::{AppError, render};
use crate::models::meeting::{Department, Meeting, MeetingDraft, MeetingRequest};
use crate::view::ViewState;

use super::{FormView, ListChrome, PageContext, PageKind, Row, SelectOption, rows, select_options};

#[derive(Template)]
#[template(path = "meetings/list.html")]
pub struct MeetingsPageTemplate {
    pub ctx: PageContext,
    pub list: ListChrome,
    pub rows: Vec<Row<MeetingRequest>>,
    pub form: Option<FormView<MeetingDraft>>,
    pub detail: Option<MeetingRequest>,
}

impl PageKind for Meeting {
    const PATH: &'static str = "/meetings";
    const HEADING: &'static str = "Meeting Requests";

    fn choices(draft: &MeetingDraft) -> Vec<SelectOption> {
        select_options::<Department>(&draft.department)
    }

    fn draft_status(draft: &MeetingDraft) -> &str {
        &draft.status
    }

    fn render_page(ctx: PageContext, view: &ViewState<Self>) -> Result<HttpResponse, AppError> {
        render(MeetingsPageTemplate {
            ctx,
            list: ListChrome::of(view),
            rows: rows(view),
            form: FormView::of(view),
            detail: view.viewed().cloned(),
        })
    }
}
