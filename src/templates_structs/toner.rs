use actix_web::HttpResponse;
use askama::Template;

use crate::errors::{AppError, render};
use crate::models::toner::{Division, Toner, TonerDraft, TonerRequest};
use crate::view::ViewState;

use super::{FormView, ListChrome, PageContext, PageKind, Row, SelectOption, rows, select_options};

#[derive(Template)]
#[template(path = "toners/list.html")]
pub struct TonersPageTemplate {
    pub ctx: PageContext,
    pub list: ListChrome,
    pub rows: Vec<Row<TonerRequest>>,
    pub form: Option<FormView<TonerDraft>>,
    pub detail: Option<TonerRequest>,
}

impl PageKind for Toner {
    const PATH: &'static str = "/toners";
    const HEADING: &'static str = "Toner Requests";

    fn choices(draft: &TonerDraft) -> Vec<SelectOption> {
        select_options::<Division>(&draft.division)
    }

    fn draft_status(draft: &TonerDraft) -> &str {
        &draft.status
    }

    fn render_page(ctx: PageContext, view: &ViewState<Self>) -> Result<HttpResponse, AppError> {
        render(TonersPageTemplate {
            ctx,
            list: ListChrome::of(view),
            rows: rows(view),
            form: FormView::of(view),
            detail: view.viewed().cloned(),
        })
    }
}
