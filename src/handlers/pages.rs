//! Server-rendered list pages. Each request rebuilds a [`ViewState`] from
//! the store and the query string, so links and form posts drive the same
//! messages an interactive client would send.

use actix_session::Session;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::session::{csrf, set_flash, set_flash_error};
use crate::store::{Backend, ResourceStore};
use crate::templates_structs::{PageContext, PageKind};
use crate::view::{self, Command, FormState, Msg, StatusFilter, ViewState};

/// `GET {PATH}`, `POST {PATH}`, `POST {PATH}/{id}`, `POST {PATH}/{id}/delete`.
pub fn routes<K>(cfg: &mut web::ServiceConfig)
where
    K: PageKind + 'static,
    Backend: ResourceStore<K>,
{
    cfg.route(K::PATH, web::get().to(index::<K>))
        .route(K::PATH, web::post().to(create::<K>))
        .route(&format!("{}/{{id}}", K::PATH), web::post().to(update::<K>))
        .route(&format!("{}/{{id}}/delete", K::PATH), web::post().to(delete::<K>));
}

/// List page query string. Ids that do not parse are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub new: Option<String>,
    pub edit: Option<String>,
    pub view: Option<String>,
    pub delete: Option<String>,
}

fn parse_id(raw: Option<&String>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Deserialize)]
pub struct FormSubmission<D> {
    pub csrf_token: String,
    #[serde(flatten)]
    pub draft: D,
}

#[derive(Debug, Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// Fetch into a fresh view. A failed fetch leaves the error on the view so
/// the page still renders with a banner.
async fn load<K>(backend: &Backend) -> ViewState<K>
where
    K: PageKind,
    Backend: ResourceStore<K>,
{
    let mut view = ViewState::<K>::new();
    if let Err(e) = view::run(backend, &mut view, Some(Command::Fetch)).await {
        log::debug!("Rendering {} page without records: {}", K::PLURAL, e);
    }
    view
}

/// GET {PATH}
pub async fn index<K>(
    backend: web::Data<Backend>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError>
where
    K: PageKind,
    Backend: ResourceStore<K>,
{
    let query = query.into_inner();
    let ctx = PageContext::build(&session, &config, K::PATH)?;
    let mut view = load::<K>(backend.get_ref()).await;

    if let Some(q) = query.q {
        view.update(Msg::Search(q));
    }
    if let Some(status) = query.status.as_deref() {
        view.update(Msg::FilterStatus(StatusFilter::parse(status)));
    }
    if query.new.is_some() {
        view.update(Msg::OpenNew);
    }
    if let Some(id) = parse_id(query.edit.as_ref()) {
        view.update(Msg::Edit(id));
    }
    if let Some(id) = parse_id(query.view.as_ref()) {
        view.update(Msg::View(id));
    }
    if let Some(id) = parse_id(query.delete.as_ref()) {
        view.update(Msg::RequestDelete(id));
    }

    K::render_page(ctx, &view)
}

/// POST {PATH}: new request from the form.
pub async fn create<K>(
    backend: web::Data<Backend>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<FormSubmission<K::Draft>>,
) -> Result<HttpResponse, AppError>
where
    K: PageKind,
    Backend: ResourceStore<K>,
{
    let form = form.into_inner();
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut view = ViewState::<K>::new();
    view.update(Msg::OpenNew);
    let command = view.update(Msg::Submit(form.draft));
    finish(backend.get_ref(), &config, &session, view, command).await
}

/// POST {PATH}/{id}: edit form submission.
pub async fn update<K>(
    backend: web::Data<Backend>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<FormSubmission<K::Draft>>,
) -> Result<HttpResponse, AppError>
where
    K: PageKind,
    Backend: ResourceStore<K>,
{
    let form = form.into_inner();
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut view = ViewState::<K>::new();
    view.form = FormState::Open {
        draft: form.draft.clone(),
        editing: Some(path.into_inner()),
    };
    let command = view.update(Msg::Submit(form.draft));
    finish(backend.get_ref(), &config, &session, view, command).await
}

/// POST {PATH}/{id}/delete: the confirmed half of the two-phase delete.
pub async fn delete<K>(
    backend: web::Data<Backend>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError>
where
    K: PageKind,
    Backend: ResourceStore<K>,
{
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut view = ViewState::<K>::new();
    view.update(Msg::RequestDelete(path.into_inner()));
    let command = view.update(Msg::ConfirmDelete);
    finish(backend.get_ref(), &config, &session, view, command).await
}

/// Run the view's command and redirect back to the list with a toast.
/// A draft that failed validation is re-rendered with its error instead.
async fn finish<K>(
    backend: &Backend,
    config: &AppConfig,
    session: &Session,
    mut view: ViewState<K>,
    command: Option<Command<K>>,
) -> Result<HttpResponse, AppError>
where
    K: PageKind,
    Backend: ResourceStore<K>,
{
    let Some(command) = command else {
        if let Err(e) = view::run(backend, &mut view, Some(Command::Fetch)).await {
            log::debug!("Re-rendering {} form without records: {}", K::SINGULAR, e);
        }
        let ctx = PageContext::build(session, config, K::PATH)?;
        return K::render_page(ctx, &view);
    };

    match view::run(backend, &mut view, Some(command)).await {
        Ok(()) => {
            if let Some(toast) = &view.toast {
                set_flash(session, toast)?;
            }
        }
        Err(e) => set_flash_error(session, &e.to_string())?,
    }
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, K::PATH))
        .finish())
}
