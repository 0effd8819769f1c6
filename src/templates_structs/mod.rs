// Template context structures for Askama templates, organized by page.

use actix_session::Session;
use actix_web::HttpResponse;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::ResourceKind;
use crate::session::{csrf, take_flash, take_flash_error};
use crate::view::ViewState;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub flash_error: Option<String>,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig, current_path: &str) -> Result<Self, AppError> {
        let csrf_token = csrf::get_or_create_token(session)?;
        Ok(Self {
            app_name: config.app_name.clone(),
            flash: take_flash(session),
            flash_error: take_flash_error(session),
            csrf_token,
            current_path: current_path.to_string(),
        })
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }
}

/// Resource kinds with an HTML list page.
pub trait PageKind: ResourceKind {
    /// Mount point of the list page, e.g. `/meetings`.
    const PATH: &'static str;
    const HEADING: &'static str;

    /// Options for the category select (department, division), marking the
    /// one currently in `draft`.
    fn choices(draft: &Self::Draft) -> Vec<SelectOption>;
    fn draft_status(draft: &Self::Draft) -> &str;
    fn render_page(ctx: PageContext, view: &ViewState<Self>) -> Result<HttpResponse, AppError>;
}

mod api;
mod common;
mod home;
mod meeting;
mod toner;

pub use api::*;
pub use common::*;
pub use home::*;
pub use meeting::*;
pub use toner::*;
