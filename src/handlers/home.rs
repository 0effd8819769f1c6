use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::controller;
use crate::errors::{AppError, render};
use crate::models::meeting::Meeting;
use crate::models::toner::Toner;
use crate::store::Backend;
use crate::templates_structs::{HomeTemplate, ModuleCard, PageContext, PageKind};

fn card<K: PageKind>(records: &[K::Record], description: &'static str) -> ModuleCard {
    ModuleCard {
        title: K::HEADING,
        description,
        href: K::PATH,
        total: records.len(),
        pending: records
            .iter()
            .filter(|r| K::status(r) == K::INITIAL_STATUS)
            .count(),
    }
}

/// GET /: landing page with a tile per workflow.
pub async fn index(
    backend: web::Data<Backend>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/")?;
    let meetings = controller::list::<Meeting, Backend>(backend.get_ref()).await?;
    let toners = controller::list::<Toner, Backend>(backend.get_ref()).await?;

    let cards = vec![
        card::<Meeting>(&meetings, "Book a meeting with the Permanent Secretary's office."),
        card::<Toner>(&toners, "Request printer toner for your division."),
    ];
    render(HomeTemplate { ctx, cards })
}

