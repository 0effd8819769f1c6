use askama::Template;

use super::PageContext;

/// A module tile on the landing page.
pub struct ModuleCard {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub total: usize,
    pub pending: usize,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub cards: Vec<ModuleCard>,
}
