//! Shared test infrastructure for integration tests.
//!
//! - `TestDb::new()`: PostgreSQL in an isolated, migrated schema. Returns
//!   `None` when `DATABASE_URL` is not set so store tests skip cleanly.
//! - `portal_app!(backend)`: the full HTTP app with a cookie session.

#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use rand::Rng;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use ministry_portal::db::MIGRATOR;

pub const SESSION_COOKIE: &str = "id";

// ============================================================================
// DATABASE SETUP
// ============================================================================

pub struct TestDb {
    pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    pub async fn new() -> Option<Self> {
        dotenvy::dotenv().ok();
        let Some(url) = std::env::var("DATABASE_URL").ok().filter(|v| !v.trim().is_empty()) else {
            eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
            return None;
        };

        let schema = format!("portal_test_{}", hex::encode(rand::rng().random::<[u8; 6]>()));
        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("Failed to connect to test database");
        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&admin)
            .await
            .expect("Failed to create test schema");

        let search_path = format!("SET search_path TO {schema}");
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .after_connect(move |conn, _meta| {
                let sql = search_path.clone();
                Box::pin(async move {
                    sqlx::query(&sql).execute(&mut *conn).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("Failed to connect test pool");
        MIGRATOR.run(&pool).await.expect("Failed to run migrations");

        Some(Self { pool, admin, schema })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("Failed to drop test schema");
    }
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

/// Build and start the app around a `web::Data<Backend>`.
#[allow(unused_macros)]
macro_rules! portal_app {
    ($backend:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::from(&[7u8; 64][..]),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data($backend.clone())
                .app_data(actix_web::web::Data::new(
                    ministry_portal::config::AppConfig::from_lookup(|_| None),
                ))
                .configure(ministry_portal::handlers::configure)
                .default_service(actix_web::web::to(ministry_portal::handlers::not_found)),
        )
        .await
    };
}

#[allow(unused_imports)]
pub(crate) use portal_app;

/// The session cookie set by a response, if the session changed.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

/// Pull the CSRF token out of a rendered page.
pub fn csrf_token(html: &str) -> String {
    let re = regex::Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page has no CSRF token")
}
