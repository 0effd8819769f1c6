use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use ministry_portal::config::AppConfig;
use ministry_portal::store::{Backend, seed};
use ministry_portal::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    let backend = match &config.database_url {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .map_err(std::io::Error::other)?;
            db::run_migrations(&pool)
                .await
                .map_err(std::io::Error::other)?;
            Backend::Postgres(pool)
        }
        None => {
            log::warn!("No DATABASE_URL set: using in-memory store (data lost on restart)");
            Backend::memory()
        }
    };

    if config.seed_demo {
        seed::seed_toner_requests(&backend)
            .await
            .map_err(std::io::Error::other)?;
    }

    // Session key: load from SESSION_KEY for sessions that survive restarts
    let secret_key = match &config.session_key {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+): generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set: generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = config.bind_addr.clone();
    log::info!("Starting server at http://{} ({} store)", bind_addr, backend.name());

    let backend = web::Data::new(backend);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(backend.clone())
            .app_data(config.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
