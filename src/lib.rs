pub mod binding;
pub mod domain;
pub mod pagination;
pub mod routing;
pub mod transport;
pub mod view;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod sessions;

#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::main::{change_page, redirect_to_index, show_index, submit_search};
#[cfg(feature = "server")]
use crate::sessions::SessionRegistry;
#[cfg(feature = "server")]
use crate::transport::SearchTransport;
#[cfg(feature = "server")]
use crate::transport::http::HttpSearchTransport;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let transport = HttpSearchTransport::with_base_url(&server_config.search_api_url)
        .map_err(|e| std::io::Error::other(format!("Failed to build search client: {e}")))?;
    let transport: Arc<dyn SearchTransport> = Arc::new(transport);

    let registry = web::Data::new(SessionRegistry::new(
        transport,
        server_config.max_sessions,
    ));

    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving search results from {} on {}:{}",
        server_config.search_api_url,
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(show_index)
            .service(submit_search)
            .service(change_page)
            .default_service(web::to(redirect_to_index))
            .app_data(web::Data::new(tera.clone()))
            .app_data(registry.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
