use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, post, web};
use tera::{Context, Tera};

use crate::forms::search::{PageForm, SearchForm};
use crate::routes::{redirect, render_template};
use crate::routing::{INDEX_PATH, RouteParams};
use crate::services::search as search_service;
use crate::sessions::{SessionRegistry, session_view_id};

#[get("/")]
/// Result view for the `query` and `page` parameters of the address bar.
pub async fn show_index(
    request: HttpRequest,
    session: Session,
    registry: web::Data<SessionRegistry>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = RouteParams::from_query_string(request.query_string());
    let binding = registry.binding(session_view_id(&session));
    let mut binding = binding.lock().await;

    let data = search_service::load_index_page(&mut binding, params).await;

    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("page", &data);

    render_template(&tera, "main/index.html", &context)
}

#[post("/search")]
pub async fn submit_search(
    session: Session,
    registry: web::Data<SessionRegistry>,
    web::Form(form): web::Form<SearchForm>,
) -> impl Responder {
    let binding = registry.binding(session_view_id(&session));
    let mut binding = binding.lock().await;

    let params = search_service::submit_search(&mut binding, form);
    redirect(&params.href())
}

#[post("/page")]
pub async fn change_page(
    session: Session,
    registry: web::Data<SessionRegistry>,
    web::Form(form): web::Form<PageForm>,
) -> impl Responder {
    let binding = registry.binding(session_view_id(&session));
    let mut binding = binding.lock().await;

    let params = search_service::change_page(&mut binding, &form);
    redirect(&params.href())
}

/// Wildcard route: anything but the result view goes back to it, keeping the
/// query string.
pub async fn redirect_to_index(request: HttpRequest) -> impl Responder {
    let query_string = request.query_string();
    log::debug!("Redirecting {} to {INDEX_PATH}", request.path());

    if query_string.is_empty() {
        redirect(INDEX_PATH)
    } else {
        redirect(&format!("{INDEX_PATH}?{query_string}"))
    }
}
