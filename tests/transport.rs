use std::net::SocketAddr;

use actix_web::{App, HttpResponse, HttpServer, web};
use serde::Deserialize;
use serde_json::json;

use help_search::transport::http::HttpSearchTransport;
use help_search::transport::{SearchError, SearchTransport};

#[derive(Deserialize)]
struct ApiQuery {
    query: String,
}

async fn search_api(params: web::Query<ApiQuery>) -> HttpResponse {
    match params.query.as_str() {
        "boom" => HttpResponse::InternalServerError().finish(),
        "garbage" => HttpResponse::Ok()
            .content_type("application/json")
            .body("[1, 2, 3]"),
        "empty" => HttpResponse::Ok().json(json!({ "total": 0 })),
        query => HttpResponse::Ok().json(json!({
            "results": [
                { "title": format!("{query} one") },
                { "title": format!("{query} two") },
            ]
        })),
    }
}

/// Starts a local stand-in for the search API and returns its base URL.
fn start_search_api() -> String {
    let server = HttpServer::new(|| App::new().route("/search", web::get().to(search_api)))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind local search api");
    let addr: SocketAddr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/search")
}

#[actix_web::test]
async fn sends_url_encoded_query_and_decodes_results() {
    let transport = HttpSearchTransport::with_base_url(start_search_api()).unwrap();

    let response = transport.search("reset & restart").await.unwrap();

    assert_eq!(response.results.len(), 2);
    assert_eq!(
        response.results[0].field("title"),
        Some(&json!("reset & restart one"))
    );
}

#[actix_web::test]
async fn missing_results_field_is_an_empty_result_set() {
    let transport = HttpSearchTransport::with_base_url(start_search_api()).unwrap();

    let response = transport.search("empty").await.unwrap();

    assert!(response.results.is_empty());
}

#[actix_web::test]
async fn non_success_status_is_a_failed_search() {
    let transport = HttpSearchTransport::with_base_url(start_search_api()).unwrap();

    let err = transport.search("boom").await.unwrap_err();

    assert!(matches!(err, SearchError::Status(500)));
}

#[actix_web::test]
async fn unexpected_body_is_a_failed_search() {
    let transport = HttpSearchTransport::with_base_url(start_search_api()).unwrap();

    let err = transport.search("garbage").await.unwrap_err();

    assert!(matches!(err, SearchError::InvalidResponse(_)));
}

#[actix_web::test]
async fn unreachable_api_is_a_failed_search() {
    let transport = HttpSearchTransport::with_base_url("http://127.0.0.1:1/search").unwrap();

    let err = transport.search("anything").await.unwrap_err();

    assert!(matches!(err, SearchError::Network(_)));
}
