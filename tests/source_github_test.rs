use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::json;
use vitrine::source::{github::GithubSource, ProjectSource as _, SourceError};

async fn repos_list() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        {
            "name": "foo",
            "description": "showcase",
            "html_url": "https://example.com/foo",
            "created_at": "2020-01-01T00:00:00Z"
        }
    ]))
}

async fn repos_object() -> HttpResponse {
    HttpResponse::Ok().json(json!({"message": "rate limited"}))
}

async fn repos_error() -> HttpResponse {
    HttpResponse::InternalServerError().finish()
}

#[actix_web::test]
async fn test_fetch_when_list_body_expect_parsed_records() {
    let server = HttpServer::new(|| {
        App::new().route("/users/test/repos", web::get().to(repos_list))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let source = GithubSource::with_api_base("test", &format!("http://{addr}")).unwrap();
    let records = source.fetch_projects().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "foo");
    assert_eq!(records[0].description.as_deref(), Some("showcase"));
    assert_eq!(records[0].html_url, "https://example.com/foo");

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_fetch_when_body_not_a_list_expect_malformed() {
    let server = HttpServer::new(|| {
        App::new().route("/users/test/repos", web::get().to(repos_object))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let source = GithubSource::with_api_base("test", &format!("http://{addr}")).unwrap();
    let actual = source.fetch_projects().await;
    assert!(matches!(actual, Err(SourceError::Malformed(_))));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_fetch_when_server_error_expect_unavailable() {
    let server = HttpServer::new(|| {
        App::new().route("/users/test/repos", web::get().to(repos_error))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let source = GithubSource::with_api_base("test", &format!("http://{addr}")).unwrap();
    let actual = source.fetch_projects().await;
    assert!(matches!(actual, Err(SourceError::Unavailable(_))));

    handle.stop(true).await;
}
