mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(upstream: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html; charset=utf-8"))
        .mount(upstream)
        .await;
}

#[tokio::test]
async fn test_preview_title_and_og_image() {
    let upstream = MockServer::start().await;
    mount_page(
        &upstream,
        "/page",
        common::html_page(
            r#"<title>Example</title><meta property="og:image" content="https://example.com/img.png">"#,
        ),
    )
    .await;

    let server = common::create_test_server(common::create_test_state(&upstream));

    let response = server
        .get("/api/preview")
        .add_query_param("url", format!("{}/page", upstream.uri()))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "title": "Example",
        "image": "https://example.com/img.png"
    }));
}

#[tokio::test]
async fn test_preview_missing_url() {
    let upstream = MockServer::start().await;
    let server = common::create_test_server(common::create_test_state(&upstream));

    let response = server.get("/api/preview").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing URL" }));

    let response = server.get("/api/preview").add_query_param("url", "").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing URL" }));

    let response = server.get("/api/preview").add_query_param("url", "   ").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preview_duplicate_url_param_is_json_bad_request() {
    let upstream = MockServer::start().await;
    let server = common::create_test_server(common::create_test_state(&upstream));

    let response = server.get("/api/preview?url=a&url=b").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("duplicate field"), "unexpected error: {error}");
}

#[tokio::test]
async fn test_preview_upstream_error_degrades_to_url_title() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let server = common::create_test_server(common::create_test_state(&upstream));
    let url = format!("{}/broken", upstream.uri());

    let response = server.get("/api/preview").add_query_param("url", &url).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "title": url, "image": "" }));
}

#[tokio::test]
async fn test_preview_unsupported_scheme_degrades() {
    let upstream = MockServer::start().await;
    let server = common::create_test_server(common::create_test_state(&upstream));

    let response = server
        .get("/api/preview")
        .add_query_param("url", "ftp://files.example.com/readme")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "title": "ftp://files.example.com/readme", "image": "" }));
}

#[tokio::test]
async fn test_preview_og_title_and_relative_icon() {
    let upstream = MockServer::start().await;
    mount_page(
        &upstream,
        "/blog/post",
        common::html_page(
            r#"<meta property="og:title" content="Volcano hike"><link rel="shortcut icon" href="/favicon.ico">"#,
        ),
    )
    .await;

    let server = common::create_test_server(common::create_test_state(&upstream));

    let response = server
        .get("/api/preview")
        .add_query_param("url", format!("{}/blog/post", upstream.uri()))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "title": "Volcano hike",
        "image": format!("{}/favicon.ico", upstream.uri())
    }));
}

#[tokio::test]
async fn test_preview_no_metadata_uses_trimmed_url() {
    let upstream = MockServer::start().await;
    mount_page(&upstream, "/bare", common::html_page("")).await;

    let server = common::create_test_server(common::create_test_state(&upstream));
    let url = format!("{}/bare", upstream.uri());

    let response = server
        .get("/api/preview")
        .add_query_param("url", format!("  {url}  "))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["title"], url);
    assert_eq!(body["image"], "");
}

#[tokio::test]
async fn test_preview_follows_redirects_for_relative_images() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("Location", format!("{}/new/article", upstream.uri())),
        )
        .mount(&upstream)
        .await;
    mount_page(
        &upstream,
        "/new/article",
        common::html_page(r#"<title>Moved</title><meta property="og:image" content="cover.jpg">"#),
    )
    .await;

    let server = common::create_test_server(common::create_test_state(&upstream));

    let response = server
        .get("/api/preview")
        .add_query_param("url", format!("{}/old", upstream.uri()))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "title": "Moved",
        "image": format!("{}/new/cover.jpg", upstream.uri())
    }));
}

#[tokio::test]
async fn test_preview_trailing_slash_is_normalized() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let upstream = MockServer::start().await;
    let app = link_preview::routes::app_router(
        common::create_test_state(&upstream),
        &["*".to_string()],
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/preview/?url=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
