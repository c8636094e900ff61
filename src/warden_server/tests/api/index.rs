use warden_adapters::AllowedOrigins;

use crate::helpers::TestApp;

#[tokio::test]
async fn index_returns_welcome_message() {
    let app = TestApp::new(AllowedOrigins::default()).await;

    let response = app.get_index().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Bienvenue" }));
}

#[tokio::test]
async fn cors_headers_only_for_allowed_origins() {
    let app = TestApp::new(AllowedOrigins::new(vec![
        "http://allowed.example".to_string(),
    ]))
    .await;

    let allowed = app.get_index_from("http://allowed.example").await;
    assert_eq!(
        allowed
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://allowed.example")
    );

    let denied = app.get_index_from("http://other.example").await;
    assert_eq!(denied.status().as_u16(), 200);
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}
