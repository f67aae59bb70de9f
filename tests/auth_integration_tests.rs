use bigbrain::core::auth::{ApiAuth, AuthError, AuthProvider};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_logout_posts_bearer_token_and_clears_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/logout"))
        .and(header("authorization", "Bearer token-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = ApiAuth::new(mock_server.uri(), Some("token-abc".to_string()));
    assert!(auth.is_authenticated());

    let result = auth.logout().await;
    assert!(result.is_ok());
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_logout_propagates_server_rejection_but_still_signs_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/logout"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(serde_json::json!({"error": "Invalid token"})),
        )
        .mount(&mock_server)
        .await;

    let auth = ApiAuth::new(mock_server.uri(), Some("stale".to_string()));
    let result = auth.logout().await;

    match result {
        Err(AuthError::Api { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "Invalid token");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    // The local session ends regardless of the server's answer
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_logout_rejection_without_json_body_uses_raw_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let auth = ApiAuth::new(mock_server.uri(), Some("tok".to_string()));
    match auth.logout().await {
        Err(AuthError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_logout_without_session_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let auth = ApiAuth::new(mock_server.uri(), None);
    assert!(auth.logout().await.is_ok());
}

#[tokio::test]
async fn test_logout_network_failure_is_a_network_error() {
    // Nothing is listening on this port
    let auth = ApiAuth::new(
        "http://127.0.0.1:9".to_string(),
        Some("tok".to_string()),
    );
    match auth.logout().await {
        Err(AuthError::Network(_)) => {}
        other => panic!("expected Network error, got {:?}", other),
    }
}
