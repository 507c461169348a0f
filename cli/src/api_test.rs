use std::sync::Arc;

use flows::store::MemoryStore;

use super::*;

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, SessionTokens::new(Arc::new(MemoryStore::new()))).unwrap()
}

#[test]
fn base_url_drops_trailing_slash() {
    assert_eq!(client("http://localhost:8000/").base_url(), "http://localhost:8000");
}

#[test]
fn decode_failure_is_a_decode_error() {
    let err = decode::<VersionResponse>("{\"nope\":1}").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_not_ready() {
    let api = client("http://127.0.0.1:1");
    assert!(!api.check_ready().await);
    assert!(matches!(api.fetch_version().await, Err(ApiError::Transport(_))));
}
