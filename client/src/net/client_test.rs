#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;

use super::*;

#[test]
fn config_has_base_url_and_deadline() {
    let config = config();
    assert!(!config.base_url.is_empty());
    assert!(!config.base_url.ends_with('/'));
}

#[test]
fn server_side_client_is_anonymous() {
    let api = api_client();
    assert!(!api.auth().is_authenticated());
    assert!(api.auth().current_user().is_none());
}

#[test]
fn server_side_requests_fail_as_network_errors() {
    let api = api_client();
    let err = block_on(api.collections().get("c1")).unwrap_err();
    assert!(matches!(err, api::ApiError::Network(_)));
}
