use super::*;

#[test]
fn methods_map_one_to_one() {
    assert_eq!(method(Method::Get), reqwest::Method::GET);
    assert_eq!(method(Method::Post), reqwest::Method::POST);
    assert_eq!(method(Method::Put), reqwest::Method::PUT);
    assert_eq!(method(Method::Delete), reqwest::Method::DELETE);
}

#[test]
fn transport_builds() {
    assert!(ReqwestTransport::new().is_ok());
}
