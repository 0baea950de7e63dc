use super::*;

#[test]
fn status_message_is_shown_verbatim() {
    let err = ApiError::Status { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(login_failure_message(&err), "Invalid credentials");
}

#[test]
fn blank_message_falls_back() {
    let err = ApiError::Network(String::new());
    assert_eq!(login_failure_message(&err), "Invalid username or password");
}
