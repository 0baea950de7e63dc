use super::*;

#[test]
fn ids_increase_and_dismiss_removes_one() {
    let mut state = NoticeState::default();
    let first = state.success("Saved");
    let second = state.success("Deleted");
    assert!(second > first);
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "Deleted");
}

#[test]
fn errors_use_message_or_fallback() {
    let mut state = NoticeState::default();
    state.error("load", &ApiError::Status { status: 500, message: "boom".to_owned() }, "Failed");
    state.error("load", &ApiError::Network(" ".to_owned()), "Failed to load collections");
    let messages: Vec<_> = state.items.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, ["boom", "Failed to load collections"]);
    assert!(state.items.iter().all(|n| n.kind == NoticeKind::Error));
}

#[test]
fn cancellation_is_silent() {
    let mut state = NoticeState::default();
    assert_eq!(state.error("query", &ApiError::Cancelled, "Failed"), None);
    assert!(state.items.is_empty());
}

#[test]
fn queue_is_bounded() {
    let mut state = NoticeState::default();
    for n in 0..(MAX_NOTICES + 2) {
        state.success(format!("n{n}"));
    }
    assert_eq!(state.items.len(), MAX_NOTICES);
    assert_eq!(state.items[0].message, "n2");
}
