use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("A", "first", ToastVariant::Default);
    let b = state.push("B", "second", ToastVariant::Destructive);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].variant, ToastVariant::Destructive);
}

#[test]
fn push_evicts_oldest_past_limit() {
    let mut state = ToastState::default();
    let first = state.push("t0", "", ToastVariant::Default);
    for i in 1..=TOAST_LIMIT {
        state.push(format!("t{i}"), "", ToastVariant::Default);
    }
    assert_eq!(state.toasts.len(), TOAST_LIMIT);
    assert!(state.toasts.iter().all(|t| t.id != first));
}

#[test]
fn dismiss_is_idempotent() {
    let mut state = ToastState::default();
    let id = state.push("Saved", "", ToastVariant::Default);
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.toasts.is_empty());
}
