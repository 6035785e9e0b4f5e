use super::*;

#[test]
fn lifetime_starts_alive() {
    assert!(Lifetime::new().is_alive());
}

#[test]
fn end_is_visible_through_clones() {
    let lifetime = Lifetime::new();
    let task_copy = lifetime.clone();
    lifetime.end();
    assert!(!task_copy.is_alive());
}

#[test]
fn run_if_alive_skips_after_end() {
    let lifetime = Lifetime::new();
    let mut ran = 0;
    assert!(lifetime.run_if_alive(|| ran += 1));
    lifetime.end();
    assert!(!lifetime.run_if_alive(|| ran += 1));
    assert_eq!(ran, 1);
}
