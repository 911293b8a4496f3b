use events_http::{DEFAULT_LIMIT, MAX_LIMIT, resolve_limit};

#[test]
fn missing_limit_defaults_to_200() {
    assert_eq!(resolve_limit(None).unwrap(), DEFAULT_LIMIT);
    assert_eq!(DEFAULT_LIMIT, 200);
}

#[test]
fn limits_inside_the_range_pass_through_unmodified() {
    assert_eq!(resolve_limit(Some(1)).unwrap(), 1);
    assert_eq!(resolve_limit(Some(42)).unwrap(), 42);
    assert_eq!(resolve_limit(Some(MAX_LIMIT)).unwrap(), 1000);
}

#[test]
fn zero_and_negative_limits_are_rejected() {
    assert!(resolve_limit(Some(0)).is_err());
    assert!(resolve_limit(Some(-5)).is_err());
}

#[test]
fn limits_above_the_maximum_are_rejected() {
    assert!(resolve_limit(Some(1001)).is_err());
}
