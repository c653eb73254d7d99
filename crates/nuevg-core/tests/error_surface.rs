use nuevg_core::errors::{ErrorInfo, EvgError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("probe", "14")
        .with_context("reason", "example")
}

#[test]
fn generator_error_surface() {
    let err = EvgError::Generator(sample_info("unrecognized-probe", "cannot handle probe"));
    assert_eq!(err.code(), "unrecognized-probe");
    assert!(err.info().context.contains_key("probe"));
}

#[test]
fn selector_error_surface() {
    let err = EvgError::Selector(sample_info("empty-aggregate", "nothing to select"));
    assert_eq!(err.info().code, "empty-aggregate");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn config_error_surface() {
    let err = EvgError::Config(
        ErrorInfo::new("conflicting-current-flags", "both set").with_hint("pick one"),
    );
    assert_eq!(err.info().hint.as_deref(), Some("pick one"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = EvgError::Config(
        ErrorInfo::new("C001", "bad flags")
            .with_context("is-CC", "true")
            .with_hint("disable one"),
    );
    let text = err.to_string();
    assert!(text.starts_with("config error: bad flags (code: C001)"));
    assert!(text.contains("is-CC=true"));
    assert!(text.ends_with("hint: disable one"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = EvgError::Selector(ErrorInfo::new("null-aggregate", "missing map"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Selector");
    assert_eq!(json["detail"]["code"], "null-aggregate");
}
