use nuevg_core::EvgError;
use nuevg_gen::{CurrentType, GeneratorConfig};

#[test]
fn yaml_flags_select_current() {
    let cc = GeneratorConfig::from_yaml_str("is-CC: true\n").unwrap();
    assert_eq!(cc, GeneratorConfig::charged_current());
    assert_eq!(cc.current().unwrap(), Some(CurrentType::Charged));

    let nc = GeneratorConfig::from_yaml_str("is-NC: true\nis-CC: false\n").unwrap();
    assert_eq!(nc.current().unwrap(), Some(CurrentType::Neutral));
}

#[test]
fn missing_flags_default_to_none() {
    let config = GeneratorConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config, GeneratorConfig::default());
    assert_eq!(config.current().unwrap(), None);
}

#[test]
fn both_flags_are_rejected() {
    let config = GeneratorConfig {
        is_cc: true,
        is_nc: true,
    };
    match config.current() {
        Err(EvgError::Config(info)) => {
            assert_eq!(info.code, "conflicting-current-flags");
            assert!(info.hint.is_some());
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let err = GeneratorConfig::from_yaml_str("is-CC: [not, a, bool]").unwrap_err();
    assert_eq!(err.code(), "config-parse");
}

#[test]
fn config_serializes_with_dashed_keys() {
    let json = serde_json::to_value(GeneratorConfig::neutral_current()).unwrap();
    assert_eq!(json["is-CC"], false);
    assert_eq!(json["is-NC"], true);
}
