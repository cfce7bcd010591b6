//! Integration tests for configuration feeding the adder

use adder::{Adder, AdderConfig, AdderError, OVERFLOW_ENV_VAR, OverflowPolicy};
use std::collections::HashMap;

fn config_from(vars: &[(&str, &str)]) -> Result<AdderConfig, AdderError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    AdderConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_config_selects_saturating_adder() {
    let config = config_from(&[(OVERFLOW_ENV_VAR, "saturating")]).unwrap();
    let adder = Adder::from_config(&config);

    let mut message = String::new();
    adder
        .add(i32::MAX, i32::MAX, |result| message = result.to_string())
        .unwrap();
    assert_eq!(message, "Result: 2147483647");
}

#[test]
fn test_unrelated_variables_ignored() {
    let config = config_from(&[("ADDER_OTHER", "checked")]).unwrap();
    assert_eq!(config.overflow, OverflowPolicy::Wrapping);
}

#[test]
fn test_invalid_policy_reported() {
    let err = config_from(&[(OVERFLOW_ENV_VAR, "nope")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown overflow policy 'nope' (expected wrapping, saturating or checked)"
    );
}
