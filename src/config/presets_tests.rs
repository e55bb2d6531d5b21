use super::*;
use crate::config::Config;
use crate::rules::Phase;

fn load(name: &str) -> Config {
    toml::from_str(preset_source(name).unwrap()).unwrap()
}

#[test]
fn all_presets_parse_and_validate() {
    for name in AVAILABLE_PRESETS {
        let config = load(name);
        crate::config::validate_config_semantics(&config)
            .unwrap_or_else(|e| panic!("preset '{name}' is invalid: {e}"));
    }
}

#[test]
fn default_preset_is_available() {
    assert!(AVAILABLE_PRESETS.contains(&DEFAULT_PRESET));
}

#[test]
fn web_worker_preset_shape() {
    let rules = load("web-worker-table").to_rule_set().unwrap();
    assert_eq!(rules.in_phase(Phase::Existence).count(), 9);
    assert_eq!(rules.in_phase(Phase::Content).count(), 15);
    assert_eq!(rules.in_phase(Phase::Quality).count(), 4);
    assert_eq!(rules.in_phase(Phase::Features).count(), 6);
}

#[test]
fn web_worker_preset_keeps_quoted_markers() {
    let config = load("web-worker-table");
    assert_eq!(config.content[0].marker, "<div class=\"table-wrapper\"");
}

#[test]
fn react_preset_declares_dependencies() {
    let rules = load("react-hooks-demo").to_rule_set().unwrap();
    assert_eq!(rules.in_phase(Phase::Dependencies).count(), 2);
}

#[test]
fn unknown_preset_is_error() {
    assert!(preset_source("rust-strict").is_err());
}
