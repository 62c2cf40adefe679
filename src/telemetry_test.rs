use super::*;

#[test]
fn env_wins_over_config() {
    assert_eq!(directive(Some("debug".into()), Some("info")), "debug");
}

#[test]
fn config_used_when_env_unset() {
    assert_eq!(directive(None, Some("info")), "info");
}

#[test]
fn blank_env_is_ignored() {
    assert_eq!(directive(Some("  ".into()), Some("error")), "error");
}

#[test]
fn defaults_to_warn() {
    assert_eq!(directive(None, None), "warn");
}

#[test]
fn per_module_directives_parse() {
    assert!(EnvFilter::try_new(directive(None, Some("ppa_scorecard=debug,warn"))).is_ok());
}
