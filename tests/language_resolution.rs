//! 언어 결정 체인(CLI 플래그 → 설정 → 시스템 로케일) 회귀 테스트.
//! 시스템 로케일 단계는 실행 환경에 좌우되므로 앞 단계에서 끝나는 경우만 다룬다.
use aura_display::i18n::{resolve_language, Language};

#[test]
fn cli_flag_beats_config() {
    assert_eq!(resolve_language(Some("fr"), Some("de")), Language::Fr);
}

#[test]
fn config_used_when_cli_missing() {
    assert_eq!(resolve_language(None, Some("tr")), Language::Tr);
}

#[test]
fn unknown_cli_value_falls_through_to_config() {
    assert_eq!(resolve_language(Some("xx"), Some("sv")), Language::Sv);
    assert_eq!(resolve_language(Some("auto"), Some("it")), Language::It);
}

#[test]
fn full_locale_strings_are_accepted() {
    assert_eq!(resolve_language(Some("es-MX"), None), Language::Es);
    assert_eq!(resolve_language(None, Some("de_DE.UTF-8")), Language::De);
}
