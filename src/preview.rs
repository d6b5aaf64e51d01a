//! 번역 미리보기. 디스플레이가 쓰는 세 화면을 평문 목업으로 렌더링하고,
//! 영어 원문이 그대로 남아 있는 필드를 찾아 번역 누락을 보고한다.

use std::fmt::Write;

use crate::i18n::{self, Language};

/// 설정 화면 목업을 만든다.
pub fn settings_screen(language: Language) -> String {
    let s = i18n::get_strings(language);
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", s.settings_title);
    let _ = writeln!(out, "{} ####----", s.brightness_label);
    let _ = writeln!(out, "{} {}", s.location_label, s.city_placeholder);
    let _ = writeln!(out, "{} [ ]   {} [ ]", s.use_fahrenheit, s.use_24hr);
    let _ = writeln!(out, "{} [ ]", s.use_night_mode);
    let _ = writeln!(out, "{} ##------", s.night_brightness_label);
    let _ = writeln!(out, "{} {}", s.language_label, language.native_name());
    let _ = writeln!(out, "[{}] [{}] [{}]", s.save, s.cancel, s.close);
    let _ = writeln!(out, "[{}] [{}]", s.change_location, s.reset_wifi);
    out
}

/// 위치 검색 화면 목업을 만든다.
pub fn location_screen(language: Language) -> String {
    let s = i18n::get_strings(language);
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", s.location_btn);
    let _ = writeln!(out, "{} {}", s.city_label, s.city_placeholder);
    let _ = writeln!(out, "{}", s.search_results);
    let _ = writeln!(out, "[{}] [{}]", s.save, s.cancel);
    out
}

/// Wi-Fi 설정 안내 화면과 초기화 확인 대화상자 목업을 만든다.
pub fn wifi_setup_screen(language: Language) -> String {
    let s = i18n::get_strings(language);
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", s.wifi_config_title);
    let _ = writeln!(out, "{}", s.wifi_connect_hint);
    let _ = writeln!(out, "{}", s.wifi_scan_qr);
    let _ = writeln!(out, "{}", s.wifi_fallback_hint);
    let _ = writeln!(out, "--- {} ---", s.reset_wifi);
    let _ = writeln!(out, "{}", s.reset_confirmation);
    let _ = writeln!(out, "[{}] [{}]", s.reset, s.cancel);
    out
}

/// 예보 화면에 들어가는 고정 문구를 한 줄씩 나열한다.
pub fn forecast_strip(language: Language) -> String {
    let s = i18n::get_strings(language);
    let mut out = String::new();
    let _ = writeln!(out, "{}  {}", s.temp_placeholder, s.feels_like);
    let _ = writeln!(out, "{}", s.seven_day_forecast);
    let _ = writeln!(out, "{}", s.weekdays.join(" "));
    let _ = writeln!(out, "{}", s.hourly_forecast);
    let _ = writeln!(out, "{} / {} / {} / 9{} 9{}", s.today, s.now, s.noon, s.am, s.pm);
    out
}

/// 영어 문구와 바이트 단위로 동일한 필드 이름을 나열한다. 번역 누락 점검용.
/// 온도 자리표시자는 언어 중립이라 제외한다. 영어 자신에는 항상 빈 목록.
pub fn untranslated_fields(language: Language) -> Vec<&'static str> {
    if language == Language::En {
        return Vec::new();
    }
    let en = i18n::get_strings(Language::En).fields();
    let target = i18n::get_strings(language).fields();
    let mut out = Vec::new();
    for ((name, value), (_, en_value)) in target.into_iter().zip(en) {
        if name != "temp_placeholder" && value == en_value {
            out.push(name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::DEFAULT_CAPTIVE_SSID;

    #[test]
    fn settings_screen_uses_native_labels() {
        let screen = settings_screen(Language::De);
        assert!(screen.contains("Aura Einstellungen"));
        assert!(screen.contains("Helligkeit:"));
        assert!(screen.contains("Deutsch"));
    }

    #[test]
    fn wifi_screen_mentions_captive_ssid() {
        for lang in Language::ALL {
            let screen = wifi_setup_screen(lang);
            assert!(
                screen.contains(DEFAULT_CAPTIVE_SSID),
                "{lang:?} wifi screen misses SSID"
            );
        }
    }

    #[test]
    fn forecast_strip_lists_all_weekdays() {
        let strip = forecast_strip(Language::Fr);
        for day in ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"] {
            assert!(strip.contains(day), "missing {day}");
        }
    }

    #[test]
    fn english_has_no_untranslated_report() {
        assert!(untranslated_fields(Language::En).is_empty());
    }

    #[test]
    fn known_untranslated_leftovers_are_reported() {
        // 원문 데이터가 영어를 그대로 재사용하는 필드들
        for lang in [Language::Es, Language::De, Language::Fr, Language::Sv] {
            let report = untranslated_fields(lang);
            assert!(report.contains(&"wifi_scan_qr"), "{lang:?}: {report:?}");
            assert!(
                report.contains(&"night_brightness_label"),
                "{lang:?}: {report:?}"
            );
        }
        assert!(untranslated_fields(Language::It).contains(&"close"));
    }
}
