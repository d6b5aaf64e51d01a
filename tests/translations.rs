//! 다국어 문자열 테이블 불변식 회귀 테스트.
use aura_display::i18n::{self, Language, DEFAULT_CAPTIVE_SSID};

#[test]
fn every_language_defines_every_field() {
    for lang in Language::ALL {
        let s = i18n::get_strings(lang);
        for (name, value) in s.fields() {
            assert!(!value.is_empty(), "{lang:?}: field {name} is empty");
        }
        for (index, day) in s.weekdays.iter().enumerate() {
            assert!(!day.is_empty(), "{lang:?}: weekdays[{index}] is empty");
        }
    }
}

#[test]
fn weekday_order_matches_across_languages() {
    // 인덱스 0 = 일요일
    let sundays = ["Sun", "Dom", "So", "Dim", "Paz", "Sön", "Dom"];
    for (lang, sunday) in Language::ALL.into_iter().zip(sundays) {
        assert_eq!(i18n::get_strings(lang).weekdays[0], sunday, "{lang:?}");
    }
    assert_eq!(i18n::get_strings(Language::En).weekdays[1], "Mon");
    assert_eq!(i18n::get_strings(Language::De).weekdays[1], "Mo");
}

#[test]
fn out_of_range_index_falls_back_to_default() {
    for index in [7u8, 42, 255] {
        let lang = Language::from_index(index);
        assert_eq!(lang, Language::En);
        assert!(std::ptr::eq(
            i18n::get_strings(lang),
            i18n::get_strings(Language::En)
        ));
    }
}

#[test]
fn unknown_code_falls_back_to_default() {
    for code in ["pt", "zz-ZZ", "", "ko-KR"] {
        assert_eq!(Language::from_code(code), Language::En, "code {code:?}");
    }
}

#[test]
fn captive_ssid_appears_in_every_language() {
    for lang in Language::ALL {
        let s = i18n::get_strings(lang);
        assert!(
            s.wifi_connect_hint.contains(DEFAULT_CAPTIVE_SSID),
            "{lang:?}: connect hint misses SSID"
        );
        assert!(
            s.reset_confirmation.contains(DEFAULT_CAPTIVE_SSID),
            "{lang:?}: reset confirmation misses SSID"
        );
    }
}

#[test]
fn lookup_is_idempotent() {
    for lang in Language::ALL {
        assert!(std::ptr::eq(
            i18n::get_strings(lang),
            i18n::get_strings(lang)
        ));
    }
}

#[test]
fn field_listing_is_aligned_across_languages() {
    let en_names: Vec<&str> = i18n::get_strings(Language::En)
        .fields()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    for lang in Language::ALL {
        let names: Vec<&str> = i18n::get_strings(lang)
            .fields()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, en_names, "{lang:?}");
    }
}
