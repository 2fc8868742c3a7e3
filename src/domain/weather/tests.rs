use proptest::prelude::*;

use super::*;

#[test]
fn rain_intensity_codes_coarsen_to_one_family() {
    for code in [1180, 1183, 1186, 1189, 1192, 1195, 1198, 1201, 1240, 1243, 1246] {
        assert_eq!(condition_family(code), ConditionFamily::Rain, "code {code}");
        assert_eq!(icon_file(code, true), "rain.svg");
        assert_eq!(icon_file(code, false), "rain.svg");
    }
}

#[test]
fn snow_sleet_and_ice_share_one_icon() {
    for code in [1066, 1069, 1114, 1204, 1213, 1237, 1255, 1264] {
        assert_eq!(condition_family(code), ConditionFamily::Snow, "code {code}");
        assert_eq!(icon_file(code, true), "snow.svg");
    }
}

#[test]
fn clear_and_partly_cloudy_vary_by_day_night() {
    assert_eq!(icon_file(1000, true), "clear-day.svg");
    assert_eq!(icon_file(1000, false), "clear-night.svg");
    assert_eq!(icon_file(1003, true), "partly-cloudy-day.svg");
    assert_eq!(icon_file(1003, false), "partly-cloudy-night.svg");
}

#[test]
fn other_families_ignore_the_day_flag() {
    for code in [1006, 1030, 1063, 1195, 1225, 1276] {
        assert_eq!(icon_file(code, true), icon_file(code, false), "code {code}");
    }
}

#[test]
fn unrecognized_codes_use_the_default_icon() {
    for code in [0, -1, 999, 1001, 1500, i32::MAX, i32::MIN] {
        assert_eq!(condition_family(code), ConditionFamily::Unknown, "code {code}");
        assert_eq!(icon_file(code, true), DEFAULT_ICON);
        assert_eq!(icon_file(code, false), DEFAULT_ICON);
    }
}

#[test]
fn glyphs_follow_the_same_day_night_rules() {
    assert_ne!(condition_glyph(1000, true), condition_glyph(1000, false));
    assert_ne!(condition_glyph(1003, true), condition_glyph(1003, false));
    assert_eq!(condition_glyph(1195, true), condition_glyph(1195, false));
}

#[test]
fn fallback_observation_renders_the_default_icon() {
    let observation = Observation::fallback("London");
    assert_eq!(observation.condition_text, FALLBACK_CONDITION_TEXT);
    assert_eq!(observation.icon(), DEFAULT_ICON);
    assert!((observation.temp_c - FALLBACK_TEMP_C).abs() < f32::EPSILON);
    assert!(observation.local_time.is_none());
    assert!(observation.coords().is_none());
}

#[test]
fn default_units_follow_the_country_rule() {
    let mut observation = Observation::fallback("Boston");
    observation.country = "United States of America".to_string();
    assert_eq!(observation.default_units(), Units::Fahrenheit);

    observation.country = "Sweden".to_string();
    assert_eq!(observation.default_units(), Units::Celsius);

    observation.country = String::new();
    assert_eq!(observation.default_units(), Units::Celsius);
}

#[test]
fn temp_rounds_in_the_requested_unit() {
    let mut observation = Observation::fallback("London");
    observation.temp_c = 26.9;
    observation.temp_f = 80.4;
    assert_eq!(observation.temp(Units::Celsius), 27);
    assert_eq!(observation.temp(Units::Fahrenheit), 80);
}

proptest! {
    #[test]
    fn icon_file_is_total_over_all_codes(code in any::<i32>(), is_day in any::<bool>()) {
        let icon = icon_file(code, is_day);
        prop_assert!(!icon.is_empty());
        prop_assert!(icon.ends_with(".svg"));
    }

    #[test]
    fn unknown_family_always_means_default_icon(code in any::<i32>()) {
        if condition_family(code) == ConditionFamily::Unknown {
            prop_assert_eq!(icon_file(code, true), DEFAULT_ICON);
            prop_assert_eq!(icon_file(code, false), DEFAULT_ICON);
        }
    }
}
