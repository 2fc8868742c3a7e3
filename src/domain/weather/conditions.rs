/// Semantic grouping of provider condition codes. Many distinct codes map to
/// the same family on purpose; the tile only needs one icon per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionFamily {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunder,
    Unknown,
}

pub const DEFAULT_ICON: &str = "default.svg";

#[must_use]
pub fn condition_family(code: i32) -> ConditionFamily {
    match code {
        1000 => ConditionFamily::Clear,
        1003 => ConditionFamily::PartlyCloudy,
        1006 | 1009 => ConditionFamily::Cloudy,
        1030 | 1135 | 1147 => ConditionFamily::Fog,
        1063 | 1072 | 1150 | 1153 | 1168 | 1171 => ConditionFamily::Drizzle,
        1180 | 1183 | 1186 | 1189 | 1192 | 1195 | 1198 | 1201 | 1240 | 1243 | 1246 => {
            ConditionFamily::Rain
        }
        1066 | 1069 | 1114 | 1117 | 1204 | 1207 | 1210 | 1213 | 1216 | 1219 | 1222 | 1225
        | 1237 | 1249 | 1252 | 1255 | 1258 | 1261 | 1264 => ConditionFamily::Snow,
        1087 | 1273 | 1276 | 1279 | 1282 => ConditionFamily::Thunder,
        _ => ConditionFamily::Unknown,
    }
}

/// Icon file identifier for a condition code. Total over all codes; only the
/// clear and partly-cloudy families have distinct day and night variants.
#[must_use]
pub fn icon_file(code: i32, is_day: bool) -> &'static str {
    match condition_family(code) {
        ConditionFamily::Clear => {
            if is_day {
                "clear-day.svg"
            } else {
                "clear-night.svg"
            }
        }
        ConditionFamily::PartlyCloudy => {
            if is_day {
                "partly-cloudy-day.svg"
            } else {
                "partly-cloudy-night.svg"
            }
        }
        ConditionFamily::Cloudy => "cloudy.svg",
        ConditionFamily::Fog => "fog.svg",
        ConditionFamily::Drizzle => "drizzle.svg",
        ConditionFamily::Rain => "rain.svg",
        ConditionFamily::Snow => "snow.svg",
        ConditionFamily::Thunder => "thunderstorm.svg",
        ConditionFamily::Unknown => DEFAULT_ICON,
    }
}

/// Terminal glyph for on-screen rendering, same day/night rules as the icons.
#[must_use]
pub fn condition_glyph(code: i32, is_day: bool) -> &'static str {
    match condition_family(code) {
        ConditionFamily::Clear => {
            if is_day {
                "☀"
            } else {
                "☾"
            }
        }
        ConditionFamily::PartlyCloudy => {
            if is_day {
                "⛅"
            } else {
                "☁"
            }
        }
        ConditionFamily::Cloudy => "☁",
        ConditionFamily::Fog => "░",
        ConditionFamily::Drizzle | ConditionFamily::Rain => "☂",
        ConditionFamily::Snow => "❄",
        ConditionFamily::Thunder => "⚡",
        ConditionFamily::Unknown => "·",
    }
}
