use chrono::{Datelike, Duration, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Whether `:00` is shown or elided in the clock line. Both renderings exist
/// in the wild; the choice is configuration, not behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MinuteStyle {
    #[default]
    Always,
    ElideZero,
}

/// English ordinal suffix, including the teens exceptions.
#[must_use]
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Renders a moment as "Nov 26th, 9:05am". Month abbreviations are chrono's
/// English names.
#[must_use]
pub fn format_moment(t: NaiveDateTime, style: MinuteStyle) -> String {
    let month = t.format("%b");
    let day = t.day();
    let suffix = ordinal_suffix(day);
    let (is_pm, hour) = t.hour12();
    let meridiem = if is_pm { "pm" } else { "am" };
    let minute = t.minute();

    if style == MinuteStyle::ElideZero && minute == 0 {
        format!("{month} {day}{suffix}, {hour}{meridiem}")
    } else {
        format!("{month} {day}{suffix}, {hour}:{minute:02}{meridiem}")
    }
}

/// The moment currently on screen. Seeded from the provider's reported local
/// time when available, otherwise the viewer's "now", and advanced locally
/// between remote refreshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayClock {
    current: NaiveDateTime,
}

impl DisplayClock {
    #[must_use]
    pub fn now_local() -> Self {
        Self {
            current: Local::now().naive_local(),
        }
    }

    #[must_use]
    pub fn at(moment: NaiveDateTime) -> Self {
        Self { current: moment }
    }

    /// Reseed from an authoritative remote time, or local "now" when absent.
    pub fn reseed(&mut self, moment: Option<NaiveDateTime>) {
        self.current = moment.unwrap_or_else(|| Local::now().naive_local());
    }

    /// Advance one second between remote refreshes.
    pub fn tick(&mut self) {
        self.current += Duration::seconds(1);
    }

    #[must_use]
    pub fn current(&self) -> NaiveDateTime {
        self.current
    }

    #[must_use]
    pub fn formatted(&self, style: MinuteStyle) -> String {
        format_moment(self.current, style)
    }
}
