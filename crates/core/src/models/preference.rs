use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

const WEEKDAYS: [u8; 5] = [1, 2, 3, 4, 5];
const SATURDAY: [u8; 1] = [6];
const SUNDAY: [u8; 1] = [0];

/// A student's coarse schedule preference, as captured by the booking wizard.
///
/// Each preference maps to a set of weekdays (0-6, Sunday = 0) and a
/// time-of-day range in minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulePreference {
    WeekdayMornings,
    WeekdayAfternoons,
    WeekdayEvenings,
    Saturday,
    Sunday,
}

impl SchedulePreference {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "weekday_mornings" => Some(Self::WeekdayMornings),
            "weekday_afternoons" => Some(Self::WeekdayAfternoons),
            "weekday_evenings" => Some(Self::WeekdayEvenings),
            "saturday" => Some(Self::Saturday),
            "sunday" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Weekday indices (Sunday = 0) this preference covers.
    pub fn weekdays(&self) -> &'static [u8] {
        match self {
            Self::WeekdayMornings | Self::WeekdayAfternoons | Self::WeekdayEvenings => &WEEKDAYS,
            Self::Saturday => &SATURDAY,
            Self::Sunday => &SUNDAY,
        }
    }

    /// Half-open time-of-day range in minutes from midnight.
    pub fn minute_range(&self) -> (u32, u32) {
        match self {
            Self::WeekdayMornings => (0, 12 * 60),
            Self::WeekdayAfternoons => (12 * 60, 17 * 60),
            Self::WeekdayEvenings => (17 * 60, MINUTES_PER_DAY),
            Self::Saturday | Self::Sunday => (0, MINUTES_PER_DAY),
        }
    }

    /// Short time-of-day tag used when labelling a matched window, or `None`
    /// for whole-day preferences.
    pub fn period_label(&self) -> Option<&'static str> {
        match self {
            Self::WeekdayMornings => Some("morning"),
            Self::WeekdayAfternoons => Some("afternoon"),
            Self::WeekdayEvenings => Some("evening"),
            Self::Saturday | Self::Sunday => None,
        }
    }
}

/// Abbreviated weekday name for a 0-6 index (Sunday = 0).
pub fn weekday_abbrev(day: u8) -> &'static str {
    match day % 7 {
        0 => "Sun",
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        _ => "Sat",
    }
}

/// Full weekday name for a 0-6 index (Sunday = 0).
pub fn weekday_name(day: u8) -> &'static str {
    match day % 7 {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        _ => "Saturday",
    }
}
