//! Turns a raw [`ForecastResponse`] into the slices the dashboard paints.
//!
//! Everything here is pure: the same response, day and instant always give
//! the same projection, and no input shape makes a function fail. Missing
//! data degrades to `None` (rendered as the placeholder) instead.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;
use thiserror::Error;

use super::weather::{
    CurrentBlock, DailyBlock, ForecastResponse, HourlyBlock, IconCategory, PLACEHOLDER,
    condition_label, format_measure, icon_category, parse_date, parse_datetime,
};

/// Samples shown in the hourly panel.
pub const WINDOW_LEN: usize = 8;
/// Days in the daily strip.
pub const DAILY_LEN: usize = 7;
/// Future-day windows begin at this hour (08:00) of the selected day.
pub const FUTURE_DAY_START_HOUR: usize = 8;
pub const HOURS_PER_DAY: usize = 24;
pub const NOW_LABEL: &str = "Now";

/// Positional weekday labels for the daily strip. Slot 0 is always "Mon",
/// whatever weekday the forecast actually starts on.
pub const WEEKDAY_LABELS: [&str; DAILY_LEN] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("day selector must be between 0 and {max}, got {0}", max = DaySelector::MAX)]
pub struct DayOutOfRange(pub i64);

/// Which calendar day is projected: 0 is today, 1..=6 are the following days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DaySelector(u8);

impl DaySelector {
    pub const TODAY: DaySelector = DaySelector(0);
    pub const MAX: u8 = 6;

    pub fn new(day: i64) -> Result<Self, DayOutOfRange> {
        u8::try_from(day)
            .ok()
            .filter(|d| *d <= Self::MAX)
            .map(Self)
            .ok_or(DayOutOfRange(day))
    }

    #[must_use]
    pub fn clamped(day: i64) -> Self {
        Self(day.clamp(0, i64::from(Self::MAX)) as u8)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_today(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// First hourly index the window for this day starts from, when it is not
    /// anchored to the current hour.
    #[must_use]
    pub fn future_start_index(self) -> usize {
        usize::from(self.0) * HOURS_PER_DAY + FUTURE_DAY_START_HOUR
    }
}

impl TryFrom<i64> for DaySelector {
    type Error = DayOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyEntry {
    pub index: usize,
    pub display_time: String,
    #[serde(skip)]
    pub time: Option<NaiveDateTime>,
    pub temperature: Option<f64>,
    pub weather_code: Option<i32>,
    pub icon: IconCategory,
}

/// Up to [`WINDOW_LEN`] consecutive hourly samples. Shorter when the series
/// runs out; never padded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HourlyWindow {
    pub start: usize,
    pub entries: Vec<HourlyEntry>,
}

impl HourlyWindow {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_time(&self) -> Option<NaiveDateTime> {
        self.entries.first().and_then(|entry| entry.time)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEntry {
    pub label: &'static str,
    pub date: Option<NaiveDate>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub weather_code: Option<i32>,
    pub icon: IconCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// Current-conditions panel plus the four metric tiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentView {
    pub temperature: Option<f64>,
    pub weather_code: i32,
    pub label: &'static str,
    pub icon: IconCategory,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub precipitation: Option<f64>,
}

impl CurrentView {
    pub fn metrics(&self) -> [Metric; 4] {
        [
            Metric {
                label: "Feels Like",
                value: format_measure(self.feels_like, " °C"),
            },
            Metric {
                label: "Humidity",
                value: format_measure(self.humidity, "%"),
            },
            Metric {
                label: "Wind",
                value: format_measure(self.wind_speed, " km/h"),
            },
            Metric {
                label: "Precipitation",
                value: format_measure(self.precipitation, " mm"),
            },
        ]
    }
}

/// Everything the dashboard needs for one (response, day, instant) triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub day: DaySelector,
    pub day_title: String,
    pub display_date: String,
    pub current: CurrentView,
    pub hourly: HourlyWindow,
    pub daily: Vec<DailyEntry>,
}

pub fn project(response: &ForecastResponse, day: DaySelector, now: NaiveDateTime) -> Projection {
    let hourly = select_hourly_window(&response.hourly, day, now);
    Projection {
        day,
        day_title: day_title(&response.daily, day),
        display_date: select_display_date(response.current.as_ref(), day, &hourly),
        current: select_current(response.current.as_ref()),
        hourly,
        daily: select_daily_summary(&response.daily),
    }
}

/// The instant "today" is anchored to: the forecast's own current timestamp
/// (local to the forecast location), falling back to the caller's clock.
pub fn reference_now(response: &ForecastResponse, fallback: NaiveDateTime) -> NaiveDateTime {
    response
        .current
        .as_ref()
        .and_then(|current| current.time.as_deref())
        .and_then(parse_datetime)
        .unwrap_or(fallback)
}

/// Picks the hourly samples for `day`.
///
/// Today starts at the first sample whose hour equals `now`'s hour (index 0
/// if none does) and relabels that first sample "Now". Any other day starts
/// at 08:00 of that day, `day * 24 + 8`.
pub fn select_hourly_window(
    hourly: &HourlyBlock,
    day: DaySelector,
    now: NaiveDateTime,
) -> HourlyWindow {
    let start = if day.is_today() {
        hourly
            .time
            .iter()
            .position(|raw| parse_datetime(raw).is_some_and(|t| t.hour() == now.hour()))
            .unwrap_or(0)
    } else {
        day.future_start_index()
    };
    let end = start.saturating_add(WINDOW_LEN).min(hourly.len());

    let entries = (start..end)
        .map(|idx| {
            let time = parse_datetime(&hourly.time[idx]);
            let display_time = if day.is_today() && idx == start {
                NOW_LABEL.to_string()
            } else {
                time.map_or_else(
                    || PLACEHOLDER.to_string(),
                    |t| t.format("%H:%M").to_string(),
                )
            };
            let weather_code = hourly.weather_code_at(idx);
            HourlyEntry {
                index: idx,
                display_time,
                time,
                temperature: hourly.temperature_at(idx),
                weather_code,
                icon: weather_code.map_or(IconCategory::Unknown, icon_category),
            }
        })
        .collect();

    HourlyWindow { start, entries }
}

/// Positional take of the first seven days; missing slots stay `None`.
pub fn select_daily_summary(daily: &DailyBlock) -> Vec<DailyEntry> {
    WEEKDAY_LABELS
        .into_iter()
        .enumerate()
        .map(|(idx, label)| {
            let weather_code = daily.weather_code_at(idx);
            DailyEntry {
                label,
                date: daily.time.get(idx).and_then(|raw| parse_date(raw)),
                max: daily.max_at(idx),
                min: daily.min_at(idx),
                weather_code,
                icon: weather_code.map_or(IconCategory::Unknown, icon_category),
            }
        })
        .collect()
}

/// Header date line. Today shows the current timestamp with its time after
/// a `" • "` separator; other days show the date of the window's first
/// sample without a time.
pub fn select_display_date(
    current: Option<&CurrentBlock>,
    day: DaySelector,
    window: &HourlyWindow,
) -> String {
    if day.is_today() {
        current
            .and_then(|c| c.time.as_deref())
            .and_then(parse_datetime)
            .map_or_else(
                || PLACEHOLDER.to_string(),
                |t| t.format("%A, %-d %b %Y • %H:%M").to_string(),
            )
    } else {
        window.first_time().map_or_else(
            || PLACEHOLDER.to_string(),
            |t| t.format("%A, %-d %b %Y").to_string(),
        )
    }
}

/// Current panel values. A missing weather code reads as 0 (clear sky) and
/// a missing apparent temperature falls back to the measured one.
pub fn select_current(current: Option<&CurrentBlock>) -> CurrentView {
    let block = current.cloned().unwrap_or_default();
    let weather_code = block.weather_code.unwrap_or(0);
    CurrentView {
        temperature: block.temperature_2m,
        weather_code,
        label: condition_label(weather_code),
        icon: icon_category(weather_code),
        feels_like: block.apparent_temperature.or(block.temperature_2m),
        humidity: block.relative_humidity_2m,
        wind_speed: block.wind_speed_10m,
        precipitation: block.precipitation,
    }
}

/// Title for the day picker: "Today", or the weekday of that day's forecast
/// date when the daily series carries one.
pub fn day_title(daily: &DailyBlock, day: DaySelector) -> String {
    if day.is_today() {
        return "Today".to_string();
    }
    daily
        .time
        .get(usize::from(day.get()))
        .and_then(|raw| parse_date(raw))
        .map_or_else(
            || format!("Day +{}", day.get()),
            |date| date.format("%A").to_string(),
        )
}
