use chrono::{Duration, NaiveDateTime};
use proptest::prelude::*;
use skyglass::domain::{
    projection::{DAILY_LEN, DaySelector, WINDOW_LEN, select_daily_summary, select_hourly_window},
    weather::{DailyBlock, HourlyBlock, IconCategory, condition_label, icon_category},
};

fn hourly_series(hours: usize) -> HourlyBlock {
    let base = NaiveDateTime::parse_from_str("2024-03-10T00:00", "%Y-%m-%dT%H:%M")
        .expect("valid base");
    HourlyBlock {
        time: (0..hours)
            .map(|idx| {
                (base + Duration::hours(idx as i64))
                    .format("%Y-%m-%dT%H:%M")
                    .to_string()
            })
            .collect(),
        temperature_2m: (0..hours).map(|_| Some(1.0)).collect(),
        weather_code: (0..hours).map(|_| Some(2)).collect(),
    }
}

proptest! {
    #[test]
    fn every_code_has_an_icon_and_label(code in any::<i32>()) {
        let category = icon_category(code);
        prop_assert!(IconCategory::ALL.contains(&category));
        prop_assert!(!condition_label(code).is_empty());
        if !(0..=99).contains(&code) {
            prop_assert_eq!(category, IconCategory::Unknown);
        }
    }

    #[test]
    fn future_window_length_is_bounded(hours in 0usize..200, day in 1i64..=6) {
        let day = DaySelector::clamped(day);
        let now = NaiveDateTime::parse_from_str("2024-03-10T05:00", "%Y-%m-%dT%H:%M")
            .expect("valid now");
        let window = select_hourly_window(&hourly_series(hours), day, now);
        let start = day.future_start_index();
        prop_assert_eq!(window.start, start);
        prop_assert_eq!(window.len(), WINDOW_LEN.min(hours.saturating_sub(start)));
        for (offset, entry) in window.entries.iter().enumerate() {
            prop_assert_eq!(entry.index, start + offset);
        }
    }

    #[test]
    fn today_window_never_exceeds_eight(hours in 0usize..60, hour in 0u32..24) {
        let now = NaiveDateTime::parse_from_str("2024-03-10T00:00", "%Y-%m-%dT%H:%M")
            .expect("valid now")
            + Duration::hours(i64::from(hour));
        let window = select_hourly_window(&hourly_series(hours), DaySelector::TODAY, now);
        prop_assert!(window.len() <= WINDOW_LEN);
        if let Some(first) = window.entries.first() {
            prop_assert_eq!(first.display_time.as_str(), "Now");
        }
    }

    #[test]
    fn daily_summary_is_always_seven(days in 0usize..12) {
        let daily = DailyBlock {
            time: (0..days).map(|d| format!("2024-03-{:02}", d + 1)).collect(),
            temperature_2m_max: (0..days).map(|_| Some(3.0)).collect(),
            temperature_2m_min: (0..days).map(|_| Some(-3.0)).collect(),
            weather_code: (0..days).map(|_| Some(95)).collect(),
        };
        let summary = select_daily_summary(&daily);
        prop_assert_eq!(summary.len(), DAILY_LEN);
        for (idx, entry) in summary.iter().enumerate() {
            prop_assert_eq!(entry.max.is_some(), idx < days);
        }
    }
}
