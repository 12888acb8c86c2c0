#![allow(clippy::cast_precision_loss)]
#![allow(dead_code)]

use chrono::{Duration, NaiveDateTime};
use serde_json::{Value, json};
use skyglass::{
    app::fetch::Services,
    data::{forecast::ForecastClient, geocode::GeocodeClient},
    domain::weather::{ForecastResponse, Place},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const FORECAST_PATH: &str = "/v1/forecast";
pub const GEOCODE_PATH: &str = "/v1/search";

pub fn at(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid time fixture")
}

pub fn rome() -> Place {
    Place {
        name: "Rome".to_string(),
        country: Some("Italy".to_string()),
        latitude: 41.89,
        longitude: 12.48,
    }
}

/// A week of hourly samples from 2024-01-01T00:00 with "now" at 14:15.
pub fn forecast_body() -> Value {
    let base = at("2024-01-01T00:00");
    let times: Vec<String> = (0..168)
        .map(|idx| {
            (base + Duration::hours(idx))
                .format("%Y-%m-%dT%H:%M")
                .to_string()
        })
        .collect();
    let temperatures: Vec<f64> = (0..168_i32).map(|idx| f64::from(idx) * 0.5).collect();
    let codes: Vec<i32> = (0..168).map(|idx| if idx % 2 == 0 { 61 } else { 3 }).collect();

    json!({
        "latitude": 41.9,
        "longitude": 12.5,
        "timezone": "Europe/Rome",
        "current": {
            "time": "2024-01-01T14:15",
            "temperature_2m": 6.4,
            "relative_humidity_2m": 81,
            "wind_speed_10m": 12.5,
            "precipitation": 0.0,
            "apparent_temperature": 3.9,
            "weather_code": 61
        },
        "hourly": {
            "time": times,
            "temperature_2m": temperatures,
            "weather_code": codes
        },
        "daily": {
            "time": ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04",
                     "2024-01-05", "2024-01-06", "2024-01-07"],
            "temperature_2m_max": [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0],
            "temperature_2m_min": [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            "weather_code": [71, 0, 2, 3, 45, 95, 80]
        }
    })
}

pub fn forecast_response() -> ForecastResponse {
    serde_json::from_value(forecast_body()).expect("fixture decodes")
}

pub fn geocode_body(places: &[(&str, &str, f64, f64)]) -> Value {
    let results: Vec<Value> = places
        .iter()
        .map(|(name, country, latitude, longitude)| {
            json!({
                "name": name,
                "country": country,
                "latitude": latitude,
                "longitude": longitude,
                "timezone": "Europe/Rome"
            })
        })
        .collect();
    json!({ "results": results })
}

pub async fn mount_forecast(server: &MockServer, status: u16) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(forecast_body())
    } else {
        ResponseTemplate::new(status)
    };
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

pub async fn mount_geocode(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub fn services_for(server: &MockServer) -> Services {
    Services::new(
        ForecastClient::with_base_url(format!("{}{FORECAST_PATH}", server.uri()))
            .expect("forecast client"),
        GeocodeClient::with_base_url(format!("{}{GEOCODE_PATH}", server.uri()))
            .expect("geocode client"),
    )
}
