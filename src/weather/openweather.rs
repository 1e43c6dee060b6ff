//! OpenWeather-backed conditions source. Each fetch is two sequential GETs:
//! ZIP to coordinates through the geocoding endpoint, then current
//! conditions at that coordinate.

use super::{ConditionsSource, FetchOutcome, Reading};
use crate::units::{kelvin_to_fahrenheit, mm_to_inches, mps_to_mph, CompassPoint};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const GEO_HOST: &str = "http://api.openweathermap.org";
const WEATHER_HOST: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenWeatherSource {
    api_key: String,
    zip_code: String,
    http: reqwest::Client,
}

impl OpenWeatherSource {
    pub fn new(api_key: String, zip_code: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            api_key,
            zip_code,
            http,
        })
    }

    fn geocode_url(&self) -> String {
        format!(
            "{GEO_HOST}/geo/1.0/zip?zip={},us&appid={}",
            self.zip_code, self.api_key
        )
    }

    fn conditions_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{WEATHER_HOST}/data/2.5/weather?lat={lat}&lon={lon}&appid={}",
            self.api_key
        )
    }

    /// Resolve the ZIP once before the terminal is taken over, so a bad key
    /// or ZIP fails fast with the provider's own message.
    pub async fn probe(&self) -> Result<()> {
        self.get_json::<GeoResponse>(&self.geocode_url(), "geocoding")
            .await
            .map(|_| ())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to reach OpenWeather ({what})"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {what} request failed with status {status}: {}",
                provider_message(&body)
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeather {what} JSON"))
    }
}

#[async_trait]
impl ConditionsSource for OpenWeatherSource {
    async fn fetch(&self) -> FetchOutcome {
        let mut urls = Vec::with_capacity(2);

        let geocode_url = self.geocode_url();
        urls.push(geocode_url.clone());
        let geo: GeoResponse = match self.get_json(&geocode_url, "geocoding").await {
            Ok(geo) => geo,
            Err(err) => {
                return FetchOutcome {
                    result: Err(err),
                    urls,
                }
            }
        };

        let conditions_url = self.conditions_url(geo.lat, geo.lon);
        urls.push(conditions_url.clone());
        let current: CurrentResponse =
            match self.get_json(&conditions_url, "current conditions").await {
                Ok(current) => current,
                Err(err) => {
                    return FetchOutcome {
                        result: Err(err),
                        urls,
                    }
                }
            };

        FetchOutcome {
            result: Ok(current.into_reading()),
            urls,
        }
    }
}

/// OpenWeather error bodies carry a human-readable `message` field; fall
/// back to the raw body when it is absent.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| truncate_body(body))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    main: MainSection,
    wind: WindSection,
    rain: Option<PrecipSection>,
    snow: Option<PrecipSection>,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WindSection {
    speed: f64,
    deg: f64,
    gust: Option<f64>,
}

/// Rain and snow volumes are keyed by accumulation window.
#[derive(Debug, Deserialize)]
struct PrecipSection {
    #[serde(rename = "1h", default)]
    one_hour: Option<f64>,
}

impl CurrentResponse {
    fn into_reading(self) -> Reading {
        let wind_speed_mph = mps_to_mph(self.wind.speed);
        // A payload without a gust reports the sustained speed as the gust.
        let wind_gust_mph = self.wind.gust.map(mps_to_mph).unwrap_or(wind_speed_mph);

        let rain_mm = self.rain.and_then(|rain| rain.one_hour).unwrap_or(0.0);
        let snow_mm = self.snow.and_then(|snow| snow.one_hour).unwrap_or(0.0);

        Reading {
            temperature_f: kelvin_to_fahrenheit(self.main.temp),
            humidity_pct: self.main.humidity,
            precipitation_in: mm_to_inches(rain_mm) + mm_to_inches(snow_mm),
            wind_direction: CompassPoint::from_degrees(self.wind.deg),
            wind_speed_mph,
            wind_gust_mph,
        }
    }
}
