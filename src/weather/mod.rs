pub mod openweather;

use crate::units::CompassPoint;
use async_trait::async_trait;

/// One normalized snapshot of conditions at the watched location. Replaced
/// wholesale on each successful fetch, never patched field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub temperature_f: f64,
    pub humidity_pct: u8,
    pub precipitation_in: f64,
    pub wind_direction: CompassPoint,
    pub wind_speed_mph: f64,
    pub wind_gust_mph: f64,
}

/// Result of one complete fetch sequence. `urls` holds every URL attempted,
/// in call order, whether or not the fetch succeeded.
#[derive(Debug)]
pub struct FetchOutcome {
    pub result: anyhow::Result<Reading>,
    pub urls: Vec<String>,
}

/// Source of current conditions. The refresh loop only sees this trait, so
/// tests can drive it with a scripted source.
#[async_trait]
pub trait ConditionsSource: Send + Sync {
    async fn fetch(&self) -> FetchOutcome;
}
