//! Conversions from the raw API units (Kelvin, m/s, mm, degrees) to the
//! display units (°F, mph, inches, compass points). All pure; inputs are
//! assumed validated by the caller.

use std::fmt;

const MPH_PER_MPS: f64 = 2.23694;
const INCHES_PER_MM: f64 = 0.0393701;

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - 273.15) * 9.0 / 5.0 + 32.0
}

pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPH_PER_MPS
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm * INCHES_PER_MM
}

/// One of the 16 compass points, in clockwise order from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassPoint {
    pub const fn all() -> &'static [CompassPoint; 16] {
        use CompassPoint::*;
        &[
            N, Nne, Ne, Ene, E, Ese, Se, Sse, S, Ssw, Sw, Wsw, W, Wnw, Nw, Nnw,
        ]
    }

    /// Map a wind bearing to its compass point. Each point owns a 22.5°
    /// sector centered on its heading, so the bearing is offset by half a
    /// sector before flooring; wraps modulo 16.
    pub fn from_degrees(degrees: f64) -> Self {
        let sector = (((degrees + 11.25) / 22.5).floor() as i64).rem_euclid(16) as usize;
        Self::all()[sector]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::Nne => "NNE",
            CompassPoint::Ne => "NE",
            CompassPoint::Ene => "ENE",
            CompassPoint::E => "E",
            CompassPoint::Ese => "ESE",
            CompassPoint::Se => "SE",
            CompassPoint::Sse => "SSE",
            CompassPoint::S => "S",
            CompassPoint::Ssw => "SSW",
            CompassPoint::Sw => "SW",
            CompassPoint::Wsw => "WSW",
            CompassPoint::W => "W",
            CompassPoint::Wnw => "WNW",
            CompassPoint::Nw => "NW",
            CompassPoint::Nnw => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
