//! Conversion of Lowrance encoded coordinates.
//!
//! Positions are stored as signed 32 bit spherical Mercator meters on a
//! sphere with the polar radius of the earth.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI};

pub const POLAR_EARTH_RADIUS: f64 = 6_356_752.3142;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Converts the raw column values. The columns hold the unsigned bit
    /// pattern of the signed coordinates.
    pub fn from_lowrance(x: u32, y: u32) -> Self {
        let x = f64::from(x as i32);
        let y = f64::from(y as i32);

        let longitude = x / POLAR_EARTH_RADIUS * (180.0 / PI);
        let latitude = (2.0 * (y / POLAR_EARTH_RADIUS).exp().atan() - FRAC_PI_2) * (180.0 / PI);

        Self {
            latitude,
            longitude,
        }
    }
}
