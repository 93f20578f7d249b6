//! Linear lat/lon projection onto a 2D drawing plane

use crate::network::City;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A projected position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Drawing surface dimensions and padding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_pad_x")]
    pub pad_x: f64,
    #[serde(default = "default_pad_y")]
    pub pad_y: f64,
}

fn default_width() -> f64 {
    1000.0
}

fn default_height() -> f64 {
    600.0
}

fn default_pad_x() -> f64 {
    60.0
}

fn default_pad_y() -> f64 {
    50.0
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: default_width(),
            height: default_height(),
            pad_x: default_pad_x(),
            pad_y: default_pad_y(),
        }
    }
}

/// Position of `value` within `[min, max]`, 0.5 when the span is empty
fn fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        0.5
    } else {
        (value - min) / span
    }
}

/// Project cities onto `viewport`.
///
/// Longitude maps to x, latitude to y with the axis inverted so north is
/// up. The bounding box of all cities fills the padded area.
pub fn project(cities: &[City], viewport: &Viewport) -> BTreeMap<String, Point> {
    let mut points = BTreeMap::new();
    if cities.is_empty() {
        return points;
    }

    let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
    for city in cities {
        min_lat = min_lat.min(city.lat);
        max_lat = max_lat.max(city.lat);
        min_lon = min_lon.min(city.lon);
        max_lon = max_lon.max(city.lon);
    }

    let inner_w = viewport.width - 2.0 * viewport.pad_x;
    let inner_h = viewport.height - 2.0 * viewport.pad_y;

    for city in cities {
        let x = viewport.pad_x + fraction(city.lon, min_lon, max_lon) * inner_w;
        let y = viewport.pad_y + (1.0 - fraction(city.lat, min_lat, max_lat)) * inner_h;
        points.insert(city.id.clone(), Point { x, y });
    }

    points
}
