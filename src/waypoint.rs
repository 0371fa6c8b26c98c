use geo::{Coord, Point};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use std::fmt;

/// A geographic position in degrees, in the `{"lat", "lng"}` shape the
/// planning service and the map widget use.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
    }
}

impl From<LatLng> for Coord {
    fn from(value: LatLng) -> Self {
        Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<LatLng> for Point {
    fn from(value: LatLng) -> Self {
        Point::new(value.lng, value.lat)
    }
}

impl From<Coord> for LatLng {
    fn from(value: Coord) -> Self {
        LatLng {
            lat: value.y,
            lng: value.x,
        }
    }
}

impl From<Point> for LatLng {
    fn from(value: Point) -> Self {
        value.0.into()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum WaypointId {
    Number(i64),
    Text(String),
}

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WaypointId::Number(n) => write!(f, "{}", n),
            WaypointId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for WaypointId {
    fn from(value: i64) -> Self {
        WaypointId::Number(value)
    }
}

impl From<&str> for WaypointId {
    fn from(value: &str) -> Self {
        WaypointId::Text(value.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub id: WaypointId,
    pub position: LatLng,
}

impl Waypoint {
    pub fn new<I: Into<WaypointId>>(id: I, position: LatLng) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// Hands out waypoint ids derived from the wall clock in milliseconds.
/// Ids are strictly increasing within one generator, even when several
/// are requested in the same millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> WaypointId {
        self.next_at(now_millis())
    }

    pub(crate) fn next_at(&mut self, now: i64) -> WaypointId {
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        WaypointId::Number(id)
    }
}

fn now_millis() -> i64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    i64::try_from(nanos / 1_000_000).unwrap_or(0)
}
