//! Ordering of waypoints around their centroid.
//!
//! Latitude and longitude are treated as flat Cartesian coordinates
//! (`lng` is x, `lat` is y). This only holds for neighborhood-sized
//! clusters and breaks down near the poles and the antimeridian. No
//! geodesic correction is applied.

use geo::{Coord, LineString, Polygon};

use std::cmp::Ordering;

use crate::waypoint::{LatLng, Waypoint};

pub trait Located {
    fn position(&self) -> LatLng;
}

impl Located for LatLng {
    fn position(&self) -> LatLng {
        *self
    }
}

impl Located for Waypoint {
    fn position(&self) -> LatLng {
        self.position
    }
}

/// Arithmetic mean of the positions, or `None` if there are none.
pub fn centroid<T: Located>(points: &[T]) -> Option<LatLng> {
    if points.is_empty() {
        return None;
    }
    let (lat, lng) = points.iter().fold((0.0, 0.0), |(lat, lng), p| {
        let pos = p.position();
        (lat + pos.lat, lng + pos.lng)
    });
    let n = points.len() as f64;
    Some(LatLng::new(lat / n, lng / n))
}

/// Angle of `point` as seen from `center`, in `[-pi, pi]`. A latitude
/// delta of `-0.0` west of the center gives `-pi`.
pub fn angle_from(center: LatLng, point: LatLng) -> f64 {
    (point.lat - center.lat).atan2(point.lng - center.lng)
}

/// Returns the points ordered by ascending angle around their centroid.
///
/// Fewer than three points are returned as they are. The sort is
/// stable, so points with equal angles keep their input order. Points
/// whose angle is NaN (from NaN coordinates) go after all others.
pub fn sort_clockwise<T: Located + Clone>(points: &[T]) -> Vec<T> {
    let center = match centroid(points) {
        Some(center) if points.len() >= 3 => center,
        _ => return points.to_vec(),
    };

    let mut keyed: Vec<(f64, &T)> = points
        .iter()
        .map(|p| (angle_from(center, p.position()), p))
        .collect();
    keyed.sort_by(|(lhs, _), (rhs, _)| compare_angles(*lhs, *rhs));
    keyed.into_iter().map(|(_, p)| p.clone()).collect()
}

fn compare_angles(lhs: f64, rhs: f64) -> Ordering {
    lhs.partial_cmp(&rhs)
        .unwrap_or_else(|| lhs.is_nan().cmp(&rhs.is_nan()))
}

/// Closed polygon through the points in clockwise order.
pub fn to_polygon<T: Located + Clone>(points: &[T]) -> Option<Polygon> {
    if points.len() < 3 {
        return None;
    }
    let coords: Vec<Coord> = sort_clockwise(points)
        .iter()
        .map(|p| p.position().into())
        .collect();
    // LineString is closed by Polygon::new.
    Some(Polygon::new(LineString::new(coords), vec![]))
}
