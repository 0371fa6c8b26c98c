use crate::config::{set_config, Config};
use crate::waypoint::{LatLng, Waypoint, WaypointId};

use axum::Router;
use rstest::fixture;
use tokio::net::TcpListener;

pub fn wp(id: i64, lat: f64, lng: f64) -> Waypoint {
    Waypoint::new(id, LatLng::new(lat, lng))
}

pub fn waypoints(input: &[(i64, f64, f64)]) -> Vec<Waypoint> {
    input.iter().map(|(id, lat, lng)| wp(*id, *lat, *lng)).collect()
}

pub fn ids(waypoints: &[Waypoint]) -> Vec<WaypointId> {
    waypoints.iter().map(|w| w.id.clone()).collect()
}

pub fn numeric_ids(input: &[i64]) -> Vec<WaypointId> {
    input.iter().map(|id| WaypointId::Number(*id)).collect()
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL where nothing is listening.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub struct Init;

#[fixture]
pub fn init() -> Init {
    match set_config(Config { verbose: 2 }) {
        Ok(()) => (),
        Err(_) => (),
    }
    Init {}
}

#[macro_export]
macro_rules! assert_eq_pretty {
    ($left:expr, $right:expr) => {
        match (&$left, &$right) {
            (left, right) => {
                assert_eq!(left, right, "\n{:#?}\n{:#?}", left, right);
            }
        }
    };
}

pub use assert_eq_pretty;
