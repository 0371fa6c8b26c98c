use crate::error::{Error, ErrorType, Result};
use crate::waypoint::{LatLng, Waypoint};

use log::{debug, info, trace, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use std::time::Duration;

pub const DEFAULT_URL: &str = "http://127.0.0.1:5001";

/// Upper bound of the flight time, in minutes.
pub const MAX_TIME: f64 = 40.0;
/// Upper bound of the flight velocity, in km/h.
pub const MAX_VELOCITY: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanParameters {
    time: f64,
    velocity: f64,
}

impl PlanParameters {
    pub fn new(time: f64, velocity: f64) -> Result<Self> {
        check_bound("time", time, MAX_TIME)?;
        check_bound("velocity", velocity, MAX_VELOCITY)?;
        Ok(Self { time, velocity })
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

fn check_bound(name: &str, value: f64, max: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= max {
        Ok(())
    } else {
        Err(Error::new(
            ErrorType::InputError,
            format!("{} must be in (0, {}], got {}", name, max, value),
        ))
    }
}

#[derive(Serialize, Debug)]
pub struct PlanRequest<'a> {
    pub waypoints: &'a [Waypoint],
    pub time: f64,
    pub velocity: f64,
}

impl<'a> PlanRequest<'a> {
    pub fn new(waypoints: &'a [Waypoint], params: PlanParameters) -> Self {
        Self {
            waypoints,
            time: params.time,
            velocity: params.velocity,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PlanResponse {
    pub path: Option<Vec<LatLng>>,
    pub area: Option<Vec<LatLng>>,
}

fn check_waypoints(waypoints: &[Waypoint]) -> Result<()> {
    if waypoints.is_empty() {
        return Err(Error::new_s(ErrorType::InputError, "no waypoints"));
    }
    match waypoints.iter().find(|w| !w.position.is_valid()) {
        Some(w) => Err(Error::new(
            ErrorType::InputError,
            format!("invalid position for waypoint {}: {:?}", w.id, w.position),
        )),
        None => Ok(()),
    }
}

/// Client of the remote path planning and area detection service.
pub struct PlannerClient {
    client: Client,
    base_url: Url,
}

impl PlannerClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Without a trailing slash, join() would replace the last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn plan_path(
        &self,
        waypoints: &[Waypoint],
        params: PlanParameters,
    ) -> Result<PlanResponse> {
        check_waypoints(waypoints)?;
        let response = self
            .post("waypoints", &PlanRequest::new(waypoints, params))
            .await?;
        info!(
            "planned path with {} points",
            response.path.as_ref().map_or(0, |p| p.len())
        );
        Ok(response)
    }

    pub async fn detect_area(
        &self,
        waypoints: &[Waypoint],
    ) -> Result<PlanResponse> {
        check_waypoints(waypoints)?;
        let response = self.post("area_detection", waypoints).await?;
        info!(
            "detected area with {} points",
            response.area.as_ref().map_or(0, |a| a.len())
        );
        Ok(response)
    }

    async fn post<B>(&self, endpoint: &str, body: &B) -> Result<PlanResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(endpoint)?;
        let body = serde_json::to_vec(body)?;
        debug!("POST {}", url);
        trace!("{}", String::from_utf8_lossy(&body));

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| {
                warn!("request to {} failed: {}", url, err);
                Error::from(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned {}", url, status);
            return Err(Error::new(
                ErrorType::ServiceError(status.as_u16()),
                format!("HTTP error from {}: {}", url, status),
            ));
        }

        let data = response.bytes().await?;
        trace!("{}", String::from_utf8_lossy(&data));
        Ok(serde_json::from_slice(&data)?)
    }
}
