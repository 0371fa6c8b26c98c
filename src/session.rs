use geo::Polygon;
use log::{info, warn};

use crate::error::Result;
use crate::geometry::{sort_clockwise, to_polygon};
use crate::planner_query::{PlanParameters, PlanResponse, PlannerClient};
use crate::waypoint::{IdGenerator, LatLng, Waypoint, WaypointId};

/// Markers placed by the user together with the latest result of the
/// planning service.
#[derive(Debug, Default)]
pub struct PlanningSession {
    markers: Vec<Waypoint>,
    path: Vec<LatLng>,
    area: Vec<LatLng>,
    ids: IdGenerator,
}

impl PlanningSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markers(markers: Vec<Waypoint>) -> Self {
        Self {
            markers,
            ..Self::default()
        }
    }

    pub fn markers(&self) -> &[Waypoint] {
        &self.markers
    }

    pub fn path(&self) -> &[LatLng] {
        &self.path
    }

    pub fn area(&self) -> &[LatLng] {
        &self.area
    }

    pub fn add_marker(&mut self, position: LatLng) -> WaypointId {
        let id = self.ids.next_id();
        self.markers.push(Waypoint::new(id.clone(), position));
        id
    }

    pub fn remove_marker(&mut self, id: &WaypointId) -> bool {
        let len = self.markers.len();
        self.markers.retain(|m| &m.id != id);
        self.markers.len() != len
    }

    /// Removes every marker, the path and the area.
    pub fn reset_markers(&mut self) {
        self.markers.clear();
        self.clear_path();
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
        self.area.clear();
    }

    /// Adopts a successful service response. Markers are reordered
    /// clockwise so they can be drawn as a polygon.
    pub fn apply_plan(&mut self, response: PlanResponse) {
        self.markers = sort_clockwise(&self.markers);
        self.path = response.path.unwrap_or_default();
        self.area = response.area.unwrap_or_default();
    }

    pub async fn plan_path(
        &mut self,
        client: &PlannerClient,
        params: PlanParameters,
    ) -> Result<()> {
        let response = client
            .plan_path(&self.markers, params)
            .await
            .inspect_err(|err| warn!("path planning failed: {}", err))?;
        self.apply_plan(response);
        info!("session has {} path points", self.path.len());
        Ok(())
    }

    pub async fn detect_area(&mut self, client: &PlannerClient) -> Result<()> {
        let response = client
            .detect_area(&self.markers)
            .await
            .inspect_err(|err| warn!("area detection failed: {}", err))?;
        self.apply_plan(response);
        info!("session has {} area points", self.area.len());
        Ok(())
    }

    pub fn area_polygon(&self) -> Option<Polygon> {
        to_polygon(&self.markers)
    }
}
