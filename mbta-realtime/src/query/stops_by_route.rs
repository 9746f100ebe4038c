//! `stopsbyroute` query: the stops along each direction of a route.

use serde_json::Value;
use tracing::debug;

use crate::gateway::{Endpoint, Gateway, Params};
use crate::model::{Direction, Identifier, RouteStops, Stop};

use super::Snapshot;

/// Stops along a route, one ordered list per direction.
#[derive(Debug, Clone)]
pub struct StopsByRoute {
    gateway: Gateway,
    route: Identifier,
    snapshot: Snapshot<RouteStops>,
}

impl StopsByRoute {
    /// Fetch the stops of `route`.
    pub async fn fetch(gateway: Gateway, route: impl Into<Identifier>) -> Self {
        let route = route.into();
        let raw = gateway.request(Endpoint::StopsByRoute, &params(&route)).await;
        Self::from_raw(gateway, route, raw)
    }

    /// Build from a response fetched elsewhere.
    pub fn from_raw(gateway: Gateway, route: impl Into<Identifier>, raw: Option<Value>) -> Self {
        Self {
            gateway,
            route: route.into(),
            snapshot: Snapshot::new(Endpoint::StopsByRoute, raw),
        }
    }

    /// Re-fetch for the same route.
    pub async fn refresh(&mut self) {
        debug!(endpoint = %Endpoint::StopsByRoute, route = %self.route, "refreshing");
        let raw = self
            .gateway
            .request(Endpoint::StopsByRoute, &params(&self.route))
            .await;
        self.snapshot = Snapshot::new(Endpoint::StopsByRoute, raw);
    }

    /// Switch to another route and fetch it.
    pub async fn refresh_for(&mut self, route: impl Into<Identifier>) {
        self.route = route.into();
        self.refresh().await;
    }

    /// The route this object was asked about.
    pub fn requested_route(&self) -> &Identifier {
        &self.route
    }

    pub fn raw(&self) -> Option<&Value> {
        self.snapshot.raw()
    }

    /// Every direction, in response order.
    pub fn directions(&self) -> &[Direction] {
        self.snapshot
            .data()
            .map(|d| d.direction.as_slice())
            .unwrap_or(&[])
    }

    /// First direction whose `direction_id` is exactly `id`.
    pub fn direction_by_id(&self, id: impl Into<Identifier>) -> Option<&Direction> {
        let id = id.into();
        self.directions()
            .iter()
            .find(|d| d.direction_id == id.as_str())
    }

    /// First direction named exactly `name`.
    pub fn direction_by_name(&self, name: &str) -> Option<&Direction> {
        self.directions().iter().find(|d| d.direction_name == name)
    }

    /// Stops of the direction with this id.
    ///
    /// `None` when no such direction exists, which is distinct from a
    /// direction that has no stops.
    pub fn stops_by_direction_id(&self, id: impl Into<Identifier>) -> Option<&[Stop]> {
        self.direction_by_id(id).map(|d| d.stop.as_slice())
    }

    /// Stops of the direction with this name. `None` when no such direction exists.
    pub fn stops_by_direction_name(&self, name: &str) -> Option<&[Stop]> {
        self.direction_by_name(name).map(|d| d.stop.as_slice())
    }
}

fn params(route: &Identifier) -> Params {
    Params::new().with("route", route)
}
