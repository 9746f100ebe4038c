//! `routes` query: every mode and the routes in it.

use serde_json::Value;
use tracing::debug;

use crate::error::MbtaError;
use crate::gateway::{Endpoint, Gateway, Params};
use crate::model::{Identifier, Mode, Route, RouteList, RouteRef};

use super::Snapshot;

/// The full mode and route list.
///
/// Route and mode lookups compare case-insensitively and return the first
/// match in response order.
#[derive(Debug, Clone)]
pub struct Routes {
    gateway: Gateway,
    snapshot: Snapshot<RouteList>,
}

impl Routes {
    /// Fetch the route list.
    pub async fn fetch(gateway: Gateway) -> Self {
        let raw = gateway.request(Endpoint::Routes, &Params::new()).await;
        Self::from_raw(gateway, raw)
    }

    /// Build from a response fetched elsewhere.
    pub fn from_raw(gateway: Gateway, raw: Option<Value>) -> Self {
        Self {
            gateway,
            snapshot: Snapshot::new(Endpoint::Routes, raw),
        }
    }

    /// Re-fetch the route list, replacing the cached response.
    pub async fn refresh(&mut self) {
        debug!(endpoint = %Endpoint::Routes, "refreshing");
        let raw = self.gateway.request(Endpoint::Routes, &Params::new()).await;
        self.snapshot = Snapshot::new(Endpoint::Routes, raw);
    }

    /// The response as returned by the API, if the last fetch succeeded.
    pub fn raw(&self) -> Option<&Value> {
        self.snapshot.raw()
    }

    /// Every mode, in response order. Empty if the last fetch failed.
    pub fn modes(&self) -> &[Mode] {
        self.snapshot
            .data()
            .map(|list| list.mode.as_slice())
            .unwrap_or(&[])
    }

    /// Name of every mode, in response order.
    pub fn mode_names(&self) -> Vec<&str> {
        self.modes().iter().map(|m| m.mode_name.as_str()).collect()
    }

    /// Every mode named exactly `name`. Several modes can share a name
    /// (light rail and heavy rail are both "Subway").
    pub fn modes_by_name(&self, name: &str) -> Vec<&Mode> {
        self.modes().iter().filter(|m| m.mode_name == name).collect()
    }

    /// Mode owning the first route with this id.
    pub fn mode_by_route_id(&self, id: impl Into<Identifier>) -> Option<&Mode> {
        let id = id.into();
        self.modes()
            .iter()
            .find(|m| m.route.iter().any(|r| id.matches(&r.route_id)))
    }

    /// First mode with this GTFS route type.
    pub fn mode_by_route_type(&self, route_type: impl Into<Identifier>) -> Option<&Mode> {
        let route_type = route_type.into();
        self.modes()
            .iter()
            .find(|m| route_type.matches(&m.route_type))
    }

    /// Mode owning the first route with this name.
    pub fn mode_by_route_name(&self, name: impl Into<Identifier>) -> Option<&Mode> {
        let name = name.into();
        self.modes()
            .iter()
            .find(|m| m.route.iter().any(|r| name.matches(&r.route_name)))
    }

    /// Mode owning a route with the same name as `route`.
    pub fn mode_by_route(&self, route: &Route) -> Option<&Mode> {
        self.mode_by_route_name(&route.route_name)
    }

    /// Every route of every mode named `name`.
    pub fn routes_for_mode(&self, name: &str) -> Vec<&Route> {
        self.modes_by_name(name)
            .into_iter()
            .flat_map(|m| &m.route)
            .collect()
    }

    /// First route with this id.
    pub fn route_by_id(&self, id: impl Into<Identifier>) -> Option<&Route> {
        self.find_route_by_id(&id.into())
    }

    /// First route with this name.
    pub fn route_by_name(&self, name: impl Into<Identifier>) -> Option<&Route> {
        self.find_route_by_name(&name.into())
    }

    /// The `route_hide` flag of a route.
    ///
    /// A record answers from its own field. Ids and names are resolved
    /// against the cached list first, and a [`RouteRef::Key`] tries the name
    /// before the id. A reference that resolves to no route is
    /// [`MbtaError::InvalidArgument`].
    pub fn check_hide(&self, route: impl Into<RouteRef>) -> Result<Option<String>, MbtaError> {
        let resolved = match route.into() {
            RouteRef::Record(route) => return Ok(route.route_hide),
            RouteRef::Id(id) => self.find_route_by_id(&id).ok_or(id),
            RouteRef::Name(name) => self.find_route_by_name(&name).ok_or(name),
            RouteRef::Key(key) => self
                .find_route_by_name(&key)
                .or_else(|| self.find_route_by_id(&key))
                .ok_or(key),
        };

        match resolved {
            Ok(route) => Ok(route.route_hide.clone()),
            Err(key) => Err(MbtaError::InvalidArgument(format!(
                "{key:?} is neither a known route id nor a route name"
            ))),
        }
    }

    fn routes(&self) -> impl Iterator<Item = &Route> {
        self.modes().iter().flat_map(|m| &m.route)
    }

    fn find_route_by_id(&self, id: &Identifier) -> Option<&Route> {
        self.routes().find(|r| id.matches(&r.route_id))
    }

    fn find_route_by_name(&self, name: &Identifier) -> Option<&Route> {
        self.routes().find(|r| name.matches(&r.route_name))
    }
}
