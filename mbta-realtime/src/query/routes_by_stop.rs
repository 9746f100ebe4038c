//! `routesbystop` query: the routes serving one stop.

use serde_json::Value;
use tracing::debug;

use crate::gateway::{Endpoint, Gateway, Params};
use crate::model::{Identifier, Mode, StopRoutes};

use super::Snapshot;

/// Routes serving a stop, grouped by mode.
///
/// The stop is an [`Identifier`]; callers holding untyped JSON convert it
/// with `Identifier::try_from(&value)?`, which rejects anything but strings
/// and numbers before a request is made.
#[derive(Debug, Clone)]
pub struct RoutesByStop {
    gateway: Gateway,
    stop: Identifier,
    snapshot: Snapshot<StopRoutes>,
}

impl RoutesByStop {
    /// Fetch the routes serving `stop`.
    pub async fn fetch(gateway: Gateway, stop: impl Into<Identifier>) -> Self {
        let stop = stop.into();
        let raw = gateway.request(Endpoint::RoutesByStop, &params(&stop)).await;
        Self::from_raw(gateway, stop, raw)
    }

    /// Build from a response fetched elsewhere.
    pub fn from_raw(gateway: Gateway, stop: impl Into<Identifier>, raw: Option<Value>) -> Self {
        Self {
            gateway,
            stop: stop.into(),
            snapshot: Snapshot::new(Endpoint::RoutesByStop, raw),
        }
    }

    /// Re-fetch for the same stop.
    pub async fn refresh(&mut self) {
        debug!(endpoint = %Endpoint::RoutesByStop, stop = %self.stop, "refreshing");
        let raw = self
            .gateway
            .request(Endpoint::RoutesByStop, &params(&self.stop))
            .await;
        self.snapshot = Snapshot::new(Endpoint::RoutesByStop, raw);
    }

    /// Switch to another stop and fetch it.
    pub async fn refresh_for(&mut self, stop: impl Into<Identifier>) {
        self.stop = stop.into();
        self.refresh().await;
    }

    /// The stop this object was asked about.
    pub fn requested_stop(&self) -> &Identifier {
        &self.stop
    }

    pub fn raw(&self) -> Option<&Value> {
        self.snapshot.raw()
    }

    /// `stop_id` from the response.
    pub fn stop_id(&self) -> Option<&str> {
        self.snapshot.data().and_then(|d| d.stop_id.as_deref())
    }

    /// `stop_name` from the response.
    pub fn stop_name(&self) -> Option<&str> {
        self.snapshot.data().and_then(|d| d.stop_name.as_deref())
    }

    /// Modes serving the stop, each with its routes.
    pub fn modes(&self) -> &[Mode] {
        self.snapshot
            .data()
            .map(|d| d.mode.as_slice())
            .unwrap_or(&[])
    }
}

fn params(stop: &Identifier) -> Params {
    Params::new().with("stop", stop)
}
