//! `stopsbylocation` query: stops near a point.

use serde_json::Value;
use tracing::debug;

use crate::gateway::{Endpoint, Gateway, Params};
use crate::model::{NearbyStops, Stop};

use super::Snapshot;

/// Stops near a latitude/longitude.
///
/// The API returns at most 15 stops, nearest first. The order is kept as
/// received. Use the helpers in [`crate::stops`] to search the list.
///
/// Coordinates are sent exactly as given, so a `stop_lat`/`stop_lon` pair
/// from an earlier response can be passed back unchanged. Floats work too.
#[derive(Debug, Clone)]
pub struct StopsByLocation {
    gateway: Gateway,
    lat: String,
    lon: String,
    snapshot: Snapshot<NearbyStops>,
}

impl StopsByLocation {
    /// Fetch the stops near `lat`, `lon`.
    pub async fn fetch(gateway: Gateway, lat: impl ToString, lon: impl ToString) -> Self {
        let (lat, lon) = (lat.to_string(), lon.to_string());
        let raw = gateway
            .request(Endpoint::StopsByLocation, &params(&lat, &lon))
            .await;
        Self::from_raw(gateway, lat, lon, raw)
    }

    /// Build from a response fetched elsewhere.
    pub fn from_raw(
        gateway: Gateway,
        lat: impl ToString,
        lon: impl ToString,
        raw: Option<Value>,
    ) -> Self {
        Self {
            gateway,
            lat: lat.to_string(),
            lon: lon.to_string(),
            snapshot: Snapshot::new(Endpoint::StopsByLocation, raw),
        }
    }

    /// Fetch the stops near a new point, replacing the cached response.
    pub async fn refresh(&mut self, lat: impl ToString, lon: impl ToString) {
        self.lat = lat.to_string();
        self.lon = lon.to_string();
        debug!(endpoint = %Endpoint::StopsByLocation, lat = %self.lat, lon = %self.lon, "refreshing");
        let raw = self
            .gateway
            .request(Endpoint::StopsByLocation, &params(&self.lat, &self.lon))
            .await;
        self.snapshot = Snapshot::new(Endpoint::StopsByLocation, raw);
    }

    /// The point this object was asked about.
    pub fn location(&self) -> (&str, &str) {
        (&self.lat, &self.lon)
    }

    pub fn raw(&self) -> Option<&Value> {
        self.snapshot.raw()
    }

    /// Stops in the order the API returned them.
    pub fn stop_list(&self) -> &[Stop] {
        self.snapshot
            .data()
            .map(|d| d.stop.as_slice())
            .unwrap_or(&[])
    }

    /// The first stop in the list.
    pub fn nearest(&self) -> Option<&Stop> {
        self.stop_list().first()
    }
}

fn params(lat: &str, lon: &str) -> Params {
    Params::new().with("lat", lat).with("lon", lon)
}
