//! Query objects, one per realtime v2 endpoint.
//!
//! Each object fetches on construction, keeps the last response, and answers
//! lookups from memory. `refresh` replaces the cached response wholesale;
//! a failed refresh leaves the object empty rather than holding stale data.

mod routes;
mod routes_by_stop;
mod schedule_by_stop;
mod stops_by_location;
mod stops_by_route;

pub use routes::Routes;
pub use routes_by_stop::RoutesByStop;
pub use schedule_by_stop::{ScheduleByStop, ScheduleRequest, ScheduledTrip};
pub use stops_by_location::StopsByLocation;
pub use stops_by_route::StopsByRoute;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::gateway::Endpoint;

/// The last response from one endpoint: verbatim JSON and its typed view.
#[derive(Debug, Clone)]
struct Snapshot<T> {
    raw: Option<Value>,
    data: Option<T>,
}

impl<T: DeserializeOwned> Snapshot<T> {
    fn new(endpoint: Endpoint, raw: Option<Value>) -> Self {
        let data = raw.as_ref().and_then(|value| match T::deserialize(value) {
            Ok(data) => Some(data),
            Err(e) => {
                warn!(%endpoint, error = %e, "response does not have the expected shape");
                None
            }
        });

        Self { raw, data }
    }
}

impl<T> Snapshot<T> {
    fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }

    fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
