//! `schedulebystop` query: scheduled trips at a stop.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::error::MbtaError;
use crate::gateway::{Endpoint, Gateway, Params};
use crate::model::{Direction, Identifier, Mode, Route, Schedule, Trip};

use super::Snapshot;

/// Largest `max_trips` the API accepts.
const MAX_TRIPS_LIMIT: u32 = 100;

/// Parameters for a `schedulebystop` request.
///
/// Only the stop is required. Parameters are sent in the order
/// stop, route, direction, datetime, max_time, max_trips.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    stop: Identifier,
    route: Option<Identifier>,
    direction: Option<u8>,
    datetime: Option<DateTime<Utc>>,
    max_time: Option<u32>,
    max_trips: Option<u32>,
}

impl ScheduleRequest {
    /// Schedule for `stop`, with every optional parameter left to the API default.
    pub fn new(stop: impl Into<Identifier>) -> Self {
        Self {
            stop: stop.into(),
            route: None,
            direction: None,
            datetime: None,
            max_time: None,
            max_trips: None,
        }
    }

    /// Only trips on this route.
    pub fn route(mut self, route: impl Into<Identifier>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Only trips in this direction (0 or 1). Needs a route to take effect.
    pub fn direction(mut self, direction: u8) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Trips after this instant rather than after now.
    pub fn datetime(mut self, at: DateTime<Utc>) -> Self {
        self.datetime = Some(at);
        self
    }

    /// Window of time to return trips for, in minutes.
    pub fn max_time(mut self, minutes: u32) -> Self {
        self.max_time = Some(minutes);
        self
    }

    /// Number of trips to return, 1 to 100.
    pub fn max_trips(mut self, trips: u32) -> Self {
        self.max_trips = Some(trips);
        self
    }

    pub fn stop(&self) -> &Identifier {
        &self.stop
    }

    /// Validate and serialize. `datetime` is sent as epoch seconds.
    pub fn to_params(&self) -> Result<Params, MbtaError> {
        if let Some(direction) = self.direction
            && direction > 1
        {
            return Err(MbtaError::InvalidArgument(format!(
                "direction must be 0 or 1, got {direction}"
            )));
        }

        if let Some(trips) = self.max_trips
            && !(1..=MAX_TRIPS_LIMIT).contains(&trips)
        {
            return Err(MbtaError::InvalidArgument(format!(
                "max_trips must be between 1 and {MAX_TRIPS_LIMIT}, got {trips}"
            )));
        }

        Ok(Params::new()
            .with("stop", &self.stop)
            .with_opt("route", self.route.as_ref())
            .with_opt("direction", self.direction)
            .with_opt("datetime", self.datetime.map(|at| at.timestamp()))
            .with_opt("max_time", self.max_time)
            .with_opt("max_trips", self.max_trips))
    }
}

/// One trip, with the mode, route and direction it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTrip<'a> {
    pub mode: &'a Mode,
    pub route: &'a Route,
    pub direction: &'a Direction,
    pub trip: &'a Trip,
}

/// Scheduled arrivals and departures at a stop.
#[derive(Debug, Clone)]
pub struct ScheduleByStop {
    gateway: Gateway,
    request: ScheduleRequest,
    snapshot: Snapshot<Schedule>,
}

impl ScheduleByStop {
    /// Fetch the schedule described by `request`.
    ///
    /// Fails without making a request if the parameters are out of range.
    pub async fn fetch(gateway: Gateway, request: ScheduleRequest) -> Result<Self, MbtaError> {
        let params = request.to_params()?;
        let raw = gateway.request(Endpoint::ScheduleByStop, &params).await;
        Ok(Self::from_raw(gateway, request, raw))
    }

    /// Build from a response fetched elsewhere.
    pub fn from_raw(gateway: Gateway, request: ScheduleRequest, raw: Option<Value>) -> Self {
        Self {
            gateway,
            request,
            snapshot: Snapshot::new(Endpoint::ScheduleByStop, raw),
        }
    }

    /// Fetch with a new parameter set, replacing the cached response.
    ///
    /// On invalid parameters the object is left untouched.
    pub async fn refresh(&mut self, request: ScheduleRequest) -> Result<(), MbtaError> {
        let params = request.to_params()?;
        debug!(endpoint = %Endpoint::ScheduleByStop, stop = %request.stop, "refreshing");
        let raw = self.gateway.request(Endpoint::ScheduleByStop, &params).await;
        self.request = request;
        self.snapshot = Snapshot::new(Endpoint::ScheduleByStop, raw);
        Ok(())
    }

    /// Parameters of the last fetch.
    pub fn request(&self) -> &ScheduleRequest {
        &self.request
    }

    /// The schedule as returned by the API.
    pub fn raw(&self) -> Option<&Value> {
        self.snapshot.raw()
    }

    /// Typed view of the schedule.
    pub fn schedule(&self) -> Option<&Schedule> {
        self.snapshot.data()
    }

    /// Every trip, in response order.
    pub fn trips(&self) -> Vec<ScheduledTrip<'_>> {
        let Some(schedule) = self.schedule() else {
            return Vec::new();
        };

        let mut trips = Vec::new();
        for mode in &schedule.mode {
            for route in &mode.route {
                for direction in &route.direction {
                    for trip in &direction.trip {
                        trips.push(ScheduledTrip {
                            mode,
                            route,
                            direction,
                            trip,
                        });
                    }
                }
            }
        }
        trips
    }
}
