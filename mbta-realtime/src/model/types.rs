//! Realtime v2 response DTOs.
//!
//! These types map directly onto the JSON the API returns. Fields the API
//! may omit default to empty, since the only validation done on responses
//! is presence checks.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::de::{lenient_seq, opt_string_or_number, string_or_number};
use super::text::capitalize_words;

/// A transportation category such as "Subway" or "Bus".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Mode {
    /// Human-readable mode name.
    #[serde(deserialize_with = "string_or_number")]
    pub mode_name: String,

    /// GTFS route type ("0" light rail, "1" subway, "2" rail, "3" bus, "4" ferry).
    #[serde(deserialize_with = "string_or_number")]
    pub route_type: String,

    /// Routes belonging to this mode, in API order.
    #[serde(deserialize_with = "lenient_seq")]
    pub route: Vec<Route>,
}

/// A transit line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Route {
    /// GTFS route id, e.g. "Red" or "741".
    #[serde(deserialize_with = "string_or_number")]
    pub route_id: String,

    /// Display name, e.g. "Red Line" or "SL1".
    #[serde(deserialize_with = "string_or_number")]
    pub route_name: String,

    /// "true" when the route should be hidden from route lists.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub route_hide: Option<String>,

    /// Directions with trips. Only present in schedule responses.
    #[serde(deserialize_with = "lenient_seq")]
    pub direction: Vec<Direction>,
}

impl Route {
    /// Route name with each word capitalized.
    pub fn display_name(&self) -> String {
        capitalize_words(&self.route_name)
    }
}

/// One of the two travel directions along a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Direction {
    /// "0" or "1".
    #[serde(deserialize_with = "string_or_number")]
    pub direction_id: String,

    /// e.g. "Southbound".
    #[serde(deserialize_with = "string_or_number")]
    pub direction_name: String,

    /// Stops in travel order. Present in stopsbyroute responses.
    #[serde(deserialize_with = "lenient_seq")]
    pub stop: Vec<Stop>,

    /// Scheduled trips. Present in schedulebystop responses.
    #[serde(deserialize_with = "lenient_seq")]
    pub trip: Vec<Trip>,
}

/// A stop or station.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Stop {
    /// Position along the route (stopsbyroute only).
    #[serde(deserialize_with = "opt_string_or_number")]
    pub stop_order: Option<String>,

    /// GTFS stop id.
    #[serde(deserialize_with = "string_or_number")]
    pub stop_id: String,

    /// Stop name.
    #[serde(deserialize_with = "string_or_number")]
    pub stop_name: String,

    /// GTFS id of the parent station, if any.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub parent_station: Option<String>,

    /// Name of the parent station, if any.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub parent_station_name: Option<String>,

    /// Latitude, as sent by the server.
    #[serde(deserialize_with = "string_or_number")]
    pub stop_lat: String,

    /// Longitude, as sent by the server.
    #[serde(deserialize_with = "string_or_number")]
    pub stop_lon: String,

    /// Distance in miles from the query point (stopsbylocation only).
    #[serde(deserialize_with = "opt_string_or_number")]
    pub distance: Option<String>,
}

/// A scheduled trip at a stop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Trip {
    #[serde(deserialize_with = "string_or_number")]
    pub trip_id: String,

    #[serde(deserialize_with = "string_or_number")]
    pub trip_name: String,

    /// Scheduled arrival, epoch seconds.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub sch_arr_dt: Option<String>,

    /// Scheduled departure, epoch seconds.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub sch_dep_dt: Option<String>,
}

impl Trip {
    /// Scheduled arrival, if present and well formed.
    pub fn scheduled_arrival(&self) -> Option<DateTime<Utc>> {
        self.sch_arr_dt.as_deref().and_then(parse_epoch)
    }

    /// Scheduled departure, if present and well formed.
    pub fn scheduled_departure(&self) -> Option<DateTime<Utc>> {
        self.sch_dep_dt.as_deref().and_then(parse_epoch)
    }
}

fn parse_epoch(raw: &str) -> Option<DateTime<Utc>> {
    let secs: i64 = raw.trim().parse().ok()?;
    DateTime::from_timestamp(secs, 0)
}

/// Response from `routes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteList {
    #[serde(deserialize_with = "lenient_seq")]
    pub mode: Vec<Mode>,
}

/// Response from `routesbystop`.
///
/// Some payloads list the modes under `modes` instead of `mode`. When both
/// are present and `mode` is non-empty, `mode` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "StopRoutesFields")]
pub struct StopRoutes {
    pub stop_id: Option<String>,
    pub stop_name: Option<String>,
    pub mode: Vec<Mode>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct StopRoutesFields {
    #[serde(deserialize_with = "opt_string_or_number")]
    stop_id: Option<String>,

    #[serde(deserialize_with = "opt_string_or_number")]
    stop_name: Option<String>,

    #[serde(deserialize_with = "lenient_seq")]
    mode: Vec<Mode>,

    #[serde(deserialize_with = "lenient_seq")]
    modes: Vec<Mode>,
}

impl From<StopRoutesFields> for StopRoutes {
    fn from(fields: StopRoutesFields) -> Self {
        let mode = if fields.mode.is_empty() {
            fields.modes
        } else {
            fields.mode
        };

        StopRoutes {
            stop_id: fields.stop_id,
            stop_name: fields.stop_name,
            mode,
        }
    }
}

/// Response from `stopsbyroute`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteStops {
    #[serde(deserialize_with = "lenient_seq")]
    pub direction: Vec<Direction>,
}

/// Response from `stopsbylocation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NearbyStops {
    #[serde(deserialize_with = "lenient_seq")]
    pub stop: Vec<Stop>,
}

/// Response from `schedulebystop`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Schedule {
    #[serde(deserialize_with = "opt_string_or_number")]
    pub stop_id: Option<String>,

    #[serde(deserialize_with = "opt_string_or_number")]
    pub stop_name: Option<String>,

    #[serde(deserialize_with = "lenient_seq")]
    pub mode: Vec<Mode>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserialize_route_list() {
        let list: RouteList = serde_json::from_value(json!({
            "mode": [{
                "route_type": "1",
                "mode_name": "Subway",
                "route": [
                    {"route_id": "Red", "route_name": "Red Line"},
                    {"route_id": "Orange", "route_name": "Orange Line", "route_hide": "false"}
                ]
            }]
        }))
        .unwrap();

        assert_eq!(list.mode.len(), 1);
        assert_eq!(list.mode[0].route_type, "1");
        assert_eq!(list.mode[0].route[0].route_hide, None);
        assert_eq!(list.mode[0].route[1].route_hide.as_deref(), Some("false"));
        assert!(list.mode[0].route[0].direction.is_empty());
    }

    #[test]
    fn deserialize_stop_with_numeric_coordinates() {
        let stop: Stop = serde_json::from_value(json!({
            "stop_id": 70061,
            "stop_name": "Alewife",
            "parent_station": "place-alfcl",
            "parent_station_name": "Alewife",
            "stop_lat": 42.3954277,
            "stop_lon": "-71.1424577"
        }))
        .unwrap();

        assert_eq!(stop.stop_id, "70061");
        assert_eq!(stop.stop_lat, "42.3954277");
        assert_eq!(stop.stop_lon, "-71.1424577");
        assert_eq!(stop.distance, None);
    }

    #[test]
    fn stop_routes_accepts_modes_alias() {
        let routes: StopRoutes = serde_json::from_value(json!({
            "stop_id": "70061",
            "stop_name": "Alewife",
            "modes": [{"mode_name": "Bus", "route_type": "3", "route": []}]
        }))
        .unwrap();

        assert_eq!(routes.mode.len(), 1);
        assert_eq!(routes.mode[0].mode_name, "Bus");
    }

    #[test]
    fn stop_routes_prefers_non_empty_mode() {
        let routes: StopRoutes = serde_json::from_value(json!({
            "stop_id": "70061",
            "mode": [{"mode_name": "Subway", "route_type": "1"}],
            "modes": [{"mode_name": "Bus", "route_type": "3"}]
        }))
        .unwrap();
        assert_eq!(routes.mode.len(), 1);
        assert_eq!(routes.mode[0].mode_name, "Subway");

        let routes: StopRoutes = serde_json::from_value(json!({
            "mode": [],
            "modes": [{"mode_name": "Bus", "route_type": "3"}]
        }))
        .unwrap();
        assert_eq!(routes.mode[0].mode_name, "Bus");
    }

    #[test]
    fn null_names_do_not_drop_records() {
        let stops: NearbyStops = serde_json::from_value(json!({
            "stop": [
                {"stop_id": "8279", "stop_name": "Tremont St @ Boylston Station"},
                {"stop_id": "70159", "stop_name": null, "parent_station_name": 7},
                {"stop_id": "place-bomnl", "stop_name": 42}
            ]
        }))
        .unwrap();

        let names: Vec<&str> = stops.stop.iter().map(|s| s.stop_name.as_str()).collect();
        assert_eq!(names, ["Tremont St @ Boylston Station", "", "42"]);
        assert_eq!(stops.stop[1].parent_station_name.as_deref(), Some("7"));

        let schedule: Schedule = serde_json::from_value(json!({
            "stop_name": null,
            "mode": [{
                "mode_name": null,
                "route": [{
                    "route_id": "Red",
                    "direction": [{"direction_name": 0, "trip": [{"trip_id": 1, "trip_name": null}]}]
                }]
            }]
        }))
        .unwrap();
        assert_eq!(schedule.stop_name, None);
        let direction = &schedule.mode[0].route[0].direction[0];
        assert_eq!(direction.direction_name, "0");
        assert_eq!(direction.trip[0].trip_id, "1");
        assert_eq!(direction.trip[0].trip_name, "");
    }

    #[test]
    fn empty_object_is_empty_response() {
        let stops: NearbyStops = serde_json::from_value(json!({})).unwrap();
        assert!(stops.stop.is_empty());
    }

    #[test]
    fn trip_times() {
        let trip = Trip {
            trip_id: "31562340".into(),
            trip_name: "9:05 am from Alewife".into(),
            sch_arr_dt: Some("1489323900".into()),
            sch_dep_dt: Some("garbage".into()),
        };

        assert_eq!(
            trip.scheduled_arrival().unwrap().to_rfc3339(),
            "2017-03-12T13:05:00+00:00"
        );
        assert_eq!(trip.scheduled_departure(), None);
    }

    #[test]
    fn route_display_name() {
        let route = Route {
            route_id: "Green-B".into(),
            route_name: "green line b".into(),
            ..Default::default()
        };
        assert_eq!(route.display_name(), "Green Line B");
    }
}
