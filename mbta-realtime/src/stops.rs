//! Stop lookup helpers.
//!
//! Linear scans over a slice of stops, as returned by `StopsByRoute` and
//! `StopsByLocation`. Each returns the first match in slice order.

use crate::model::Stop;

/// First stop whose `stop_id` equals `id`.
pub fn find_stop_by_id<'a>(stops: &'a [Stop], id: &str) -> Option<&'a Stop> {
    stops.iter().find(|stop| stop.stop_id == id)
}

/// First stop whose name matches `name`, ignoring whitespace and case.
///
/// "Park Street", "parkstreet" and "PARK  STREET" all match each other.
pub fn find_stop_by_name<'a>(stops: &'a [Stop], name: &str) -> Option<&'a Stop> {
    let wanted = fold_name(name);
    stops.iter().find(|stop| fold_name(&stop.stop_name) == wanted)
}

/// First stop whose `parent_station` equals `station`.
pub fn find_stop_by_parent<'a>(stops: &'a [Stop], station: &str) -> Option<&'a Stop> {
    stops
        .iter()
        .find(|stop| stop.parent_station.as_deref() == Some(station))
}

/// First stop whose `parent_station_name` equals `name`, ignoring case.
pub fn find_stop_by_parent_name<'a>(stops: &'a [Stop], name: &str) -> Option<&'a Stop> {
    let wanted = name.to_lowercase();
    stops.iter().find(|stop| {
        stop.parent_station_name
            .as_deref()
            .is_some_and(|parent| parent.to_lowercase() == wanted)
    })
}

/// First stop at exactly `lat`, `lon`, compared as the server sent them.
pub fn find_stop_by_coords<'a>(stops: &'a [Stop], lat: &str, lon: &str) -> Option<&'a Stop> {
    stops
        .iter()
        .find(|stop| stop.stop_lat == lat && stop.stop_lon == lon)
}

/// Distance of the first stop with `stop_id` equal to `id`.
pub fn distance_by_id<'a>(stops: &'a [Stop], id: &str) -> Option<&'a str> {
    find_stop_by_id(stops, id).and_then(|stop| stop.distance.as_deref())
}

/// Distance of the first stop named exactly `name`.
pub fn distance_by_name<'a>(stops: &'a [Stop], name: &str) -> Option<&'a str> {
    stops
        .iter()
        .find(|stop| stop.stop_name == name)
        .and_then(|stop| stop.distance.as_deref())
}

/// Distance of the first stop at exactly `lat`, `lon`.
pub fn distance_by_coords<'a>(stops: &'a [Stop], lat: &str, lon: &str) -> Option<&'a str> {
    find_stop_by_coords(stops, lat, lon).and_then(|stop| stop.distance.as_deref())
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
