//! Endpoint names and query-string construction.

use std::fmt;

use reqwest::Url;

use crate::error::MbtaError;

/// One of the realtime v2 query endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Routes,
    RoutesByStop,
    StopsByRoute,
    StopsByLocation,
    ScheduleByStop,
}

impl Endpoint {
    /// Every endpoint this client knows about.
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Routes,
        Endpoint::RoutesByStop,
        Endpoint::StopsByRoute,
        Endpoint::StopsByLocation,
        Endpoint::ScheduleByStop,
    ];

    /// Query name as the API documentation spells it.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Routes => "Routes",
            Endpoint::RoutesByStop => "RoutesByStop",
            Endpoint::StopsByRoute => "StopsByRoute",
            Endpoint::StopsByLocation => "StopsByLocation",
            Endpoint::ScheduleByStop => "ScheduleByStop",
        }
    }

    /// Path segment used in the request URL.
    pub fn path(self) -> String {
        self.name().to_lowercase()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered query parameters.
///
/// Entries keep their insertion order. Setting a name that is already
/// present replaces its value in place. Entries whose value is `None` are
/// kept in the list but never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, Option<String>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter to a present value.
    pub fn with(self, name: impl Into<String>, value: impl ToString) -> Self {
        self.with_opt(name, Some(value))
    }

    /// Set a parameter that may be absent.
    pub fn with_opt(mut self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        self.set(name, value.map(|v| v.to_string()));
        self
    }

    /// Set or replace a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Present parameters, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name.as_str(), v)))
    }

    /// Number of present parameters.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the request URL for `endpoint`.
///
/// Produces `<base>/<endpoint>?api_key=<key>[&name=value]*&format=json`, with
/// the endpoint lowercased and names and values form-urlencoded.
pub fn build_url(
    base_url: &str,
    api_key: &str,
    endpoint: Endpoint,
    params: &Params,
) -> Result<Url, MbtaError> {
    let target = format!("{}/{}", base_url.trim_end_matches('/'), endpoint.path());
    let mut url = Url::parse(&target)
        .map_err(|e| MbtaError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("api_key", api_key);
        for (name, value) in params.iter() {
            query.append_pair(name, value);
        }
        query.append_pair("format", "json");
    }

    Ok(url)
}
