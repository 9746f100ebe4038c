//! Request gateway for the MBTA realtime v2 API.
//!
//! Every request has the shape
//! `GET <base>/<endpoint>?api_key=<key>[&name=value]*&format=json`.
//! A successful response is HTTP 200 with a JSON body; everything else is
//! reported as "no data" to the query objects.

mod client;
mod params;

pub use client::Gateway;
pub use params::{Endpoint, Params, build_url};
