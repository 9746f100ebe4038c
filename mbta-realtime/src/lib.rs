//! MBTA realtime v2 API client.
//!
//! Wraps the `routes`, `routesbystop`, `stopsbyroute`, `stopsbylocation`
//! and `schedulebystop` queries. Each query object fetches once when built,
//! caches the response, and answers lookups from the cache until refreshed.
//!
//! ```no_run
//! use mbta_realtime::{Config, Gateway, query::Routes};
//!
//! # async fn run() -> Result<(), mbta_realtime::MbtaError> {
//! let gateway = Gateway::new(Config::from_env()?)?;
//! let routes = Routes::fetch(gateway).await;
//! for name in routes.mode_names() {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod query;
pub mod stops;

pub use config::Config;
pub use error::MbtaError;
pub use gateway::{Endpoint, Gateway, Params};
