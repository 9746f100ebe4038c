//! Typed views of realtime v2 responses.
//!
//! Query objects keep the raw JSON they fetched and deserialize it into
//! these types for lookups. Inputs that may be either an id or a name, or
//! that arrive as untyped JSON, are modelled as [`Identifier`] and
//! [`RouteRef`].

mod de;
mod ident;
mod text;
mod types;

pub use ident::{Identifier, RouteRef};
pub use text::capitalize_words;
pub use types::{
    Direction, Mode, NearbyStops, Route, RouteList, RouteStops, Schedule, Stop, StopRoutes, Trip,
};
