//! Identifier and route reference types.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::MbtaError;

use super::de::number_string;
use super::types::Route;

/// A route, mode, stop or direction identifier.
///
/// The API treats identifiers as strings. Integers are accepted and
/// stringified, so `Identifier::from(70061)` and `Identifier::from("70061")`
/// are the same value.
///
/// # Examples
///
/// ```
/// use mbta_realtime::model::Identifier;
///
/// let red = Identifier::from("Red");
/// assert!(red.matches("red"));
/// assert!(!red.matches("Orange"));
///
/// assert_eq!(Identifier::from(741), Identifier::from("741"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a field from a response.
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other || self.0.to_lowercase() == other.to_lowercase()
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier(s)
    }
}

impl From<&String> for Identifier {
    fn from(s: &String) -> Self {
        Identifier(s.clone())
    }
}

impl From<&Identifier> for Identifier {
    fn from(id: &Identifier) -> Self {
        id.clone()
    }
}

macro_rules! identifier_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Identifier {
                fn from(n: $t) -> Self {
                    Identifier(n.to_string())
                }
            }
        )*
    };
}

identifier_from_int!(u8, u16, u32, u64, usize, i32, i64);

impl TryFrom<&Value> for Identifier {
    type Error = MbtaError;

    /// Accepts JSON strings and numbers; every other shape is rejected.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Identifier(s.clone())),
            Value::Number(n) => Ok(Identifier(number_string(n))),
            other => Err(MbtaError::InvalidArgument(format!(
                "expected a string or number identifier, got {}",
                json_kind(other)
            ))),
        }
    }
}

/// Reference to a route, as accepted by `Routes::check_hide`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteRef {
    /// A route record already in hand.
    Record(Route),
    /// A route id, matched case-insensitively.
    Id(Identifier),
    /// A route name, matched case-insensitively.
    Name(Identifier),
    /// Either: resolved as a route name first, then as a route id.
    Key(Identifier),
}

impl RouteRef {
    pub fn id(id: impl Into<Identifier>) -> Self {
        RouteRef::Id(id.into())
    }

    pub fn name(name: impl Into<Identifier>) -> Self {
        RouteRef::Name(name.into())
    }
}

impl From<Route> for RouteRef {
    fn from(route: Route) -> Self {
        RouteRef::Record(route)
    }
}

impl From<&Route> for RouteRef {
    fn from(route: &Route) -> Self {
        RouteRef::Record(route.clone())
    }
}

impl From<Identifier> for RouteRef {
    fn from(key: Identifier) -> Self {
        RouteRef::Key(key)
    }
}

impl From<&str> for RouteRef {
    fn from(key: &str) -> Self {
        RouteRef::Key(key.into())
    }
}

impl From<String> for RouteRef {
    fn from(key: String) -> Self {
        RouteRef::Key(key.into())
    }
}

macro_rules! route_ref_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RouteRef {
                fn from(n: $t) -> Self {
                    RouteRef::Key(n.into())
                }
            }
        )*
    };
}

route_ref_from_int!(u8, u16, u32, u64, usize, i32, i64);

impl TryFrom<&Value> for RouteRef {
    type Error = MbtaError;

    /// Strings and numbers become [`RouteRef::Key`]; objects carrying a
    /// `route_hide` field become [`RouteRef::Record`].
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(_) | Value::Number(_) => Identifier::try_from(value).map(RouteRef::Key),
            Value::Object(fields) if fields.contains_key("route_hide") => Route::deserialize(value)
                .map(RouteRef::Record)
                .map_err(|e| MbtaError::InvalidArgument(format!("malformed route record: {e}"))),
            Value::Object(_) => Err(MbtaError::InvalidArgument(
                "route record has no route_hide field".to_string(),
            )),
            other => Err(MbtaError::InvalidArgument(format!(
                "expected a route record, id or name, got {}",
                json_kind(other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
