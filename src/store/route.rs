//! Route record types.

use std::fmt;

use crate::error::{Result, RouteStoreError};

/// A location name.
///
/// Names are opaque and compared with ASCII case folding. The original
/// spelling is kept for display. A `Location` is never empty.
#[derive(Debug, Clone)]
pub struct Location(String);

impl Location {
    /// Creates a location, rejecting empty names.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RouteStoreError::EmptyEndpoint);
        }
        Ok(Self(name))
    }

    /// Returns the name as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if both names are equal ignoring ASCII case.
    pub fn matches(&self, other: &Location) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A positive route distance in kilometres.
///
/// The token the user typed is kept alongside the value and is what gets
/// displayed, so `007` reads back as `007`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distance {
    km: u32,
    text: String,
}

impl Distance {
    /// Creates a distance, returning `None` for zero.
    pub fn new(km: u32) -> Option<Self> {
        (km > 0).then(|| Self {
            km,
            text: km.to_string(),
        })
    }

    /// Parses a distance token.
    ///
    /// The token must be a whole 32-bit signed integer greater than zero
    /// with nothing trailing it. A leading `+` is accepted.
    pub fn parse(token: &str) -> Option<Self> {
        let value = token.parse::<i32>().ok()?;
        let km = u32::try_from(value).ok().filter(|km| *km > 0)?;
        Some(Self {
            km,
            text: token.to_string(),
        })
    }

    /// Returns the distance in kilometres.
    pub fn km(&self) -> u32 {
        self.km
    }

    /// Returns the distance as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A stored route between two locations.
#[derive(Debug, Clone)]
pub struct Route {
    /// Start location as last entered.
    pub start: Location,
    /// End location as last entered.
    pub end: Location,
    /// Distance between the two.
    pub distance: Distance,
}

impl Route {
    /// Returns true if this route joins `a` and `b` in either direction.
    pub fn connects(&self, a: &Location, b: &Location) -> bool {
        (self.start.matches(a) && self.end.matches(b))
            || (self.start.matches(b) && self.end.matches(a))
    }
}
