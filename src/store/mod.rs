//! Fixed-capacity route table.
//!
//! Routes are undirected: `{a, b}` and `{b, a}` name the same slot, and
//! location names compare case-insensitively. A new pair takes the next
//! free slot; re-adding an existing pair overwrites it in place. Slots are
//! never freed.

mod route;

pub use route::{Distance, Location, Route};

use thiserror::Error;
use tracing::debug;

/// Number of slots in a route store.
pub const ROUTE_CAPACITY: usize = 10;

/// Every slot is populated and the pair is not already stored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("all route slots are in use")]
pub struct StoreFull;

/// Outcome of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new pair was stored in a free slot.
    Added {
        /// Slot index the route landed in.
        slot: usize,
    },
    /// An existing pair was overwritten.
    Updated {
        /// Slot index of the existing route.
        slot: usize,
        /// Distance that was replaced.
        previous: Distance,
    },
}

/// In-memory table of up to [`ROUTE_CAPACITY`] routes.
#[derive(Debug)]
pub struct RouteStore {
    slots: Vec<Route>,
}

impl Default for RouteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(ROUTE_CAPACITY),
        }
    }

    /// Returns the distance stored for the pair `{a, b}`, if any.
    pub fn find(&self, a: &Location, b: &Location) -> Option<&Distance> {
        self.position(a, b).map(|slot| &self.slots[slot].distance)
    }

    /// Stores a route for the pair `{a, b}`.
    ///
    /// An existing route for the pair is overwritten in its original slot,
    /// taking the new endpoint spelling and distance. Otherwise the route
    /// takes the next free slot, or fails with [`StoreFull`] when every
    /// slot is populated.
    pub fn insert(
        &mut self,
        a: Location,
        b: Location,
        distance: Distance,
    ) -> Result<InsertOutcome, StoreFull> {
        if let Some(slot) = self.position(&a, &b) {
            debug!(slot, start = %a, end = %b, %distance, "Overwriting route");
            let replaced = std::mem::replace(
                &mut self.slots[slot],
                Route {
                    start: a,
                    end: b,
                    distance,
                },
            );
            return Ok(InsertOutcome::Updated {
                slot,
                previous: replaced.distance,
            });
        }

        if self.slots.len() >= ROUTE_CAPACITY {
            return Err(StoreFull);
        }

        let slot = self.slots.len();
        debug!(slot, start = %a, end = %b, %distance, "Added route");
        self.slots.push(Route {
            start: a,
            end: b,
            distance,
        });
        Ok(InsertOutcome::Added { slot })
    }

    /// Returns the number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no route has been stored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the total number of slots.
    pub fn capacity(&self) -> usize {
        ROUTE_CAPACITY
    }

    /// Iterates populated slots in slot order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.slots.iter()
    }

    fn position(&self, a: &Location, b: &Location) -> Option<usize> {
        self.slots.iter().position(|route| route.connects(a, b))
    }
}
