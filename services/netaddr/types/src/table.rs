//! Longest-prefix-match route table

use netaddr_literal::Family;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::address::Address;
use crate::route::Route;

/// Route table mapping networks to values.
///
/// Entries are kept in route order (longest prefix first), so the first
/// entry that contains an address is its longest-prefix match.
#[derive(Debug, Clone)]
pub struct RouteTable<F: Family, T> {
    routes: BTreeMap<Route<F>, T>,
}

impl<F: Family, T> RouteTable<F, T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            routes: BTreeMap::new(),
        }
    }

    /// Add or replace a route, returning the value it replaced
    pub fn insert(&mut self, route: Route<F>, value: T) -> Option<T> {
        debug!("Adding route {}", route);
        self.routes.insert(route, value)
    }

    /// Remove a route
    pub fn remove(&mut self, route: &Route<F>) -> Option<T> {
        let removed = self.routes.remove(route);
        if removed.is_some() {
            debug!("Removed route {}", route);
        }
        removed
    }

    /// Value stored for exactly this route
    pub fn get(&self, route: &Route<F>) -> Option<&T> {
        self.routes.get(route)
    }

    /// Most specific route containing `address`
    pub fn lookup(&self, address: &Address<F>) -> Option<(&Route<F>, &T)> {
        let found = self.routes.iter().find(|(route, _)| route.contains(address));
        match found {
            Some((route, _)) => debug!("Matched {} via {}", address, route),
            None => debug!("No route to {}", address),
        }
        found
    }

    /// Every route containing `address`, most specific first
    pub fn matches<'a>(
        &'a self,
        address: &'a Address<F>,
    ) -> impl Iterator<Item = (&'a Route<F>, &'a T)> + 'a {
        self.routes
            .iter()
            .filter(move |(route, _)| route.contains(address))
    }

    /// Routes in table order
    pub fn iter(&self) -> impl Iterator<Item = (&Route<F>, &T)> {
        self.routes.iter()
    }

    /// Number of routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Remove all routes
    pub fn clear(&mut self) {
        self.routes.clear();
        info!("Route table cleared");
    }
}

impl<F: Family, T> Default for RouteTable<F, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Family, T> FromIterator<(Route<F>, T)> for RouteTable<F, T> {
    fn from_iter<I: IntoIterator<Item = (Route<F>, T)>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}
