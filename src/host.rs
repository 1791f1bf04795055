//! Configured hosts and nearest host selection.

use crate::geo::{distance, GeoPoint};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A host that may be chosen to answer a query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Host {
    pub name: String,
    #[serde(flatten)]
    pub location: GeoPoint,
    #[serde(rename = "ip")]
    pub address: IpAddr,
}

impl Host {
    #[must_use]
    pub fn new(name: impl Into<String>, location: GeoPoint, address: IpAddr) -> Self {
        Host {
            name: name.into(),
            location,
            address,
        }
    }
}

/// Return the host closest to `query`, or `None` if `hosts` is empty.
///
/// When two hosts are equally distant the one appearing first in `hosts` wins.
#[must_use]
pub fn select_nearest<'a>(query: &GeoPoint, hosts: &'a [Host]) -> Option<&'a Host> {
    nearest_with_distance(query, hosts).map(|(host, _)| host)
}

/// Like [`select_nearest`], also returning the distance to the chosen host in kilometres.
#[must_use]
pub fn nearest_with_distance<'a>(query: &GeoPoint, hosts: &'a [Host]) -> Option<(&'a Host, f64)> {
    let mut minimum_distance = f64::INFINITY;
    let mut closest_host = None;
    for host in hosts {
        let distance_km = distance(query, &host.location);
        if distance_km < minimum_distance {
            minimum_distance = distance_km;
            closest_host = Some(host);
        }
    }
    closest_host.map(|host| (host, minimum_distance))
}
