//! geocrab
//!
//! Picks the configured host nearest to a requester's location and describes the answer as
//! DNS-like records: an `A` record for the chosen host plus informational `TXT` records.
//!
//! Distances are great-circle distances computed with the [spherical law of cosines] over a
//! sphere of radius [`geo::EARTH_RADIUS_KM`]. Hosts are scanned in configuration order and the
//! first of several equally distant hosts wins.
//!
//! ```
//! use geocrab::{build_response, select_nearest, GeoPoint, Host, ResponseRecord};
//! use std::net::{IpAddr, Ipv4Addr};
//! use time::OffsetDateTime;
//!
//! let hosts = vec![
//!     Host::new("Server 1", GeoPoint::new(40.0, -80.0), IpAddr::V4(Ipv4Addr::new(1, 2, 3, 100))),
//!     Host::new("Server 2", GeoPoint::new(30.0, 20.0), IpAddr::V4(Ipv4Addr::new(1, 2, 3, 101))),
//! ];
//! let query = GeoPoint::new(30.0, 20.0);
//! let records = build_response(
//!     &query,
//!     select_nearest(&query, &hosts),
//!     OffsetDateTime::UNIX_EPOCH.into(),
//! );
//! assert_eq!(records[0], ResponseRecord::A(IpAddr::V4(Ipv4Addr::new(1, 2, 3, 101))));
//! ```
//!
//! [spherical law of cosines]: https://en.wikipedia.org/wiki/Great-circle_distance#Formulae
//!
#![warn(clippy::pedantic)]

pub mod config;
pub mod dns;
pub mod error;
pub mod geo;
pub mod host;
pub mod resolver;
pub mod response;

pub use config::{Config, SharedConfig};
pub use geo::{distance, GeoPoint};
pub use host::{select_nearest, Host};
pub use resolver::Resolver;
pub use response::{build_response, GeneratedAt, ResponseRecord};
