//! Response records produced for a resolved query.
//!
//! A successful resolution produces, in order:
//!
//! ```json
//! [
//!   ["A", "1.2.3.100"],
//!   ["TXT", "GeoScaling config last auto-updated: Thu, 01 Jan 1970 at 00:00:00 UTC"],
//!   ["TXT", "Chosen closest host is Server 1"],
//!   ["TXT", "Request originated from [40,-80]"]
//! ]
//! ```
//!
//! When no host could be chosen the response is the single record `["fail"]`, which consumers
//! treat as "no answer".

use crate::geo::GeoPoint;
use crate::host::Host;
use lazy_static::lazy_static;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// A single DNS-like response record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseRecord {
    A(IpAddr),
    Txt(String),
    Fail,
}

impl ResponseRecord {
    /// The record kind tag: `"A"`, `"TXT"` or `"fail"`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ResponseRecord::A(_) => "A",
            ResponseRecord::Txt(_) => "TXT",
            ResponseRecord::Fail => "fail",
        }
    }
}

impl Serialize for ResponseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseRecord::A(ip) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(self.kind())?;
                seq.serialize_element(&ip.to_string())?;
                seq.end()
            }
            ResponseRecord::Txt(text) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(self.kind())?;
                seq.serialize_element(text)?;
                seq.end()
            }
            ResponseRecord::Fail => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(self.kind())?;
                seq.end()
            }
        }
    }
}

lazy_static! {
    static ref GENERATED_AT_FORMATTER: &'static [FormatItem<'static>] =
        format_description!(
            version = 2,
            "[weekday repr:short], [day] [month repr:short] [year] at [hour]:[minute]:[second] UTC"
        );
}

/// The time the host configuration was generated. Displays in UTC, e.g.
/// `Thu, 01 Jan 1970 at 00:00:00 UTC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedAt(pub OffsetDateTime);

impl fmt::Display for GeneratedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .0
            .to_offset(UtcOffset::UTC)
            .format(*GENERATED_AT_FORMATTER)
            .map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl From<OffsetDateTime> for GeneratedAt {
    fn from(t: OffsetDateTime) -> Self {
        GeneratedAt(t)
    }
}

/// Build the response records for `query` given the selected host, if any.
#[must_use]
pub fn build_response(
    query: &GeoPoint,
    selected: Option<&Host>,
    generated_at: GeneratedAt,
) -> Vec<ResponseRecord> {
    match selected {
        Some(host) => vec![
            ResponseRecord::A(host.address),
            ResponseRecord::Txt(format!("GeoScaling config last auto-updated: {generated_at}")),
            ResponseRecord::Txt(format!("Chosen closest host is {}", host.name)),
            ResponseRecord::Txt(format!(
                "Request originated from [{},{}]",
                query.latitude, query.longitude
            )),
        ],
        None => vec![ResponseRecord::Fail],
    }
}
