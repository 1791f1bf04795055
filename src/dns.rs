//! Mapping of [`ResponseRecord`]s onto DNS resource records.
//!
//! geocrab does not serve DNS itself. These helpers produce the [`trust_dns_proto`] records an
//! authoritative server would answer with:
//!
//! * `A` records become `A` (IPv4 addresses) or `AAAA` (IPv6 addresses) records.
//! * `TXT` records become `TXT` records. Text longer than 255 bytes is split into several
//!   character-strings within the one record.
//! * `fail` produces no records at all, leaving the server to fall back to its default answer.
//!
//! E.g. resolving a query from `[40,-80]` against a config with `"name": "geo.example.com."`
//! and `"record_ttl": 60`, generated at the Unix epoch, yields:
//!
//! ```text
//! geo.example.com. 60 IN A   1.2.3.100
//! geo.example.com. 60 IN TXT "GeoScaling config last auto-updated: Thu, 01 Jan 1970 at 00:00:00 UTC"
//! geo.example.com. 60 IN TXT "Chosen closest host is Server 1"
//! geo.example.com. 60 IN TXT "Request originated from [40,-80]"
//! ```

use crate::response::ResponseRecord;
use std::net::IpAddr;
use std::time::Duration;
use trust_dns_client::rr::LowerName;
use trust_dns_proto::rr::rdata::TXT;
use trust_dns_proto::rr::{RData, Record};

/// Maximum length in bytes of a single TXT character-string (RFC 1035 §3.3).
const TXT_STRING_MAX_LEN: usize = 255;

/// The [`RData`] for a response record, or `None` for [`ResponseRecord::Fail`].
#[must_use]
pub fn rdata(record: &ResponseRecord) -> Option<RData> {
    match record {
        ResponseRecord::A(IpAddr::V4(ipv4_addr)) => Some(RData::A(*ipv4_addr)),
        ResponseRecord::A(IpAddr::V6(ipv6_addr)) => Some(RData::AAAA(*ipv6_addr)),
        ResponseRecord::Txt(text) => Some(RData::TXT(TXT::new(txt_strings(text)))),
        ResponseRecord::Fail => None,
    }
}

/// Build the DNS records answering for `name` from a resolved response.
#[must_use]
pub fn records(name: &LowerName, ttl: Duration, response: &[ResponseRecord]) -> Vec<Record> {
    let ttl = u32::try_from(ttl.as_secs()).unwrap_or(u32::MAX);
    response
        .iter()
        .filter_map(rdata)
        .map(|rd| Record::from_rdata(name.into(), ttl, rd))
        .collect()
}

fn txt_strings(text: &str) -> Vec<String> {
    let mut strings = vec![];
    let mut current = String::new();
    for c in text.chars() {
        if current.len() + c.len_utf8() > TXT_STRING_MAX_LEN {
            strings.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() || strings.is_empty() {
        strings.push(current);
    }
    strings
}
