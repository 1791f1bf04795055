use crate::config::SharedConfig;
use crate::dns;
use crate::geo::GeoPoint;
use crate::host::nearest_with_distance;
use crate::response::{build_response, ResponseRecord};
use tracing::{debug, warn};
use trust_dns_proto::rr::Record;

/// Answers geolocated queries against a loaded [`Config`][crate::config::Config].
///
/// Cheap to clone and safe to share between threads; every resolution only reads the
/// configuration.
#[derive(Clone, Debug)]
pub struct Resolver {
    config: SharedConfig,
}

impl Resolver {
    #[must_use]
    pub fn new(config: SharedConfig) -> Self {
        Resolver { config }
    }

    /// Choose the configured host nearest to `query` and build the response records.
    #[must_use]
    pub fn resolve(&self, query: GeoPoint) -> Vec<ResponseRecord> {
        let selected = match nearest_with_distance(&query, &self.config.hosts) {
            Some((host, distance_km)) => {
                debug!(
                    "chose \"{}\" ({}) at {distance_km:.1}km for [{},{}]",
                    host.name, host.address, query.latitude, query.longitude
                );
                Some(host)
            }
            None => {
                warn!("no hosts configured, failing query");
                None
            }
        };
        build_response(&query, selected, self.config.generated_at())
    }

    /// Resolve `query` and map the response onto DNS records for the configured name.
    #[must_use]
    pub fn dns_records(&self, query: GeoPoint) -> Vec<Record> {
        self.records_for(&self.resolve(query))
    }

    /// Map an already resolved response onto DNS records for the configured name.
    #[must_use]
    pub fn records_for(&self, response: &[ResponseRecord]) -> Vec<Record> {
        dns::records(&self.config.name, self.config.record_ttl, response)
    }
}
