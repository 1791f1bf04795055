use crate::error::Error;
use crate::host::Host;
use crate::response::GeneratedAt;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use trust_dns_client::rr::LowerName;

pub type SharedConfig = Arc<Config>;

const DEFAULT_RECORD_TTL: Duration = Duration::from_secs(60);

/// geocrab configuration, loaded with [`Config::try_from_file`] or [`Config::try_from_reader`].
///
/// Those constructors also check every host location; deserializing a `Config` directly skips
/// that check.
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Owner name of the DNS records built from a resolution.
    pub name: LowerName,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_record_ttl")]
    pub record_ttl: Duration,
    #[serde_as(as = "Rfc3339")]
    #[serde(default = "OffsetDateTime::now_utc")]
    generated_at: OffsetDateTime,
    #[serde(default)]
    pub hosts: Vec<Host>,
}

fn default_record_ttl() -> Duration {
    DEFAULT_RECORD_TTL
}

impl Config {
    /// Load a [`Config`] from the JSON file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the path can't be opened or read, [`Error::InvalidJSON`] if the
    /// content isn't a valid config, and [`Error::InvalidHost`] if a host location is out of
    /// range.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        Self::try_from_reader(BufReader::new(f))
    }

    /// Load a [`Config`] from JSON read from `reader`. See [`Config::try_from_file`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJSON`] or [`Error::InvalidHost`].
    pub fn try_from_reader(reader: impl Read) -> Result<Self, Error> {
        let conf: Config = serde_json::from_reader(reader)?;
        conf.hosts_are_valid()?;
        Ok(conf)
    }

    /// When the host list was generated. Configs without an explicit `generated_at` use the
    /// time they were loaded.
    #[must_use]
    pub fn generated_at(&self) -> GeneratedAt {
        GeneratedAt(self.generated_at)
    }

    fn hosts_are_valid(&self) -> Result<(), Error> {
        for host in &self.hosts {
            host.location.validate().map_err(|err| Error::InvalidHost {
                name: host.name.clone(),
                source: Box::new(err),
            })?;
        }
        Ok(())
    }
}
