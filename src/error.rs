//! Error types.

/// Error enumerates the possible geocrab error states.
///
/// Note that an empty host list is not an error: it resolves to a
/// [`ResponseRecord::Fail`][crate::response::ResponseRecord::Fail] record.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a latitude is not finite or falls outside `-90..=90` degrees.
    #[error("latitude {0} is outside of [-90, 90]")]
    InvalidLatitude(f64),

    /// Returned when a longitude is not finite or falls outside `-180..=180` degrees.
    #[error("longitude {0} is outside of [-180, 180]")]
    InvalidLongitude(f64),

    /// Returned when a coordinate given on the command line can't be parsed as a number.
    #[error("invalid coordinate argument: \"{0}\"")]
    InvalidCoordinateArg(String),

    /// Returned when [loading a `Config`][crate::config::Config::try_from_file] finds a host
    /// whose location is out of range.
    #[error("host \"{name}\" has an invalid location")]
    InvalidHost {
        name: String,
        #[source]
        source: Box<Error>,
    },

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when [trying to load a `Config`][crate::config::Config::try_from_file] fails
    /// due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
