//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use chrono::format::ParseError as DateParseError;

use crate::time::TimeParseError;

/// The result type that uses [DatasetError] as the error type.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// The error type for deserializing a remote dataset document.
///
/// A malformed record fails the whole load: a record that cannot be
/// deserialized cannot be scaled or drawn later, so the loader rejects it
/// here instead of letting it surface inside the chart computation.
#[derive(Debug)]
pub enum DatasetError {
    /// A [serde_json::Error] encountered while deserializing the
    /// document body.
    Json(serde_json::Error),

    /// A [chrono::format::ParseError] encountered while parsing an
    /// observation date.
    Date(DateParseError),

    /// A [TimeParseError] encountered while parsing a "MM:SS" race time.
    Time(TimeParseError),
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DatasetError::Json(error) => Some(error),
            DatasetError::Date(error) => Some(error),
            DatasetError::Time(error) => Some(error),
        }
    }
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let dataset_error = "dataset error:";

        match self {
            DatasetError::Json(error) => {
                write!(f, "{dataset_error} JSON deserialization error: {error}")
            }
            DatasetError::Date(error) => {
                write!(f, "{dataset_error} could not parse the observation date: {error}")
            }
            DatasetError::Time(error) => {
                write!(f, "{dataset_error} could not parse the race time: {error}")
            }
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(error: serde_json::Error) -> Self {
        DatasetError::Json(error)
    }
}

impl From<DateParseError> for DatasetError {
    fn from(error: DateParseError) -> Self {
        DatasetError::Date(error)
    }
}

impl From<TimeParseError> for DatasetError {
    fn from(error: TimeParseError) -> Self {
        DatasetError::Time(error)
    }
}
