use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// A race time parsed from a "MM:SS" string, stored as a relative
/// duration in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RaceTime(u32);

impl RaceTime {
    pub fn from_seconds(seconds: u32) -> RaceTime {
        Self(seconds)
    }

    pub fn total_seconds(&self) -> u32 {
        self.0
    }

    pub fn minutes(&self) -> u32 {
        self.0 / 60
    }

    pub fn seconds(&self) -> u32 {
        self.0 % 60
    }
}

impl FromStr for RaceTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((minutes, seconds)) = s.split_once(':') else {
            return Err(TimeParseError::MissingSeparator(s.to_owned()));
        };

        let minutes: u32 = minutes
            .parse()
            .map_err(|_| TimeParseError::InvalidNumber(s.to_owned()))?;
        let seconds: u32 = seconds
            .parse()
            .map_err(|_| TimeParseError::InvalidNumber(s.to_owned()))?;

        if seconds >= 60 {
            return Err(TimeParseError::SecondsOutOfRange(s.to_owned()));
        }

        Ok(RaceTime(minutes * 60 + seconds))
    }
}

impl Display for RaceTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes(), self.seconds())
    }
}

/// The error type for parsing a "MM:SS" race time string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// The time string does not contain the `:` separator.
    MissingSeparator(String),

    /// The minutes or the seconds part is not an unsigned integer.
    InvalidNumber(String),

    /// The seconds part is not within `0..60`.
    SecondsOutOfRange(String),
}

impl Error for TimeParseError {}

impl Display for TimeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parse_error = "time parse error:";

        match self {
            TimeParseError::MissingSeparator(time) => {
                write!(f, "{parse_error} `{time}` is missing the `:` separator")
            }
            TimeParseError::InvalidNumber(time) => {
                write!(f, "{parse_error} `{time}` contains a non-numeric part")
            }
            TimeParseError::SecondsOutOfRange(time) => {
                write!(f, "{parse_error} the seconds of `{time}` are not within 0..60")
            }
        }
    }
}
