pub mod collection;
pub mod config;
pub mod io_helper;
pub mod parallel;
pub mod profile;
pub mod stats;

#[macro_use]
extern crate serde_derive;

pub use collection::{CollectionTermStatistics, TermStatEntry};
pub use config::{StatsConfig, ZeroFrequencyPolicy};
pub use profile::TermProfile;
pub use stats::CountStats;

pub type HashMap<K, V> = fnv::FnvHashMap<K, V>;

use std::{error, fmt, io};

/// Why a profile was refused at ingestion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileErr {
    EmptyTerm,
    /// A counter for this term (or the collection, when `None`) would overflow.
    Overflow(Option<String>),
}

#[derive(Debug)]
pub enum Error {
    /// Average length asked of a collection with no documents.
    EmptyCollection,
    InvalidProfile(ProfileErr),
    /// Partial statistics built under a different config.
    ConfigMismatch,
    IO(io::Error),
    BadJson(serde_json::Error),
    Context(String, Box<Error>),
}

impl Error {
    pub fn with_context<S>(self, msg: S) -> Error
    where
        S: Into<String>,
    {
        Error::Context(msg.into(), Box::new(self))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCollection => write!(f, "collection has no documents"),
            Error::InvalidProfile(ProfileErr::EmptyTerm) => {
                write!(f, "invalid profile: empty term")
            }
            Error::InvalidProfile(ProfileErr::Overflow(Some(term))) => {
                write!(f, "invalid profile: counter overflow for term {:?}", term)
            }
            Error::InvalidProfile(ProfileErr::Overflow(None)) => {
                write!(f, "invalid profile: collection length overflow")
            }
            Error::ConfigMismatch => write!(f, "cannot merge statistics built under another config"),
            Error::IO(err) => write!(f, "io: {}", err),
            Error::BadJson(err) => write!(f, "json: {}", err),
            Error::Context(msg, inner) => write!(f, "{}: {}", msg, inner),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IO(err) => Some(err),
            Error::BadJson(err) => Some(err),
            Error::Context(_, inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IO(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::BadJson(err)
    }
}

impl From<ProfileErr> for Error {
    fn from(err: ProfileErr) -> Error {
        Error::InvalidProfile(err)
    }
}
