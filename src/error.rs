use std::num::ParseIntError;

use thiserror::Error;

use crate::wifi::Wifi;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WifiScanError {
    #[error("`{0}` is not a recognized OS")]
    UnsupportedPlatform(String),

    #[error("Malformed signal value '{value}' on line {line}: {source}")]
    MalformedSignalValue {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
        /// Records completed before the failing line.
        collected: Vec<Wifi>,
    },
}

impl WifiScanError {
    /// Records that were fully parsed before the error, if any.
    pub fn partial(&self) -> &[Wifi] {
        match self {
            WifiScanError::UnsupportedPlatform(_) => &[],
            WifiScanError::MalformedSignalValue { collected, .. } => collected,
        }
    }

    pub fn into_partial(self) -> Vec<Wifi> {
        match self {
            WifiScanError::UnsupportedPlatform(_) => Vec::new(),
            WifiScanError::MalformedSignalValue { collected, .. } => collected,
        }
    }
}
