use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WifiScanError;

/// Operating system family whose scan tool produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// `netsh wlan show networks mode=bssid`
    Windows,
    /// `airport -s`
    Darwin,
    /// `iwlist <iface> scan`
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Darwin, Platform::Linux];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
        }
    }

    /// The command whose stdout this platform's parser understands.
    pub fn scan_command(self) -> &'static str {
        match self {
            Platform::Windows => "netsh wlan show networks mode=bssid",
            Platform::Darwin => {
                "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport -s"
            }
            Platform::Linux => "iwlist <interface> scan",
        }
    }

    /// Platform of the running host, if it is one of the supported families.
    pub fn host() -> Option<Platform> {
        match std::env::consts::OS {
            "windows" => Some(Platform::Windows),
            "macos" => Some(Platform::Darwin),
            "linux" => Some(Platform::Linux),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = WifiScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows" => Ok(Platform::Windows),
            "darwin" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            other => Err(WifiScanError::UnsupportedPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        let err = "Linux".parse::<Platform>().unwrap_err();
        assert_eq!(err, WifiScanError::UnsupportedPlatform("Linux".to_string()));
    }

    #[test]
    fn unknown_tag_names_the_value() {
        let err = "plan9".parse::<Platform>().unwrap_err();
        assert_eq!(err.to_string(), "`plan9` is not a recognized OS");
    }
}
