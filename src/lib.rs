//! WiFi scan output parser
//!
//! This library turns the text printed by each platform's native wireless
//! scan tool into a list of [`Wifi`] records (network name, BSSID and an
//! approximate dBm signal strength). It never runs the scan tool itself:
//! the caller captures the output and passes it in with the platform tag.
//!
//! # Modules
//!
//! - [`airport`] - macOS `airport -s` parser
//! - [`config`] - Saved defaults for the command-line tool
//! - [`display`] - Table rendering for the command-line tool
//! - [`error`] - Custom error types for the library
//! - [`iwlist`] - Linux `iwlist <iface> scan` parser
//! - [`netsh`] - Windows `netsh wlan show networks mode=bssid` parser
//! - [`parse`] - Platform dispatch
//! - [`platform`] - The closed set of supported platforms
//! - [`wifi`] - The access point record
//!
//! # Example Usage
//!
//! ```
//! use wifiscan::{parse, Wifi};
//!
//! let output = "SSID 1 : \"HomeNet\"\nBSSID 1 : aa:bb:cc:dd:ee:ff\nSignal : 70%\n";
//! let wifis = parse(output, "windows").unwrap();
//! assert_eq!(wifis, vec![Wifi::new("HomeNet", "aa:bb:cc:dd:ee:ff", -65)]);
//! ```

/// Parser for macOS `airport -s` tabular output.
pub mod airport;

/// Configuration module for the CLI's saved defaults.
/// Handles reading/writing the TOML config file.
pub mod config;

/// Human-readable rendering of parse results.
pub mod display;

/// Error module defining custom error types for the library.
/// Uses `thiserror` for ergonomic error handling.
pub mod error;

/// Parser for Linux `iwlist` scan output.
pub mod iwlist;

/// Parser for Windows `netsh` BSSID listings.
pub mod netsh;

/// Entry points that pick a parser by platform.
pub mod parse;

/// Supported platform tags.
pub mod platform;

/// The access point record.
pub mod wifi;

pub use airport::parse_airport;
pub use error::WifiScanError;
pub use iwlist::parse_iwlist;
pub use netsh::parse_netsh;
pub use parse::{parse, parse_platform};
pub use platform::Platform;
pub use wifi::Wifi;
