//! Dispatch from a platform tag to the matching scan-output parser.

use log::debug;

use crate::airport::parse_airport;
use crate::error::WifiScanError;
use crate::iwlist::parse_iwlist;
use crate::netsh::parse_netsh;
use crate::platform::Platform;
use crate::wifi::Wifi;

/// Parses captured scan output for the OS named by `os`.
///
/// `os` must be one of `"windows"`, `"darwin"` or `"linux"`; anything else
/// returns [`WifiScanError::UnsupportedPlatform`] without looking at
/// `output`.
///
/// # Example
///
/// ```
/// let output = "MyNet AA:BB:CC:DD:EE:FF -55 6 Y US WPA2(PSK/AES/AES)";
/// let wifis = wifiscan::parse(output, "darwin").unwrap();
/// assert_eq!(wifis[0].hardware_id, "aa:bb:cc:dd:ee:ff");
/// assert_eq!(wifis[0].signal_strength, -55);
/// ```
pub fn parse(output: &str, os: &str) -> Result<Vec<Wifi>, WifiScanError> {
    let platform: Platform = os.parse()?;
    parse_platform(output, platform)
}

/// Parses captured scan output with the parser for `platform`.
pub fn parse_platform(output: &str, platform: Platform) -> Result<Vec<Wifi>, WifiScanError> {
    debug!("parsing {} bytes of {} scan output", output.len(), platform);

    let wifis = match platform {
        Platform::Windows => parse_netsh(output)?,
        Platform::Darwin => parse_airport(output)?,
        Platform::Linux => parse_iwlist(output)?,
    };

    debug!("{} access points found in {} output", wifis.len(), platform);
    Ok(wifis)
}
