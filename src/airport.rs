//! Parser for macOS `airport -s` output.
//!
//! airport prints a header followed by one access point per line, with the
//! RSSI already in dBm:
//!
//! ```text
//!                             SSID BSSID             RSSI CHANNEL HT CC SECURITY (auth/unicast/group)
//!                          HomeNet aa:bb:cc:dd:ee:ff -55  6       Y  US WPA2(PSK/AES/AES)
//! ```

use log::trace;

use crate::error::WifiScanError;
use crate::wifi::Wifi;

const MIN_FIELDS: usize = 6;

/// Parses airport output, one access point per qualifying line.
///
/// Lines with fewer than six fields, a non-numeric RSSI column or a
/// positive RSSI are skipped. This parser never fails.
pub fn parse_airport(output: &str) -> Result<Vec<Wifi>, WifiScanError> {
    let mut wifis = Vec::new();

    for line in output.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }
        let Ok(rssi) = fields[2].parse::<i64>() else {
            continue;
        };
        if rssi > 0 {
            trace!("airport: skipping positive rssi {} for {}", rssi, fields[1]);
            continue;
        }

        let wifi = Wifi::new(fields[0], fields[1].to_lowercase(), rssi);
        trace!("airport: {:?}", wifi);
        wifis.push(wifi);
    }

    Ok(wifis)
}
