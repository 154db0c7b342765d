//! Parser for Windows `netsh wlan show networks mode=bssid` output.
//!
//! netsh prints one block per network, with one sub-block per BSSID:
//!
//! ```text
//! SSID 1 : HomeNet
//!     Network type            : Infrastructure
//!     Authentication          : WPA2-Personal
//!     BSSID 1                 : aa:bb:cc:dd:ee:ff
//!          Signal             : 70%
//!          Channel            : 6
//! ```
//!
//! Signal is reported as a percentage and converted to an approximate dBm
//! value with `percent / 2 - 100`.

use log::{trace, warn};

use crate::error::WifiScanError;
use crate::wifi::{level_to_dbm, Accumulator, State, Wifi};

/// Parses netsh output into access points, in input order.
///
/// A `%` line with the expected shape whose number does not parse aborts
/// the scan with [`WifiScanError::MalformedSignalValue`], which carries the
/// records completed so far.
pub fn parse_netsh(output: &str) -> Result<Vec<Wifi>, WifiScanError> {
    let mut wifis = Vec::new();
    let mut acc = Accumulator::default();

    for (index, line) in output.lines().enumerate() {
        if !acc.has_name() {
            if let Some(value) = ssid_value(line) {
                acc.set_name(value.replace('"', "").trim());
            }
        }

        match acc.state() {
            State::AwaitingName | State::AwaitingId => {
                if !line.contains("BSSID") {
                    continue;
                }
                let fields: Vec<&str> = line.split_whitespace().collect();
                if fields.len() == 4 {
                    acc.set_hardware_id(fields[3].to_string());
                }
            }
            State::AwaitingSignal => {
                if line.contains('%') {
                    let fields: Vec<&str> = line.split_whitespace().collect();
                    if fields.len() == 3 {
                        let raw = fields[2].replacen('%', "", 1);
                        match raw.parse::<i64>() {
                            Ok(percent) => acc.set_signal(level_to_dbm(percent)),
                            Err(source) => {
                                warn!("netsh line {}: bad signal value '{}'", index + 1, raw);
                                return Err(WifiScanError::MalformedSignalValue {
                                    line: index + 1,
                                    value: raw,
                                    source,
                                    collected: wifis,
                                });
                            }
                        }
                    }
                }
            }
        }

        if let Some(wifi) = acc.take_complete() {
            trace!("netsh: {:?}", wifi);
            wifis.push(wifi);
        }
    }

    Ok(wifis)
}

/// Returns the text after `SSID <digits> :` if the line contains that label.
///
/// The label must start the line or follow a non-alphanumeric character, so
/// `BSSID 2 : ...` is not read as a network name.
fn ssid_value(line: &str) -> Option<&str> {
    for (start, label) in line.match_indices("SSID ") {
        let preceded_by_word = line[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric());
        if preceded_by_word {
            continue;
        }
        let rest = &line[start + label.len()..];
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            continue;
        }
        if let Some(value) = rest[digits..].strip_prefix(" :") {
            return Some(value);
        }
    }
    None
}
