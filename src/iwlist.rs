//! Parser for Linux `iwlist <iface> scan` output.
//!
//! Each cell carries its fields on separate colon-delimited lines:
//!
//! ```text
//!           Cell 01 - Address: 11:22:33:44:55:66
//!                     Quality=40/70  Signal level=-70 dBm
//!                     ESSID:"OfficeWifi"
//! ```
//!
//! Drivers report the signal either in dBm (negative) or as a positive
//! level, which is converted with `level / 2 - 100`.

use log::trace;

use crate::error::WifiScanError;
use crate::wifi::{level_to_dbm, Accumulator, State, Wifi};

const SIGNAL_LABEL: &str = "Signal level=";

/// Parses iwlist output into access points, in input order.
///
/// Unparseable signal levels are skipped rather than reported, so this
/// parser never fails.
pub fn parse_iwlist(output: &str) -> Result<Vec<Wifi>, WifiScanError> {
    let mut wifis = Vec::new();
    let mut acc = Accumulator::default();

    for line in output.lines() {
        if !acc.has_name() && line.contains("ESSID") {
            if let Some((_, value)) = line.trim().split_once(':') {
                acc.set_name(value.replace('"', "").trim());
            }
        }

        match acc.state() {
            State::AwaitingName | State::AwaitingId => {
                if !line.contains("Address") {
                    continue;
                }
                let fields: Vec<&str> = line.split_whitespace().collect();
                if fields.len() == 5 {
                    acc.set_hardware_id(fields[4].to_lowercase());
                }
            }
            State::AwaitingSignal => {
                if line.contains(SIGNAL_LABEL) {
                    match signal_level(line) {
                        Some(level) if level > 0 => acc.set_signal(level_to_dbm(level)),
                        Some(level) => acc.set_signal(level),
                        None => {
                            trace!("iwlist: unreadable signal level in {:?}", line.trim());
                            continue;
                        }
                    }
                }
            }
        }

        if let Some(wifi) = acc.take_complete() {
            trace!("iwlist: {:?}", wifi);
            wifis.push(wifi);
        }
    }

    Ok(wifis)
}

/// Extracts the number after `level=`, cut at the first `/` and ` dB`.
fn signal_level(line: &str) -> Option<i64> {
    let (_, rest) = line.split_once("level=")?;
    let value = rest.split('/').next()?;
    let value = value.split(" dB").next()?;
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_cell() {
        let output = "\
wlan0     Scan completed :
          Cell 01 - ESSID:\"OfficeWifi\"
          Cell 01 - Address: 11:22:33:44:55:66
                    Quality=40/70  Signal level=-70 dBm
";
        let wifis = parse_iwlist(output).unwrap();
        assert_eq!(wifis, vec![Wifi::new("OfficeWifi", "11:22:33:44:55:66", -70)]);
    }

    #[test]
    fn parse_two_cells_with_level_units() {
        let output = "\
                    ESSID:\"HomeNet\"
          Cell 01 - Address: AA:BB:CC:DD:EE:FF
                    Channel:6
                    Frequency:2.437 GHz (Channel 6)
                    Quality=60/100  Signal level=60/100
                    ESSID:\"Garage\"
          Cell 02 - Address: 11:22:33:44:55:66
                    Quality=5/70  Signal level=-95 dBm
";
        let wifis = parse_iwlist(output).unwrap();
        assert_eq!(
            wifis,
            vec![
                Wifi::new("HomeNet", "aa:bb:cc:dd:ee:ff", -70),
                Wifi::new("Garage", "11:22:33:44:55:66", -95),
            ]
        );
    }

    #[test]
    fn name_after_signal_carries_into_next_cell() {
        // Stock iwlist prints ESSID after the signal line, so the name is
        // captured by the following cell.
        let output = "\
          Cell 01 - Address: 11:22:33:44:55:66
                    Quality=40/70  Signal level=-70 dBm
                    ESSID:\"First\"
          Cell 02 - Address: 66:55:44:33:22:11
                    Quality=20/70  Signal level=-85 dBm
                    ESSID:\"Second\"
";
        let wifis = parse_iwlist(output).unwrap();
        assert_eq!(
            wifis,
            vec![
                Wifi::new("", "11:22:33:44:55:66", -70),
                Wifi::new("First", "66:55:44:33:22:11", -85),
            ]
        );
    }

    #[test]
    fn unreadable_signal_is_tolerated() {
        let output = "\
                    ESSID:\"Flaky\"
          Cell 01 - Address: 11:22:33:44:55:66
                    Quality=0/70  Signal level=unknown
                    Quality=30/70  Signal level=-80 dBm
";
        let wifis = parse_iwlist(output).unwrap();
        assert_eq!(wifis, vec![Wifi::new("Flaky", "11:22:33:44:55:66", -80)]);
    }

    #[test]
    fn unreadable_signal_at_end_drops_record() {
        let output = "\
                    ESSID:\"Flaky\"
          Cell 01 - Address: 11:22:33:44:55:66
                    Quality=0/70  Signal level=unknown
";
        assert!(parse_iwlist(output).unwrap().is_empty());
    }

    #[test]
    fn address_without_five_fields_is_skipped() {
        let output = "\
                    ESSID:\"Odd\"
                    Address: 11:22:33:44:55:66
                    Signal level=-70 dBm
";
        assert!(parse_iwlist(output).unwrap().is_empty());
    }

    #[test]
    fn empty_essid_leaves_name_unset() {
        let output = "\
                    ESSID:\"\"
          Cell 01 - Address: 11:22:33:44:55:66
                    Signal level=-70 dBm
";
        let wifis = parse_iwlist(output).unwrap();
        assert_eq!(wifis, vec![Wifi::new("", "11:22:33:44:55:66", -70)]);
    }

    #[test]
    fn colon_in_essid_is_kept() {
        let output = "\
                    ESSID:\"a:b\"
          Cell 01 - Address: 11:22:33:44:55:66
                    Signal level=-70 dBm
";
        let wifis = parse_iwlist(output).unwrap();
        assert_eq!(wifis, vec![Wifi::new("a:b", "11:22:33:44:55:66", -70)]);
    }

    #[test]
    fn essid_without_colon_is_ignored() {
        let output = "\
                    ESSID off/any
          Cell 01 - Address: 11:22:33:44:55:66
                    Signal level=-70 dBm
";
        let wifis = parse_iwlist(output).unwrap();
        assert_eq!(wifis, vec![Wifi::new("", "11:22:33:44:55:66", -70)]);
    }

    #[test]
    fn signal_level_extraction() {
        assert_eq!(signal_level("Quality=40/70  Signal level=-70 dBm"), Some(-70));
        assert_eq!(signal_level("Signal level=60/100"), Some(60));
        assert_eq!(signal_level("Signal level=-48 dBm  Noise level=-95 dBm"), Some(-48));
        assert_eq!(signal_level("Signal level=off"), None);
        assert_eq!(signal_level("Signal level=5000000000/100"), Some(5_000_000_000));
    }

    #[test]
    fn empty_output() {
        assert!(parse_iwlist("").unwrap().is_empty());
    }
}
