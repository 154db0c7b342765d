//! Access point record and the per-call accumulator used by the
//! multi-line parsers.

use serde::{Deserialize, Serialize};

/// An access point discovered by a wireless scan.
///
/// The serialized keys (`essid`, `ssid`, `rssi`) are the ones consumers of
/// the JSON output already expect, so they differ from the field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wifi {
    /// Network name advertised by the access point. Empty for hidden networks.
    #[serde(rename = "essid")]
    pub network_name: String,

    /// Link-layer address of the access point (the BSSID).
    #[serde(rename = "ssid")]
    pub hardware_id: String,

    /// Approximate signal strength in dBm.
    #[serde(rename = "rssi")]
    pub signal_strength: i64,
}

impl Wifi {
    pub fn new(
        network_name: impl Into<String>,
        hardware_id: impl Into<String>,
        signal_strength: i64,
    ) -> Self {
        Self {
            network_name: network_name.into(),
            hardware_id: hardware_id.into(),
            signal_strength,
        }
    }
}

/// Where a multi-line parser is in the current record cycle.
///
/// Completion is not a state of its own: a completed record is emitted and
/// the cycle starts over at `AwaitingName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    AwaitingName,
    AwaitingId,
    AwaitingSignal,
}

/// Partially built record for the netsh and iwlist parsers.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    current: Wifi,
}

impl Accumulator {
    pub(crate) fn state(&self) -> State {
        if self.current.hardware_id.is_empty() {
            if self.current.network_name.is_empty() {
                State::AwaitingName
            } else {
                State::AwaitingId
            }
        } else {
            State::AwaitingSignal
        }
    }

    pub(crate) fn has_name(&self) -> bool {
        !self.current.network_name.is_empty()
    }

    /// Sets the network name if `value` is non-empty.
    pub(crate) fn set_name(&mut self, value: &str) {
        if !value.is_empty() {
            self.current.network_name = value.to_string();
        }
    }

    pub(crate) fn set_hardware_id(&mut self, value: String) {
        self.current.hardware_id = value;
    }

    pub(crate) fn set_signal(&mut self, dbm: i64) {
        self.current.signal_strength = dbm;
    }

    /// Takes the record out if both hardware id and signal are set,
    /// leaving a blank accumulator behind.
    pub(crate) fn take_complete(&mut self) -> Option<Wifi> {
        if self.current.hardware_id.is_empty() || self.current.signal_strength == 0 {
            return None;
        }
        Some(std::mem::take(&mut self.current))
    }
}

/// Halves a positive level reading and offsets it into the dBm range.
///
/// Integer division truncates toward zero.
pub(crate) fn level_to_dbm(level: i64) -> i64 {
    level / 2 - 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_walks_through_states() {
        let mut acc = Accumulator::default();
        assert_eq!(acc.state(), State::AwaitingName);

        acc.set_name("HomeNet");
        assert_eq!(acc.state(), State::AwaitingId);
        assert!(acc.take_complete().is_none());

        acc.set_hardware_id("aa:bb:cc:dd:ee:ff".to_string());
        assert_eq!(acc.state(), State::AwaitingSignal);
        assert!(acc.take_complete().is_none());

        acc.set_signal(-65);
        let wifi = acc.take_complete().unwrap();
        assert_eq!(wifi, Wifi::new("HomeNet", "aa:bb:cc:dd:ee:ff", -65));
        assert_eq!(acc.state(), State::AwaitingName);
        assert!(!acc.has_name());
    }

    #[test]
    fn empty_name_is_ignored() {
        let mut acc = Accumulator::default();
        acc.set_name("");
        assert!(!acc.has_name());
    }

    #[test]
    fn name_alone_never_completes() {
        let mut acc = Accumulator::default();
        acc.set_name("Lonely");
        acc.set_signal(-40);
        assert!(acc.take_complete().is_none());
    }

    #[test]
    fn level_conversion_truncates() {
        assert_eq!(level_to_dbm(70), -65);
        assert_eq!(level_to_dbm(99), -51);
        assert_eq!(level_to_dbm(1), -100);
        assert_eq!(level_to_dbm(0), -100);
    }

    #[test]
    fn serializes_with_legacy_keys() {
        let wifi = Wifi::new("HomeNet", "aa:bb:cc:dd:ee:ff", -65);
        let json = serde_json::to_string(&wifi).unwrap();
        assert_eq!(json, r#"{"essid":"HomeNet","ssid":"aa:bb:cc:dd:ee:ff","rssi":-65}"#);
    }
}
