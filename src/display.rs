//! Table rendering for parsed access points.
//!
//! # Output Format
//! ```text
//! SSID                             BSSID              SIGNAL
//! ---------------------------------------------------------------------
//! HomeNet                          aa:bb:cc:dd:ee:ff  -55 dBm ████
//! CafeSpot                         11:22:33:44:55:66  -78 dBm ██░░
//! <hidden>                         de:ad:be:ef:ca:fe  -90 dBm ░░░░
//! ```

use std::fmt::Write;

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::error::WifiScanError;
use crate::wifi::Wifi;

/// Renders a parse result in the requested format.
///
/// Returns the text to print and the parse error, if any. A
/// [`WifiScanError::MalformedSignalValue`] still renders the records
/// collected before the bad line; other errors render nothing.
pub fn render_outcome(
    result: Result<Vec<Wifi>, WifiScanError>,
    format: OutputFormat,
    sort: bool,
) -> Result<(String, Option<WifiScanError>)> {
    let (mut wifis, error) = match result {
        Ok(wifis) => (wifis, None),
        Err(err @ WifiScanError::MalformedSignalValue { .. }) => (err.partial().to_vec(), Some(err)),
        Err(err) => return Ok((String::new(), Some(err))),
    };

    if sort {
        sort_by_signal(&mut wifis);
    }

    let text = match format {
        OutputFormat::Table => render_table(&wifis),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&wifis).context("Failed to serialize results")?;
            format!("{}\n", json)
        }
    };

    Ok((text, error))
}

/// Renders access points as a table, one per line.
pub fn render_table(wifis: &[Wifi]) -> String {
    if wifis.is_empty() {
        return "No networks found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<32} {:<18} {}", "SSID", "BSSID", "SIGNAL");
    let _ = writeln!(out, "{}", "-".repeat(69));

    for wifi in wifis {
        let name = if wifi.network_name.is_empty() {
            "<hidden>".to_string()
        } else {
            truncate_name(&wifi.network_name, 32)
        };
        let _ = writeln!(
            out,
            "{:<32} {:<18} {:>4} dBm {}",
            name,
            wifi.hardware_id,
            wifi.signal_strength,
            signal_to_bar(wifi.signal_strength)
        );
    }

    out
}

/// Sorts strongest signal first, keeping input order among equal signals.
pub fn sort_by_signal(wifis: &mut [Wifi]) {
    wifis.sort_by(|a, b| b.signal_strength.cmp(&a.signal_strength));
}

/// Truncates a name to at most `max_len` characters, marking the cut with "...".
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let kept: String = name.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        name.to_string()
    }
}

/// Four-segment bar for a dBm reading.
fn signal_to_bar(dbm: i64) -> &'static str {
    match dbm {
        -55..=i64::MAX => "████",
        -65..=-56 => "███░",
        -75..=-66 => "██░░",
        -85..=-76 => "█░░░",
        _ => "░░░░",
    }
}
