use std::fmt;
use std::str::FromStr;

use cfgtext_core::significant_lines;
use serde::Serialize;
use thiserror::Error;

/// Configuration language of a switch family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Cisco IOS / IOS-XE (Catalyst 2960 and similar).
    Cisco,
    /// HP ProCurve 2520 / 2530.
    #[serde(rename = "hp")]
    HpProCurve,
    /// Aruba AOS-CX 6100.
    #[serde(rename = "aruba6100")]
    Aruba6100,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Cisco => "cisco",
            Dialect::HpProCurve => "hp",
            Dialect::Aruba6100 => "aruba6100",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect '{0}' (expected cisco, hp or aruba6100)")]
pub struct DialectParseError(pub String);

impl FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cisco" | "ios" => Ok(Dialect::Cisco),
            "hp" | "procurve" | "hp2520" | "hp2530" => Ok(Dialect::HpProCurve),
            "aruba" | "aruba6100" | "aoscx" | "aos-cx" => Ok(Dialect::Aruba6100),
            other => Err(DialectParseError(other.to_string())),
        }
    }
}

/// Guess the dialect of a configuration from characteristic statements.
///
/// Each line votes for the dialect whose syntax it can only belong to. Ties and
/// inputs with no characteristic lines yield `None`.
pub fn detect_dialect(text: &str) -> Option<Dialect> {
    let mut cisco = 0usize;
    let mut hp = 0usize;
    let mut aruba = 0usize;

    for line in significant_lines(text) {
        let lower = line.to_ascii_lowercase();
        if lower.starts_with("switchport ")
            || lower.starts_with("power inline ")
            || lower.starts_with("spanning-tree mode rapid-pvst")
            || lower.starts_with("interface gigabitethernet")
            || lower.starts_with("interface fastethernet")
            || lower.starts_with("interface vlan")
        {
            cisco += 1;
        } else if lower.starts_with("untagged ")
            || lower.starts_with("tagged ")
            || lower.starts_with("speed-duplex ")
            || lower == "no power-over-ethernet"
            || lower.starts_with("; ")
        {
            hp += 1;
        } else if lower.starts_with("interface 1/1/")
            || lower.starts_with("vlan trunk ")
            || lower.starts_with("vlan access ")
            || lower.starts_with("snmp-server system-location")
            || lower == "spanning-tree mode rpvst"
        {
            aruba += 1;
        }
    }

    let best = cisco.max(hp).max(aruba);
    if best == 0 {
        return None;
    }
    match (cisco == best, hp == best, aruba == best) {
        (true, false, false) => Some(Dialect::Cisco),
        (false, true, false) => Some(Dialect::HpProCurve),
        (false, false, true) => Some(Dialect::Aruba6100),
        _ => None,
    }
}
