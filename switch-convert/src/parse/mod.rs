//! Source-dialect readers that build a [`NetworkConfig`](crate::model::NetworkConfig).
//!
//! Parsers never fail: lines they do not understand are skipped.

pub mod cisco;
pub mod hp;

pub use cisco::parse_cisco;
pub use hp::parse_hp;

use crate::dialect::Dialect;
use crate::model::NetworkConfig;

/// Parse `text` as `dialect`. Aruba is a render-only target and yields `None`.
pub fn parse(dialect: Dialect, text: &str) -> Option<NetworkConfig> {
    match dialect {
        Dialect::Cisco => Some(parse_cisco(text)),
        Dialect::HpProCurve => Some(parse_hp(text)),
        Dialect::Aruba6100 => None,
    }
}
