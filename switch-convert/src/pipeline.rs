//! Parse-then-render pipelines, one per supported direction.
//!
//! Every call builds its own [`NetworkConfig`](crate::model::NetworkConfig)
//! and drops it once the text is rendered, so translations share no state.

use std::fmt;

use crate::dialect::Dialect;
use crate::parse::{parse_cisco, parse_hp};
use crate::profile::TranslationProfile;
use crate::render::{render_aruba6100, render_hp_procurve};
use crate::summary::{summarize, ConversionSummary};

/// Supported source → target pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    CiscoToAruba6100,
    HpToAruba6100,
    CiscoToHp,
}

impl Direction {
    pub const ALL: [Direction; 3] = [
        Direction::CiscoToAruba6100,
        Direction::HpToAruba6100,
        Direction::CiscoToHp,
    ];

    /// Direction for a dialect pair, or `None` when it is not implemented.
    pub fn from_dialects(from: Dialect, to: Dialect) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.source() == from && d.target() == to)
    }

    pub fn source(self) -> Dialect {
        match self {
            Direction::CiscoToAruba6100 | Direction::CiscoToHp => Dialect::Cisco,
            Direction::HpToAruba6100 => Dialect::HpProCurve,
        }
    }

    pub fn target(self) -> Dialect {
        match self {
            Direction::CiscoToAruba6100 | Direction::HpToAruba6100 => Dialect::Aruba6100,
            Direction::CiscoToHp => Dialect::HpProCurve,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source(), self.target())
    }
}

/// Rendered output plus counts describing what was translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub output: String,
    pub summary: ConversionSummary,
}

pub fn run(direction: Direction, text: &str, profile: &TranslationProfile) -> Translation {
    let mut model = match direction {
        Direction::HpToAruba6100 => parse_hp(text),
        Direction::CiscoToAruba6100 | Direction::CiscoToHp => parse_cisco(text),
    };
    tracing::debug!(
        %direction,
        vlans = model.vlans.len(),
        interfaces = model.interfaces.len(),
        "parsed source config"
    );

    let output = match direction {
        Direction::CiscoToAruba6100 | Direction::HpToAruba6100 => {
            render_aruba6100(&mut model, profile)
        }
        Direction::CiscoToHp => render_hp_procurve(&model, profile),
    };
    let summary = summarize(&model, &output);

    Translation { output, summary }
}

pub fn translate_with_profile(
    direction: Direction,
    text: &str,
    profile: &TranslationProfile,
) -> String {
    run(direction, text, profile).output
}

/// Translate with the built-in site profile.
pub fn translate(direction: Direction, text: &str) -> String {
    translate_with_profile(direction, text, &TranslationProfile::default())
}

pub fn convert_cisco_to_aruba6100(cisco: &str) -> String {
    translate(Direction::CiscoToAruba6100, cisco)
}

pub fn convert_hp2520_to_aruba6100(hp: &str) -> String {
    translate(Direction::HpToAruba6100, hp)
}

pub fn convert_cisco_to_hp(cisco: &str) -> String {
    translate(Direction::CiscoToHp, cisco)
}
