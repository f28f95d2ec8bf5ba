//! Conversion heuristics that are not 1:1 syntax mappings.
//!
//! Each rule is a standalone function over the model so generators stay
//! declarative and every rule can be tested on its own.

use cfgtext_core::numeric_key;

use crate::dialect::Dialect;
use crate::model::{InterfaceRecord, PortMode, VlanRecord};
use crate::profile::TranslationProfile;

/// VLAN membership rendering chosen for an Aruba port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    Trunk { native: String, allowed: Vec<String> },
    Access(String),
    None,
}

pub fn is_voice_vlan_id(id: &str, profile: &TranslationProfile) -> bool {
    id == profile.voice_vlan
}

/// A VLAN is rendered as voice when flagged in the source or when it is the
/// site's voice VLAN.
pub fn is_voice_vlan(vlan: &VlanRecord, profile: &TranslationProfile) -> bool {
    vlan.voice || is_voice_vlan_id(&vlan.id, profile)
}

/// Phones on the voice VLAN send data untagged: such a port without an
/// explicit native VLAN takes its access VLAN as native.
///
/// Returns whether the interface was changed.
pub fn apply_voice_native(intf: &mut InterfaceRecord, profile: &TranslationProfile) -> bool {
    let on_voice = intf
        .voice_vlan
        .as_deref()
        .is_some_and(|v| is_voice_vlan_id(v, profile));
    if !on_voice || intf.native_vlan.is_some() {
        return false;
    }
    match &intf.access_vlan {
        Some(access) => {
            intf.native_vlan = Some(access.clone());
            true
        }
        None => false,
    }
}

/// The uplink port always gets trunk rendering on Aruba.
pub fn is_uplink_port(intf: &InterfaceRecord, profile: &TranslationProfile) -> bool {
    match (intf.id.parse::<u32>(), profile.uplink_port.parse::<u32>()) {
        (Ok(port), Ok(uplink)) => port == uplink,
        _ => intf.id == profile.uplink_port,
    }
}

/// IOS access ports with a voice VLAN carry two VLANs and must become trunks.
/// Only applies to Cisco sources; HP sources express the same through
/// `tagged` membership. A port with an access VLAN and no `switchport mode`
/// line counts as access.
pub fn access_voice_forces_trunk(intf: &InterfaceRecord, source: Dialect) -> bool {
    source == Dialect::Cisco && is_access_port(intf) && intf.voice_vlan.is_some()
}

fn is_access_port(intf: &InterfaceRecord) -> bool {
    match intf.mode {
        Some(mode) => mode == PortMode::Access,
        None => intf.access_vlan.is_some(),
    }
}

pub fn wants_trunk(intf: &InterfaceRecord, source: Dialect, profile: &TranslationProfile) -> bool {
    !intf.trunk_vlans.is_empty()
        || access_voice_forces_trunk(intf, source)
        || is_uplink_port(intf, profile)
}

/// Union of trunk, access and voice VLANs, numerically sorted.
pub fn allowed_vlans(intf: &InterfaceRecord) -> Vec<String> {
    let mut allowed: Vec<&str> = Vec::new();
    let candidates = intf
        .trunk_vlans
        .iter()
        .chain(intf.access_vlan.iter())
        .chain(intf.voice_vlan.iter());
    for vlan in candidates {
        if !vlan.is_empty() && !allowed.contains(&vlan.as_str()) {
            allowed.push(vlan);
        }
    }
    allowed.sort_by(|a, b| numeric_key(a).cmp(&numeric_key(b)));
    allowed.into_iter().map(ToOwned::to_owned).collect()
}

pub fn native_vlan<'a>(intf: &'a InterfaceRecord, profile: &'a TranslationProfile) -> &'a str {
    intf.native_vlan
        .as_deref()
        .or(intf.access_vlan.as_deref())
        .unwrap_or(profile.default_native_vlan.as_str())
}

pub fn membership(
    intf: &InterfaceRecord,
    source: Dialect,
    profile: &TranslationProfile,
) -> Membership {
    let allowed = allowed_vlans(intf);
    if !allowed.is_empty() && wants_trunk(intf, source, profile) {
        return Membership::Trunk {
            native: native_vlan(intf, profile).to_string(),
            allowed,
        };
    }
    match &intf.access_vlan {
        Some(access) => Membership::Access(access.clone()),
        None => Membership::None,
    }
}

/// Aruba PoE statement. A shut port never supplies power.
pub fn poe_statement(intf: &InterfaceRecord) -> Option<&'static str> {
    if intf.poe.is_off() || intf.shutdown.is_on() {
        Some("no power-over-ethernet")
    } else if intf.poe.is_on() {
        Some("power-over-ethernet")
    } else {
        None
    }
}

/// Map an HP `speed-duplex` token to an Aruba `speed` statement.
///
/// Rates are detected by substring, so `auto-100` advertises 10 and 100 Mb/s
/// and `auto-1000` all three. Fixed settings such as `100-full` pass through
/// lower-cased.
pub fn speed_statement(token: &str) -> String {
    let value = token.to_ascii_lowercase();
    if !value.starts_with("auto") {
        return format!("speed {value}");
    }

    let mut speeds = Vec::new();
    for (rate, label) in [("10", "10m"), ("100", "100m"), ("1000", "1g")] {
        if value.contains(rate) {
            speeds.push(label);
        }
    }

    if speeds.is_empty() {
        "speed auto".to_string()
    } else {
        format!("speed auto {}", speeds.join(" "))
    }
}

/// HP community access level for an IOS `RO`/`RW` keyword.
pub fn snmp_access_level(access: Option<&str>) -> &'static str {
    match access {
        Some("RO") => "Operator",
        _ => "Manager",
    }
}
