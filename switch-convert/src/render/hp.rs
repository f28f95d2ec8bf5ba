//! HP ProCurve writer for models read from Cisco IOS.
//!
//! Blocks are emitted in first-seen order. Interface blocks replay the
//! description/PoE/shutdown statements in the order they were parsed.

use cfgtext_core::{strip_quotes, ConfigWriter};

use crate::model::{DeviceDirective, InterfaceRecord, NetworkConfig, PortDirective, VlanRecord};
use crate::policy;
use crate::profile::TranslationProfile;

const INDENT: usize = 3;

/// Warning emitted at the top of every Cisco→HP translation.
pub const COMPATIBILITY_BANNER: [&str; 5] = [
    "; !!! WARNING !!!",
    "; ---------------------------- ",
    "; 2960 configs should not be converted to HP 2520/2530 due to supply concerns.",
    "; It's getting harder and harder to recieve these - Brandon",
    "; =========================== ",
];

pub fn render_hp_procurve(model: &NetworkConfig, profile: &TranslationProfile) -> String {
    let mut w = ConfigWriter::new(INDENT);

    for line in COMPATIBILITY_BANNER {
        w.line(line);
    }

    for directive in &model.device {
        if let Some(line) = device_line(directive) {
            w.line(line);
        }
    }

    for vlan in model.vlans.values() {
        write_vlan(&mut w, vlan, profile);
    }

    for intf in model.interfaces.values() {
        write_interface(&mut w, intf);
    }

    w.finish()
}

fn device_line(directive: &DeviceDirective) -> Option<String> {
    match directive {
        DeviceDirective::Hostname { name } => Some(format!("hostname {name}")),
        DeviceDirective::SpanningTree { mode } if mode == "rapid-pvst" => {
            Some("spanning-tree".to_string())
        }
        DeviceDirective::SpanningTree { .. } => None,
        DeviceDirective::SnmpCommunity { community, access } => Some(format!(
            "snmp-server community \"{community}\" {}",
            policy::snmp_access_level(access.as_deref())
        )),
        DeviceDirective::SnmpLocation { location } => Some(format!(
            "snmp-server location \"{}\"",
            strip_quotes(location)
        )),
    }
}

fn write_vlan(w: &mut ConfigWriter, vlan: &VlanRecord, profile: &TranslationProfile) {
    w.line(format!("vlan {}", vlan.id));
    if let Some(name) = &vlan.name {
        w.child(format!("name \"{name}\""));
    }
    if !vlan.untagged_ports.is_empty() {
        w.child(format!("untagged {}", join(&vlan.untagged_ports)));
    }
    if !vlan.tagged_ports.is_empty() {
        w.child(format!("tagged {}", join(&vlan.tagged_ports)));
    }
    if policy::is_voice_vlan(vlan, profile) {
        w.child("voice");
    }
    match &vlan.ip_address {
        Some(address) => w.child(format!("ip address {address}")),
        None => w.child("no ip address"),
    }
    w.child("exit");
}

fn write_interface(w: &mut ConfigWriter, intf: &InterfaceRecord) {
    w.line(format!("interface {}", intf.id));
    for directive in &intf.directives {
        match directive {
            PortDirective::Description(text) => {
                w.child(format!("name \"{}\"", strip_quotes(text)));
            }
            PortDirective::Poe(true) => w.child("power-over-ethernet"),
            PortDirective::Poe(false) => w.child("no power-over-ethernet"),
            PortDirective::Shutdown => {
                w.child("disable");
                w.child("no power-over-ethernet");
            }
        }
    }
    w.child("exit");
}

fn join<'a>(ports: impl IntoIterator<Item = &'a String>) -> String {
    ports
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
