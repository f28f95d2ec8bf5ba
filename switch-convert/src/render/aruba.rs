//! Aruba AOS-CX 6100 configuration writer.
//!
//! Shared by the Cisco and HP source directions. VLANs and interfaces are
//! emitted in numeric order regardless of source order.

use cfgtext_core::{numeric_key, ConfigWriter};

use crate::model::{InterfaceRecord, NetworkConfig, TriState, VlanRecord};
use crate::policy::{self, Membership};
use crate::profile::TranslationProfile;

const INDENT: usize = 4;

/// Render `model` as AOS-CX configuration.
///
/// Applies the voice-VLAN native rule to the model before rendering.
pub fn render_aruba6100(model: &mut NetworkConfig, profile: &TranslationProfile) -> String {
    for intf in model.interfaces.values_mut() {
        if policy::apply_voice_native(intf, profile) {
            tracing::debug!(
                interface = %intf.id,
                native = ?intf.native_vlan,
                "voice port takes access vlan as native"
            );
        }
    }

    let mut w = ConfigWriter::new(INDENT);

    if let Some(hostname) = model.hostname() {
        w.line(format!("hostname {hostname}"));
    }
    if let Some(location) = model.snmp_location() {
        w.line(format!("snmp-server system-location {location}"));
    }

    let mut vlans: Vec<&VlanRecord> = model.vlans.values().collect();
    vlans.sort_by(|a, b| numeric_key(&a.id).cmp(&numeric_key(&b.id)));
    for vlan in vlans {
        write_vlan(&mut w, vlan, profile);
    }

    w.line("spanning-tree mode rpvst");
    w.line("spanning-tree");

    let mut interfaces: Vec<&InterfaceRecord> = model.interfaces.values().collect();
    interfaces.sort_by(|a, b| numeric_key(&a.id).cmp(&numeric_key(&b.id)));
    for intf in interfaces {
        write_interface(&mut w, intf, model, profile);
    }

    w.finish()
}

fn write_vlan(w: &mut ConfigWriter, vlan: &VlanRecord, profile: &TranslationProfile) {
    w.line(format!("vlan {}", vlan.id));
    if let Some(name) = &vlan.name {
        w.child(format!("name {name}"));
    }
    if policy::is_voice_vlan(vlan, profile) {
        w.child("voice");
    }
}

fn write_interface(
    w: &mut ConfigWriter,
    intf: &InterfaceRecord,
    model: &NetworkConfig,
    profile: &TranslationProfile,
) {
    w.line(format!("interface {}{}", profile.aruba_port_prefix, intf.id));

    match intf.shutdown {
        TriState::On => w.child("shutdown"),
        TriState::Off => w.child("no shutdown"),
        TriState::Unspecified => {}
    }
    if intf.qos_trust_cos {
        w.child("qos trust cos");
    }
    if let Some(description) = &intf.description {
        w.child(format!("description {description}"));
    }
    if let Some(poe) = policy::poe_statement(intf) {
        w.child(poe);
    }
    if let Some(speed) = &intf.speed {
        w.child(policy::speed_statement(speed));
    }

    match policy::membership(intf, model.source, profile) {
        Membership::Trunk { native, allowed } => {
            w.child(format!("vlan trunk native {native}"));
            w.child(format!("vlan trunk allowed {}", allowed.join(",")));
        }
        Membership::Access(vlan) => w.child(format!("vlan access {vlan}")),
        Membership::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::model::PortMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_model_renders_spanning_tree_only() {
        let mut model = NetworkConfig::new(Dialect::Cisco);
        assert_eq!(
            render_aruba6100(&mut model, &TranslationProfile::default()),
            "spanning-tree mode rpvst\nspanning-tree"
        );
    }

    #[test]
    fn sorts_vlans_and_interfaces_numerically() {
        let mut model = NetworkConfig::new(Dialect::HpProCurve);
        model.vlan_mut("100");
        model.vlan_mut("20").voice = true;
        model.vlan_mut("901");
        model.interface_mut("10").access_vlan = Some("20".to_string());
        model.interface_mut("9").access_vlan = Some("20".to_string());

        let out = render_aruba6100(&mut model, &TranslationProfile::default());
        assert_eq!(
            out,
            "vlan 20\n    voice\nvlan 100\nvlan 901\n    voice\n\
             spanning-tree mode rpvst\nspanning-tree\n\
             interface 1/1/9\n    vlan access 20\n\
             interface 1/1/10\n    vlan access 20"
        );
    }

    #[test]
    fn renders_port_attributes_in_fixed_order() {
        let mut model = NetworkConfig::new(Dialect::Cisco);
        let intf = model.interface_mut("5");
        intf.shutdown = TriState::On;
        intf.qos_trust_cos = true;
        intf.description = Some("Desk".to_string());
        intf.poe = TriState::On;
        intf.mode = Some(PortMode::Access);
        intf.access_vlan = Some("20".to_string());
        intf.voice_vlan = Some("901".to_string());

        let out = render_aruba6100(&mut model, &TranslationProfile::default());
        assert!(out.ends_with(
            "interface 1/1/5\n    shutdown\n    qos trust cos\n    description Desk\n    \
             no power-over-ethernet\n    vlan trunk native 20\n    vlan trunk allowed 20,901"
        ));
    }

    #[test]
    fn honours_profile_prefix_and_voice_vlan() {
        let profile = TranslationProfile {
            voice_vlan: "950".to_string(),
            aruba_port_prefix: "2/1/".to_string(),
            ..TranslationProfile::default()
        };
        let mut model = NetworkConfig::new(Dialect::HpProCurve);
        model.vlan_mut("950");
        model.vlan_mut("901");
        model.interface_mut("3");

        let out = render_aruba6100(&mut model, &profile);
        assert!(out.contains("vlan 901\nvlan 950\n    voice"));
        assert!(out.ends_with("interface 2/1/3"));
    }
}
