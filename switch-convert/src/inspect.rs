use colored::Colorize;

use crate::model::{DeviceDirective, InterfaceRecord, NetworkConfig, TriState, VlanRecord};

/// Render a parsed model as one line per record.
pub fn render_model(model: &NetworkConfig) -> String {
    let mut out = Vec::new();
    out.push(
        format!(
            "source={} vlans={} interfaces={} device_lines={}",
            model.source,
            model.vlans.len(),
            model.interfaces.len(),
            model.device.len()
        )
        .cyan()
        .to_string(),
    );

    for directive in &model.device {
        out.push(format!("device {}", device_text(directive)));
    }
    for vlan in model.vlans.values() {
        out.push(vlan_text(vlan));
    }
    for intf in model.interfaces.values() {
        out.push(interface_text(intf));
    }

    out.join("\n")
}

fn device_text(directive: &DeviceDirective) -> String {
    match directive {
        DeviceDirective::Hostname { name } => format!("hostname name={name}"),
        DeviceDirective::SnmpCommunity { community, access } => format!(
            "snmp_community community={community} access={}",
            access.as_deref().unwrap_or("-")
        ),
        DeviceDirective::SnmpLocation { location } => format!("snmp_location location={location}"),
        DeviceDirective::SpanningTree { mode } => format!("spanning_tree mode={mode}"),
    }
}

fn vlan_text(vlan: &VlanRecord) -> String {
    format!(
        "vlan {} name={} ip={} voice={} untagged={} tagged={}",
        vlan.id,
        or_dash(vlan.name.as_deref()),
        or_dash(vlan.ip_address.as_deref()),
        vlan.voice,
        list(vlan.untagged_ports.iter()),
        list(vlan.tagged_ports.iter())
    )
}

fn interface_text(intf: &InterfaceRecord) -> String {
    let mode = match intf.mode {
        Some(crate::model::PortMode::Access) => "access",
        Some(crate::model::PortMode::Trunk) => "trunk",
        None => "-",
    };
    format!(
        "interface {} mode={} access={} voice={} trunk={} native={} poe={} shutdown={} qos={} speed={} description={}",
        intf.id,
        mode,
        or_dash(intf.access_vlan.as_deref()),
        or_dash(intf.voice_vlan.as_deref()),
        list(intf.trunk_vlans.iter()),
        or_dash(intf.native_vlan.as_deref()),
        tristate(intf.poe),
        tristate(intf.shutdown),
        intf.qos_trust_cos,
        or_dash(intf.speed.as_deref()),
        or_dash(intf.description.as_deref())
    )
}

fn tristate(value: TriState) -> &'static str {
    match value {
        TriState::On => "on",
        TriState::Off => "off",
        TriState::Unspecified => "-",
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn list<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let joined = items.map(String::as_str).collect::<Vec<_>>().join(",");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}
