//! Cisco IOS running-config reader.
//!
//! Statements are attributed to the block opened most recently by a
//! `vlan` or `interface` header. `!` and `end` close it; an SVI
//! (`interface VlanN`) has no `exit` of its own and stays open until one of
//! those or the next header.

use cfgtext_core::{
    expand_range_list, keyword_arg, last_token, significant_lines, strip_quotes,
    trailing_number, validate_range_list,
};

use crate::dialect::Dialect;
use crate::model::{
    DeviceDirective, NetworkConfig, PortDirective, PortMode, TriState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Context {
    Top,
    Vlan(String),
    Svi(String),
    Interface(String),
}

/// Parse IOS configuration text into a [`NetworkConfig`].
pub fn parse_cisco(text: &str) -> NetworkConfig {
    let mut model = NetworkConfig::new(Dialect::Cisco);
    let mut context = Context::Top;

    for line in significant_lines(text) {
        if capture_device_line(&mut model, line) {
            continue;
        }

        if let Some(arg) = keyword_arg(line, "vlan") {
            context = open_vlan(&mut model, arg).unwrap_or(context);
            continue;
        }

        if let Some(arg) = keyword_arg(line, "interface") {
            context = open_interface(&mut model, arg);
            continue;
        }

        if line == "!" || line == "end" {
            context = Context::Top;
            continue;
        }

        match &context {
            Context::Vlan(id) => vlan_line(&mut model, id, line, false),
            Context::Svi(id) => vlan_line(&mut model, id, line, true),
            Context::Interface(id) => interface_line(&mut model, id, line),
            Context::Top => tracing::trace!(line, "ignoring top-level line"),
        }
    }

    model
}

/// Record device-wide statements. Returns true when the line was consumed.
fn capture_device_line(model: &mut NetworkConfig, line: &str) -> bool {
    if let Some(name) = keyword_arg(line, "hostname") {
        model.device.push(DeviceDirective::Hostname {
            name: name.to_string(),
        });
        return true;
    }

    if line == "spanning-tree mode rapid-pvst" {
        model.device.push(DeviceDirective::SpanningTree {
            mode: "rapid-pvst".to_string(),
        });
        return true;
    }

    if let Some(rest) = keyword_arg(line, "snmp-server community") {
        let mut parts = rest.split_whitespace();
        if let Some(community) = parts.next() {
            model.device.push(DeviceDirective::SnmpCommunity {
                community: strip_quotes(community),
                access: parts.next().map(ToOwned::to_owned),
            });
        }
        return true;
    }

    if let Some(location) = keyword_arg(line, "snmp-server location") {
        model.device.push(DeviceDirective::SnmpLocation {
            location: location.to_string(),
        });
        return true;
    }

    false
}

/// `vlan <id>`; list or named forms (`vlan internal allocation ...`) are not blocks.
fn open_vlan(model: &mut NetworkConfig, arg: &str) -> Option<Context> {
    if !arg.bytes().all(|b| b.is_ascii_digit()) {
        tracing::trace!(arg, "ignoring non-numeric vlan statement");
        return None;
    }
    model.vlan_mut(arg);
    Some(Context::Vlan(arg.to_string()))
}

fn open_interface(model: &mut NetworkConfig, arg: &str) -> Context {
    let name = arg.split_whitespace().next().unwrap_or(arg);

    let svi_id = name
        .get(..4)
        .filter(|prefix| prefix.eq_ignore_ascii_case("vlan"))
        .and_then(|_| name.get(4..));
    if let Some(id) = svi_id {
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(name, "SVI name without a VLAN number");
            return Context::Top;
        }
        model.vlan_mut(id);
        return Context::Svi(id.to_string());
    }

    let Some(digits) = trailing_number(name) else {
        tracing::trace!(name, "interface without a port index");
        return Context::Top;
    };
    // `Gi0/01` and `Gi0/1` are the same port.
    let id = digits
        .parse::<u32>()
        .map_or_else(|_| digits.to_string(), |n| n.to_string());
    if !model.interfaces.contains_key(&id) {
        // IOS only prints `shutdown` for disabled ports.
        model.interface_mut(&id).shutdown = TriState::Off;
    }
    Context::Interface(id)
}

fn vlan_line(model: &mut NetworkConfig, id: &str, line: &str, svi: bool) {
    let Some(vlan) = model.vlans.get_mut(id) else {
        return;
    };

    if let Some(name) = keyword_arg(line, "name") {
        vlan.name = Some(strip_quotes(name));
    } else if let Some(address) = keyword_arg(line, "ip address").filter(|_| svi) {
        vlan.ip_address = Some(address.to_string());
    } else {
        tracing::trace!(vlan = id, line, "ignoring vlan line");
    }
}

fn interface_line(model: &mut NetworkConfig, id: &str, line: &str) {
    let Some(intf) = model.interfaces.get_mut(id) else {
        return;
    };

    if let Some(text) = keyword_arg(line, "description") {
        intf.description = Some(text.to_string());
        intf.directives
            .push(PortDirective::Description(text.to_string()));
    } else if let Some(arg) = keyword_arg(line, "switchport mode") {
        intf.mode = last_token(arg).and_then(PortMode::parse);
    } else if let Some(arg) = keyword_arg(line, "switchport access vlan") {
        let vlan = last_token(arg).unwrap_or(arg).to_string();
        intf.access_vlan = Some(vlan.clone());
        add_member(model, &vlan, id, false);
    } else if let Some(arg) = keyword_arg(line, "switchport trunk allowed vlan") {
        let spec = arg.strip_prefix("add ").map(str::trim).unwrap_or(arg);
        if let Err(err) = validate_range_list(spec) {
            tracing::debug!(interface = id, spec, %err, "skipping trunk allowed list");
            return;
        }
        let vlans = expand_range_list(spec);
        for vlan in &vlans {
            intf.add_trunk_vlan(vlan);
        }
        for vlan in &vlans {
            add_member(model, vlan, id, true);
        }
    } else if let Some(arg) = keyword_arg(line, "switchport trunk native vlan") {
        intf.native_vlan = last_token(arg).map(ToOwned::to_owned);
    } else if let Some(arg) = keyword_arg(line, "switchport voice vlan") {
        let vlan = last_token(arg).unwrap_or(arg).to_string();
        intf.voice_vlan = Some(vlan.clone());
        add_member(model, &vlan, id, true);
    } else if let Some(arg) = keyword_arg(line, "power inline") {
        let mode = arg.to_ascii_lowercase();
        let enabled = !mode.contains("never");
        intf.poe = TriState::from(enabled);
        // ProCurve has no counterpart for `static` or `consumption`.
        if !enabled || mode.contains("auto") {
            intf.directives.push(PortDirective::Poe(enabled));
        }
    } else if is_qos_trust(line) {
        intf.qos_trust_cos = true;
    } else if line == "no shutdown" {
        intf.shutdown = TriState::Off;
    } else if line == "shutdown" {
        intf.shutdown = TriState::On;
        intf.poe = TriState::Off;
        intf.directives.push(PortDirective::Shutdown);
    } else {
        tracing::trace!(interface = id, line, "ignoring interface line");
    }
}

fn is_qos_trust(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.contains("trust cos") || lower.contains("qos trust") || lower.contains("mls qos")
}

/// Add a port to a VLAN's untagged or tagged set. VLANs that were never
/// declared are left alone.
fn add_member(model: &mut NetworkConfig, vlan: &str, port: &str, tagged: bool) {
    let Some(record) = model.vlans.get_mut(vlan) else {
        tracing::debug!(vlan, port, "membership for undeclared vlan dropped");
        return;
    };
    let ports = if tagged {
        &mut record.tagged_ports
    } else {
        &mut record.untagged_ports
    };
    ports.insert(port.to_string());
}
