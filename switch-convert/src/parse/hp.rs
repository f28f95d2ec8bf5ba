//! HP ProCurve (2520/2530) configuration reader.
//!
//! ProCurve declares membership inside VLAN blocks (`untagged 1-12`,
//! `tagged 24`), so ports are addressed by the ids in those lists rather than
//! by an open interface block.

use std::sync::LazyLock;

use cfgtext_core::{expand_port_list, keyword_arg, significant_lines, trim_quotes};
use regex::Regex;

use crate::dialect::Dialect;
use crate::model::{DeviceDirective, NetworkConfig, PortDirective, TriState};

static VLAN_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^vlan\s+(\d+)").expect("valid vlan header pattern"));
static INTERFACE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^interface\s+(\d+)\b").expect("valid interface header pattern")
});
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^name\s+(.+)$").expect("valid name pattern"));
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:name|description)\s+(.+)$").expect("valid description pattern")
});
static IP_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ip address\s+(.+)$").expect("valid ip pattern"));
static VOICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^voice\b").expect("valid voice pattern"));
static TAGGED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^tagged\s+(.+)$").expect("valid tagged pattern"));
static UNTAGGED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^untagged\s+(.+)$").expect("valid untagged pattern"));
static HOSTNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^hostname\s+(.+)$").expect("valid hostname pattern"));
static NO_POE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^no power-over-ethernet\b").expect("valid no-poe pattern")
});
static POE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^power-over-ethernet\b").expect("valid poe pattern"));
static SPEED_DUPLEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^speed-duplex\s+(\S+)").expect("valid speed pattern"));
static VOICE_VLAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^voice vlan\s+(\d+)").expect("valid voice vlan pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum Context {
    Top,
    Vlan(String),
    Interface(String),
}

/// Parse ProCurve configuration text into a [`NetworkConfig`].
pub fn parse_hp(text: &str) -> NetworkConfig {
    let mut model = NetworkConfig::new(Dialect::HpProCurve);
    let mut context = Context::Top;

    for line in significant_lines(text) {
        if let Some(location) = keyword_arg(line, "snmp-server location") {
            model.device.push(DeviceDirective::SnmpLocation {
                location: location.to_string(),
            });
            continue;
        }

        if let Some(id) = capture(&VLAN_HEADER, line) {
            model.vlan_mut(id);
            context = Context::Vlan(id.to_string());
            continue;
        }

        // Inside a VLAN block only VLAN statements and `exit` mean anything.
        if let Context::Vlan(id) = &context {
            if line.eq_ignore_ascii_case("exit") {
                context = Context::Top;
            } else {
                vlan_line(&mut model, id, line);
            }
            continue;
        }

        if let Some(id) = capture(&INTERFACE_HEADER, line) {
            model.interface_mut(id);
            context = Context::Interface(id.to_string());
            continue;
        }

        if let Some(name) = capture(&HOSTNAME, line) {
            model.device.push(DeviceDirective::Hostname {
                name: trim_quotes(name).to_string(),
            });
            continue;
        }

        if line == "exit" || line == "!" || line == "end" {
            context = Context::Top;
            continue;
        }

        match &context {
            Context::Interface(id) => interface_line(&mut model, id, line),
            _ => tracing::trace!(line, "ignoring top-level line"),
        }
    }

    model
}

fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

fn vlan_line(model: &mut NetworkConfig, id: &str, line: &str) {
    if let Some(ports) = capture(&TAGGED, line) {
        for port in expand_port_list(ports) {
            model.interface_mut(&port).add_trunk_vlan(id);
            model.vlan_mut(id).tagged_ports.insert(port);
        }
        return;
    }

    if let Some(ports) = capture(&UNTAGGED, line) {
        for port in expand_port_list(ports) {
            let intf = model.interface_mut(&port);
            intf.access_vlan = Some(id.to_string());
            if intf.native_vlan.is_none() {
                intf.native_vlan = Some(id.to_string());
            }
            model.vlan_mut(id).untagged_ports.insert(port);
        }
        return;
    }

    let vlan = model.vlan_mut(id);
    if let Some(name) = capture(&NAME, line) {
        vlan.name = Some(trim_quotes(name).to_string());
    } else if let Some(address) = capture(&IP_ADDRESS, line) {
        vlan.ip_address = Some(address.to_string());
    } else if VOICE.is_match(line) {
        vlan.voice = true;
    } else {
        tracing::trace!(vlan = id, line, "ignoring vlan line");
    }
}

fn interface_line(model: &mut NetworkConfig, id: &str, line: &str) {
    let intf = model.interface_mut(id);

    if let Some(text) = capture(&DESCRIPTION, line) {
        let text = trim_quotes(text).to_string();
        intf.description = Some(text.clone());
        intf.directives.push(PortDirective::Description(text));
    } else if NO_POE.is_match(line) {
        intf.poe = TriState::Off;
        intf.directives.push(PortDirective::Poe(false));
    } else if POE.is_match(line) {
        intf.poe = TriState::On;
        intf.directives.push(PortDirective::Poe(true));
    } else if line.eq_ignore_ascii_case("disable") {
        intf.shutdown = TriState::On;
        intf.directives.push(PortDirective::Shutdown);
    } else if line.eq_ignore_ascii_case("enable") {
        intf.shutdown = TriState::Off;
    } else if line.to_ascii_lowercase().contains("trust cos") {
        intf.qos_trust_cos = true;
    } else if let Some(token) = capture(&SPEED_DUPLEX, line) {
        intf.speed = Some(token.to_string());
    } else if let Some(vlan) = capture(&VOICE_VLAN, line) {
        intf.voice_vlan = Some(vlan.to_string());
    } else {
        tracing::trace!(interface = id, line, "ignoring interface line");
    }
}
