//! Normalized in-memory view of a switch configuration.
//!
//! Every parser fills a [`NetworkConfig`] and every generator reads one. The
//! model holds two projections of VLAN membership: per-VLAN port sets (the
//! Cisco/HP view, consumed by the HP generator) and per-interface access/trunk
//! fields (the Aruba view). Parsers keep both in step.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::dialect::Dialect;

/// Three-valued flag for settings where "not mentioned" differs from "off".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    #[default]
    Unspecified,
    On,
    Off,
}

impl TriState {
    pub fn is_on(self) -> bool {
        self == TriState::On
    }

    pub fn is_off(self) -> bool {
        self == TriState::Off
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::On
        } else {
            TriState::Off
        }
    }
}

/// Switchport mode as declared by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortMode {
    Access,
    Trunk,
}

impl PortMode {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "access" => Some(PortMode::Access),
            "trunk" => Some(PortMode::Trunk),
            _ => None,
        }
    }
}

/// Interface statement kept in source order for generators that replay them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PortDirective {
    Description(String),
    Poe(bool),
    Shutdown,
}

/// Device-wide statement captured outside any block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceDirective {
    Hostname { name: String },
    SnmpCommunity {
        community: String,
        access: Option<String>,
    },
    /// Location text exactly as written after `snmp-server location`.
    SnmpLocation { location: String },
    SpanningTree { mode: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VlanRecord {
    pub id: String,
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub voice: bool,
    pub untagged_ports: IndexSet<String>,
    pub tagged_ports: IndexSet<String>,
}

impl VlanRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceRecord {
    pub id: String,
    pub description: Option<String>,
    pub mode: Option<PortMode>,
    pub access_vlan: Option<String>,
    pub voice_vlan: Option<String>,
    pub trunk_vlans: Vec<String>,
    pub native_vlan: Option<String>,
    pub poe: TriState,
    pub qos_trust_cos: bool,
    pub shutdown: TriState,
    pub speed: Option<String>,
    pub directives: Vec<PortDirective>,
}

impl InterfaceRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Append a trunk VLAN unless it is already listed.
    pub fn add_trunk_vlan(&mut self, vlan: &str) {
        if !self.trunk_vlans.iter().any(|v| v == vlan) {
            self.trunk_vlans.push(vlan.to_string());
        }
    }
}

/// Parsed configuration, owned by a single translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    pub source: Dialect,
    pub vlans: IndexMap<String, VlanRecord>,
    pub interfaces: IndexMap<String, InterfaceRecord>,
    pub device: Vec<DeviceDirective>,
}

impl NetworkConfig {
    pub fn new(source: Dialect) -> Self {
        Self {
            source,
            vlans: IndexMap::new(),
            interfaces: IndexMap::new(),
            device: Vec::new(),
        }
    }

    /// Return the VLAN with `id`, creating it at the end of the map if absent.
    pub fn vlan_mut(&mut self, id: &str) -> &mut VlanRecord {
        self.vlans
            .entry(id.to_string())
            .or_insert_with(|| VlanRecord::new(id))
    }

    /// Return the interface with `id`, creating it at the end of the map if absent.
    pub fn interface_mut(&mut self, id: &str) -> &mut InterfaceRecord {
        self.interfaces
            .entry(id.to_string())
            .or_insert_with(|| InterfaceRecord::new(id))
    }

    /// Last hostname statement, if any.
    pub fn hostname(&self) -> Option<&str> {
        self.device.iter().rev().find_map(|d| match d {
            DeviceDirective::Hostname { name } => Some(name.as_str()),
            _ => None,
        })
    }

    /// First SNMP location statement, if any.
    pub fn snmp_location(&self) -> Option<&str> {
        self.device.iter().find_map(|d| match d {
            DeviceDirective::SnmpLocation { location } => Some(location.as_str()),
            _ => None,
        })
    }
}
