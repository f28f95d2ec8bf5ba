//! Switch configuration translation between Cisco IOS, HP ProCurve and Aruba AOS-CX.
//!
//! Campus refreshes replace Catalyst 2960 and ProCurve 2520/2530 access
//! switches with Aruba 6100s (or, occasionally, 2960s with ProCurves). The
//! dialects describe the same things (VLANs, port membership, PoE, port
//! state) with different syntax and different defaults, so a line-by-line
//! rewrite is not enough. This library reads a source configuration into a
//! normalized model and renders that model in the target dialect.
//!
//! # Architecture
//!
//! - [`model`]: the normalized VLAN/interface model shared by all directions
//! - [`parse`]: Cisco IOS and HP ProCurve readers
//! - [`render`]: Aruba 6100 and HP ProCurve writers
//! - [`policy`]: conversion heuristics (voice VLAN native, uplink trunking,
//!   access+voice trunking, PoE on shut ports, speed mapping)
//! - [`pipeline`]: one `translate` entry point per supported direction
//! - [`profile`]: site conventions (voice VLAN, uplink port, port prefix)
//! - [`dialect`]: dialect names and auto-detection
//! - [`summary`], [`inspect`]: reporting helpers for the CLI
//!
//! Supported directions are Cisco → Aruba 6100, HP → Aruba 6100 and
//! Cisco → HP. Lines outside the modelled subset are ignored, and translation
//! never fails: any input, including an empty one, produces output.
//!
//! # Examples
//!
//! ```
//! use switch_convert::pipeline::convert_cisco_to_aruba6100;
//!
//! let cisco = "interface GigabitEthernet1/0/5\n switchport mode trunk\n switchport trunk allowed vlan 10,30-32\n!";
//! let aruba = convert_cisco_to_aruba6100(cisco);
//! assert!(aruba.contains("vlan trunk allowed 10,30,31,32"));
//! ```
//!
//! # Built on cfgtext-core
//!
//! Range-list expansion, line helpers and the indented line writer live in
//! `cfgtext-core`; everything vendor-specific is in this crate.

pub mod dialect;
pub mod inspect;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod policy;
pub mod profile;
pub mod render;
pub mod summary;
