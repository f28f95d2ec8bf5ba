use std::path::PathBuf;

use pretty_assertions::assert_eq;
use switch_convert::pipeline::{
    convert_cisco_to_aruba6100, convert_cisco_to_hp, convert_hp2520_to_aruba6100, run,
    translate_with_profile, Direction,
};
use switch_convert::profile::TranslationProfile;
use switch_convert::render::COMPATIBILITY_BANNER;

fn fixture(path: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path);
    std::fs::read_to_string(&path).expect("fixture readable")
}

fn interface_block<'a>(output: &'a str, header: &str) -> Vec<&'a str> {
    output
        .lines()
        .skip_while(|l| *l != header)
        .skip(1)
        .take_while(|l| l.starts_with(' '))
        .map(str::trim)
        .collect()
}

#[test]
fn cisco_access_port_with_voice_becomes_trunk() {
    let cisco = "\
vlan 20
!
vlan 901
!
interface GigabitEthernet1/0/7
 switchport access vlan 20
 switchport mode access
 switchport voice vlan 901
!";
    let out = convert_cisco_to_aruba6100(cisco);
    assert_eq!(
        interface_block(&out, "interface 1/1/7"),
        vec![
            "no shutdown",
            "vlan trunk native 20",
            "vlan trunk allowed 20,901"
        ]
    );
}

#[test]
fn cisco_access_vlan_without_mode_line_still_trunks_voice() {
    let cisco = "\
vlan 20
!
vlan 901
!
interface GigabitEthernet1/0/7
 switchport access vlan 20
 switchport voice vlan 901
!";
    let out = convert_cisco_to_aruba6100(cisco);
    assert_eq!(
        interface_block(&out, "interface 1/1/7"),
        vec![
            "no shutdown",
            "vlan trunk native 20",
            "vlan trunk allowed 20,901"
        ]
    );
}

#[test]
fn cisco_non_ascii_interface_name_still_translates() {
    let out = convert_cisco_to_hp("interface a\u{e9}\u{20ac}1\n description x\n!");
    assert!(out.ends_with("interface 1\n   name \"x\"\n   exit"));
}

#[test]
fn cisco_trunk_with_out_of_range_vlans_is_skipped() {
    let cisco = "\
interface GigabitEthernet1/0/3
 switchport mode trunk
 switchport trunk allowed vlan 1-4000000000
 switchport trunk allowed vlan add 30
!";
    let out = convert_cisco_to_aruba6100(cisco);
    assert_eq!(
        interface_block(&out, "interface 1/1/3"),
        vec!["no shutdown", "vlan trunk native 1", "vlan trunk allowed 30"]
    );
}

#[test]
fn hp_huge_port_range_creates_no_interfaces() {
    let out = convert_hp2520_to_aruba6100("vlan 10\n   untagged 1-4000000000\n   exit");
    assert_eq!(out, "vlan 10\nspanning-tree mode rpvst\nspanning-tree");
}

#[test]
fn hp_speed_rates_are_detected_by_substring() {
    let hp = "interface 7\n   speed-duplex auto-1000\n   exit\ninterface 8\n   speed-duplex auto-100\n   exit";
    let out = convert_hp2520_to_aruba6100(hp);
    assert_eq!(
        interface_block(&out, "interface 1/1/7"),
        vec!["speed auto 10m 100m 1g"]
    );
    assert_eq!(
        interface_block(&out, "interface 1/1/8"),
        vec!["speed auto 10m 100m"]
    );
}

#[test]
fn cisco_leading_zero_port_index_is_normalized() {
    let out = convert_cisco_to_aruba6100("interface GigabitEthernet0/01\n description Desk\n!");
    assert!(out.ends_with("interface 1/1/1\n    no shutdown\n    description Desk"));
}

#[test]
fn cisco_static_poe_is_not_replayed_on_hp() {
    let out = convert_cisco_to_hp("interface Gi0/5\n power inline static\n!");
    assert!(out.ends_with("interface 5\n   exit"));
}

#[test]
fn cisco_trunk_expands_ranges_and_defaults_native() {
    let cisco = "\
interface GigabitEthernet1/0/12
 switchport mode trunk
 switchport trunk allowed vlan 32,10,30-31
!";
    let out = convert_cisco_to_aruba6100(cisco);
    assert_eq!(
        interface_block(&out, "interface 1/1/12"),
        vec![
            "no shutdown",
            "vlan trunk native 1",
            "vlan trunk allowed 10,30,31,32"
        ]
    );
}

#[test]
fn hp_voice_vlan_port_takes_access_as_native() {
    let hp = "\
interface 5
   voice vlan 901
   exit
vlan 30
   untagged 5
   exit
vlan 901
   tagged 5
   voice
   exit";
    let out = convert_hp2520_to_aruba6100(hp);
    assert_eq!(
        interface_block(&out, "interface 1/1/5"),
        vec!["vlan trunk native 30", "vlan trunk allowed 30,901"]
    );
    assert!(out.contains("vlan 901\n    voice"));
}

#[test]
fn cisco_to_hp_starts_with_banner() {
    let out = convert_cisco_to_hp("hostname lab");
    let head: Vec<&str> = out.lines().take(5).collect();
    assert_eq!(head, COMPATIBILITY_BANNER.to_vec());
    assert_eq!(out.lines().nth(5), Some("hostname lab"));
}

#[test]
fn uplink_port_is_trunk_only_when_it_carries_vlans() {
    let with_vlan = "vlan 1\n   untagged 1\n   exit";
    let out = convert_hp2520_to_aruba6100(with_vlan);
    assert_eq!(
        interface_block(&out, "interface 1/1/1"),
        vec!["vlan trunk native 1", "vlan trunk allowed 1"]
    );

    let voice_only = "interface 1\n   voice vlan 901\n   exit";
    let out = convert_hp2520_to_aruba6100(voice_only);
    assert_eq!(
        interface_block(&out, "interface 1/1/1"),
        vec!["vlan trunk native 1", "vlan trunk allowed 901"]
    );

    let bare = "interface 1\n   name \"Uplink\"\n   exit";
    let out = convert_hp2520_to_aruba6100(bare);
    assert_eq!(
        interface_block(&out, "interface 1/1/1"),
        vec!["description Uplink"]
    );
}

#[test]
fn cisco_fixture_to_aruba() {
    let out = convert_cisco_to_aruba6100(&fixture("fixtures/cisco-2960.cfg"));
    let expected = "\
hostname SW-2960-L2
snmp-server system-location Level 2 Comms
vlan 10
    name Data
vlan 20
    name Staff
vlan 901
    name Voice
    voice
spanning-tree mode rpvst
spanning-tree
interface 1/1/1
    no shutdown
    description Uplink to core
    vlan trunk native 1
    vlan trunk allowed 10,20,901
interface 1/1/2
    no shutdown
    qos trust cos
    description Desk 2
    power-over-ethernet
    vlan trunk native 20
    vlan trunk allowed 20,901
interface 1/1/3
    no shutdown
    description Printer
    no power-over-ethernet
    vlan access 10
interface 1/1/4
    shutdown
    no power-over-ethernet";
    assert_eq!(out, expected);
}

#[test]
fn cisco_fixture_to_hp() {
    let out = convert_cisco_to_hp(&fixture("fixtures/cisco-2960.cfg"));
    let body: Vec<&str> = out.lines().skip(COMPATIBILITY_BANNER.len()).collect();
    assert_eq!(
        body,
        vec![
            "hostname SW-2960-L2",
            "spanning-tree",
            "snmp-server community \"public\" Operator",
            "snmp-server community \"private\" Manager",
            "snmp-server location \"Level 2 Comms\"",
            "vlan 10",
            "   name \"Data\"",
            "   untagged 3",
            "   tagged 1",
            "   ip address 10.0.10.2 255.255.255.0",
            "   exit",
            "vlan 20",
            "   name \"Staff\"",
            "   untagged 2",
            "   tagged 1",
            "   no ip address",
            "   exit",
            "vlan 901",
            "   name \"Voice\"",
            "   tagged 1,2",
            "   voice",
            "   no ip address",
            "   exit",
            "interface 1",
            "   name \"Uplink to core\"",
            "   exit",
            "interface 2",
            "   name \"Desk 2\"",
            "   power-over-ethernet",
            "   exit",
            "interface 3",
            "   name \"Printer\"",
            "   no power-over-ethernet",
            "   exit",
            "interface 4",
            "   disable",
            "   no power-over-ethernet",
            "   exit",
        ]
    );
}

#[test]
fn hp_fixture_to_aruba() {
    let out = convert_hp2520_to_aruba6100(&fixture("fixtures/hp-2530.cfg"));
    let expected = "\
hostname HP-2530-L1
snmp-server system-location \"Comms Room\"
vlan 1
    name DEFAULT_VLAN
vlan 20
    name Staff
vlan 901
    name Voice
    voice
spanning-tree mode rpvst
spanning-tree
interface 1/1/1
    vlan trunk native 1
    vlan trunk allowed 20,901
interface 1/1/2
    description Desk 2
    power-over-ethernet
    vlan trunk native 20
    vlan trunk allowed 20,901
interface 1/1/3
    speed auto 10m 100m
    vlan access 1
interface 1/1/4
    shutdown
    no power-over-ethernet
    vlan access 1";
    assert_eq!(out, expected);
}

#[test]
fn profile_changes_port_prefix_and_voice_vlan() {
    let profile = TranslationProfile {
        voice_vlan: "300".to_string(),
        aruba_port_prefix: "2/1/".to_string(),
        ..TranslationProfile::default()
    };
    let cisco = "\
vlan 300
!
interface GigabitEthernet1/0/9
 switchport access vlan 20
 switchport mode access
 switchport voice vlan 300
!";
    let out = translate_with_profile(Direction::CiscoToAruba6100, cisco, &profile);
    assert!(out.contains("vlan 300\n    voice"));
    assert_eq!(
        interface_block(&out, "interface 2/1/9"),
        vec![
            "no shutdown",
            "vlan trunk native 20",
            "vlan trunk allowed 20,300"
        ]
    );
}

#[test]
fn summary_counts_model_and_output() {
    let translation = run(
        Direction::CiscoToAruba6100,
        &fixture("fixtures/cisco-2960.cfg"),
        &TranslationProfile::default(),
    );
    assert_eq!(translation.summary.vlans, 3);
    assert_eq!(translation.summary.interfaces, 4);
    assert_eq!(translation.summary.tagged_ports, 1);
    assert_eq!(translation.summary.shutdown_ports, 1);
    assert_eq!(translation.summary.device_lines, 5);
    assert_eq!(
        translation.summary.output_lines,
        translation.output.lines().count()
    );
}

#[test]
fn translations_are_deterministic() {
    let text = fixture("fixtures/hp-2530.cfg");
    assert_eq!(
        convert_hp2520_to_aruba6100(&text),
        convert_hp2520_to_aruba6100(&text)
    );
}
